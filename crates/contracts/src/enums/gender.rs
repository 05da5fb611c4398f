use serde::{Deserialize, Serialize};

/// Целевой пол для одежды и образов.
///
/// На проводе передаётся русским названием (`"мужской"`, `"женский"`, `"унисекс"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "мужской")]
    Male,
    #[serde(rename = "женский")]
    Female,
    #[default]
    #[serde(rename = "унисекс")]
    Unisex,
}

impl Gender {
    /// Значение, которое ожидает API
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "мужской",
            Gender::Female => "женский",
            Gender::Unisex => "унисекс",
        }
    }

    pub fn all() -> Vec<Gender> {
        vec![Gender::Male, Gender::Female, Gender::Unisex]
    }

    /// Парсинг из значения API
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "мужской" => Some(Gender::Male),
            "женский" => Some(Gender::Female),
            "унисекс" => Some(Gender::Unisex),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"женский\"");
        let parsed: Gender = serde_json::from_str("\"унисекс\"").unwrap();
        assert_eq!(parsed, Gender::Unisex);
    }

    #[test]
    fn test_from_code() {
        for gender in Gender::all() {
            assert_eq!(Gender::from_code(gender.code()), Some(gender));
        }
        assert_eq!(Gender::from_code("male"), None);
    }
}

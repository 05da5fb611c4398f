use serde::{Deserialize, Serialize};

/// Цвета одежды, которые принимает API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    #[serde(rename = "белый")]
    White,
    #[serde(rename = "бежевый")]
    Beige,
    #[serde(rename = "серый")]
    Gray,
    #[serde(rename = "красный")]
    Red,
    #[serde(rename = "розовый")]
    Pink,
    #[serde(rename = "оранжевый")]
    Orange,
    #[serde(rename = "желтый")]
    Yellow,
    #[serde(rename = "зеленый")]
    Green,
    #[serde(rename = "голубой")]
    LightBlue,
    #[serde(rename = "синий")]
    Blue,
    #[serde(rename = "фиолетовый")]
    Purple,
    #[serde(rename = "коричневый")]
    Brown,
    #[serde(rename = "черный")]
    Black,
}

impl Colour {
    pub fn code(&self) -> &'static str {
        match self {
            Colour::White => "белый",
            Colour::Beige => "бежевый",
            Colour::Gray => "серый",
            Colour::Red => "красный",
            Colour::Pink => "розовый",
            Colour::Orange => "оранжевый",
            Colour::Yellow => "желтый",
            Colour::Green => "зеленый",
            Colour::LightBlue => "голубой",
            Colour::Blue => "синий",
            Colour::Purple => "фиолетовый",
            Colour::Brown => "коричневый",
            Colour::Black => "черный",
        }
    }

    /// Все цвета в порядке палитры (для datalist в форме)
    pub fn all() -> Vec<Colour> {
        vec![
            Colour::White,
            Colour::Beige,
            Colour::Gray,
            Colour::Red,
            Colour::Pink,
            Colour::Orange,
            Colour::Yellow,
            Colour::Green,
            Colour::LightBlue,
            Colour::Blue,
            Colour::Purple,
            Colour::Brown,
            Colour::Black,
        ]
    }

    /// Парсинг пользовательского ввода; пробелы по краям игнорируются
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Colour::all().into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Colour::from_code("черный"), Some(Colour::Black));
        assert_eq!(Colour::from_code("  голубой "), Some(Colour::LightBlue));
        assert_eq!(Colour::from_code("чёрный"), None);
        assert_eq!(Colour::from_code(""), None);
    }

    #[test]
    fn test_serde_matches_code() {
        for colour in Colour::all() {
            let json = serde_json::to_string(&colour).unwrap();
            assert_eq!(json, format!("\"{}\"", colour.code()));
        }
    }
}

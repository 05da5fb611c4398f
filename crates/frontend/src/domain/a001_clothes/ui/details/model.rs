use contracts::domain::a001_clothes::aggregate::Clothes;
use contracts::enums::{Colour, Gender};
use serde::Serialize;

/// Редактируемые поля вещи.
///
/// Порядок и имена полей совпадают с телом `PATCH /api/clothes/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClothesForm {
    pub name: String,
    pub description: String,
    pub colours: Vec<String>,
    pub gender: String,
    pub link: String,
    pub image_url: String,
}

impl From<&Clothes> for ClothesForm {
    fn from(clothes: &Clothes) -> Self {
        Self {
            name: clothes.name.clone(),
            description: clothes.description.clone().unwrap_or_default(),
            colours: clothes.colours.iter().map(|c| c.code().to_string()).collect(),
            gender: clothes.gender.unwrap_or_default().code().to_string(),
            link: clothes.link.clone(),
            image_url: clothes.image_url.clone(),
        }
    }
}

impl ClothesForm {
    /// Значения для сохранения: пустые и неизвестные цвета отбрасываются
    pub fn candidate(&self) -> Self {
        Self {
            colours: self
                .colours
                .iter()
                .filter_map(|c| Colour::from_code(c))
                .map(|c| c.code().to_string())
                .collect(),
            ..self.clone()
        }
    }

    pub fn add_colour(&mut self) {
        self.colours.push(String::new());
    }

    pub fn remove_colour(&mut self, index: usize) {
        if index < self.colours.len() {
            self.colours.remove(index);
        }
    }

    pub fn set_colour(&mut self, index: usize, value: String) {
        if let Some(slot) = self.colours.get_mut(index) {
            *slot = value;
        }
    }

    pub fn gender_value(&self) -> Gender {
        Gender::from_code(&self.gender).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::edit_session::EditSession;
    use serde_json::json;

    fn coat() -> Clothes {
        Clothes {
            id: 7,
            name: "Пальто".to_string(),
            description: None,
            colours: vec![Colour::Black, Colour::Gray],
            gender: None,
            link: "https://shop.example/coat".to_string(),
            image_url: "/images/coat.png".to_string(),
        }
    }

    #[test]
    fn test_missing_optionals_do_not_count_as_changes() {
        let form = ClothesForm::from(&coat());
        assert_eq!(form.description, "");
        assert_eq!(form.gender, "унисекс");

        let session = EditSession::new(form.clone());
        assert!(session.plan(&form.candidate()).unwrap().is_empty());
    }

    #[test]
    fn test_blank_and_unknown_colours_are_dropped() {
        let mut form = ClothesForm::from(&coat());
        form.add_colour();
        form.add_colour();
        form.set_colour(3, "бирюзовый".to_string());
        form.set_colour(0, " белый ".to_string());

        let candidate = form.candidate();
        assert_eq!(candidate.colours, vec!["белый", "серый"]);

        let session = EditSession::new(ClothesForm::from(&coat()));
        let plan = session.plan(&candidate).unwrap();
        assert_eq!(
            plan.patch_body().and_then(|b| b.get("colours")),
            Some(&json!(["белый", "серый"]))
        );
    }

    #[test]
    fn test_remove_colour_out_of_range_is_ignored() {
        let mut form = ClothesForm::from(&coat());
        form.remove_colour(5);
        assert_eq!(form.colours.len(), 2);
        form.remove_colour(0);
        assert_eq!(form.colours, vec!["серый"]);
    }

    #[test]
    fn test_gender_value_falls_back_to_unisex() {
        let mut form = ClothesForm::default();
        assert_eq!(form.gender_value(), Gender::Unisex);
        form.gender = "мужской".to_string();
        assert_eq!(form.gender_value(), Gender::Male);
    }
}

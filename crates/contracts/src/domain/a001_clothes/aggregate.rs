use serde::{Deserialize, Serialize};

use crate::enums::{Colour, Gender};

/// Вещь (одежда) в каталоге
///
/// Необязательные поля могут отсутствовать в ответе API, поэтому
/// все поля кроме `id` имеют значения по умолчанию.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clothes {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub colours: Vec<Colour>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image_url: String,
}

/// Тело `POST /api/clothes/ai`: ссылка на товар, из которой генерируется карточка
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothesAiCreate {
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": 7,
            "name": "Пальто",
            "description": "Шерсть",
            "colours": ["черный", "серый"],
            "gender": "женский",
            "link": "https://shop.example/coat",
            "image_url": "/images/coat.png"
        }"#;
        let clothes: Clothes = serde_json::from_str(json).unwrap();
        assert_eq!(clothes.id, 7);
        assert_eq!(clothes.colours, vec![Colour::Black, Colour::Gray]);
        assert_eq!(clothes.gender, Some(Gender::Female));
    }

    #[test]
    fn test_deserialize_sparse() {
        let clothes: Clothes = serde_json::from_str(r#"{"id": 1, "description": null}"#).unwrap();
        assert_eq!(clothes.name, "");
        assert!(clothes.description.is_none());
        assert!(clothes.colours.is_empty());
        assert!(clothes.gender.is_none());
    }
}

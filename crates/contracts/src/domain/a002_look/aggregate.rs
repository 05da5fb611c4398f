use serde::{Deserialize, Serialize};

use crate::domain::a001_clothes::aggregate::Clothes;
use crate::enums::Gender;

/// Категория одежды внутри образа ("Верх", "Обувь", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothesCategory {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub clothes: Vec<Clothes>,
}

/// Образ (лук): метаданные, изображения и категории одежды
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Look {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub clothes_categories: Vec<ClothesCategory>,
    #[serde(default)]
    pub image_prompts: Vec<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub content_json: Option<String>,
    /// Образ прошёл модерацию
    #[serde(default, deserialize_with = "null_as_false")]
    pub checked: bool,
    /// Образ опубликован в соцсетях
    #[serde(default, deserialize_with = "null_as_false")]
    pub pushed: bool,
}

impl Look {
    /// Первое изображение образа, используется как превью в галерее
    pub fn preview_url(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Тело `POST /api/looks/ai`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookAiCreate {
    pub look_description: String,
    pub genders: Vec<Gender>,
}

/// Ответ `POST /api/looks/{id}/publish`: идентификатор фоновой задачи
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    pub task_id: String,
}

/// Поля, по которым API умеет сортировать список образов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookSortField {
    Id,
    Name,
    Checked,
    Pushed,
}

impl LookSortField {
    pub fn code(&self) -> &'static str {
        match self {
            LookSortField::Id => "id",
            LookSortField::Name => "name",
            LookSortField::Checked => "checked",
            LookSortField::Pushed => "pushed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LookSortField::Id => "ID",
            LookSortField::Name => "Название",
            LookSortField::Checked => "Проверено",
            LookSortField::Pushed => "Опубликовано",
        }
    }

    pub fn all() -> Vec<LookSortField> {
        vec![
            LookSortField::Id,
            LookSortField::Name,
            LookSortField::Checked,
            LookSortField::Pushed,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested() {
        let json = r#"{
            "id": 3,
            "name": "Осенний",
            "gender": "унисекс",
            "description": "Тёплый образ. Для прогулок.",
            "clothes_categories": [
                {"id": 10, "name": "Верх", "clothes": [{"id": 5, "name": "Куртка"}]}
            ],
            "image_prompts": ["autumn park"],
            "image_urls": ["https://cdn.example/1.png"],
            "checked": null,
            "pushed": true
        }"#;
        let look: Look = serde_json::from_str(json).unwrap();
        assert_eq!(look.clothes_categories.len(), 1);
        assert_eq!(look.clothes_categories[0].clothes[0].id, 5);
        assert!(!look.checked);
        assert!(look.pushed);
        assert_eq!(look.preview_url(), Some("https://cdn.example/1.png"));
    }

    #[test]
    fn test_ai_create_payload() {
        let payload = LookAiCreate {
            look_description: "офис".to_string(),
            genders: vec![Gender::Male],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"look_description": "офис", "genders": ["мужской"]})
        );
    }
}

use contracts::domain::a002_look::aggregate::Look;
use contracts::enums::Gender;
use serde::Serialize;

/// Редактируемые поля образа; категории сюда не входят, их удаление
/// идёт отдельными запросами через очередь сессии.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LookForm {
    pub name: String,
    pub gender: String,
    pub description: String,
    pub image_prompts: Vec<String>,
    pub image_urls: Vec<String>,
    pub checked: bool,
    pub pushed: bool,
}

impl From<&Look> for LookForm {
    fn from(look: &Look) -> Self {
        Self {
            name: look.name.clone(),
            gender: look.gender.unwrap_or_default().code().to_string(),
            description: look.description.clone(),
            image_prompts: look.image_prompts.clone(),
            image_urls: look.image_urls.clone(),
            checked: look.checked,
            pushed: look.pushed,
        }
    }
}

impl LookForm {
    /// Значения для сохранения: пустые промпты отбрасываются
    pub fn candidate(&self) -> Self {
        Self {
            image_prompts: self
                .image_prompts
                .iter()
                .filter(|p| !p.trim().is_empty())
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    pub fn add_prompt(&mut self) {
        self.image_prompts.push(String::new());
    }

    pub fn set_prompt(&mut self, index: usize, value: String) {
        if let Some(slot) = self.image_prompts.get_mut(index) {
            *slot = value;
        }
    }

    pub fn remove_prompt(&mut self, index: usize) {
        if index < self.image_prompts.len() {
            self.image_prompts.remove(index);
        }
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.image_urls.len() {
            self.image_urls.remove(index);
        }
    }

    pub fn gender_value(&self) -> Gender {
        Gender::from_code(&self.gender).unwrap_or_default()
    }
}

/// Парсинг значения `<select>` "Да/Нет"
pub fn parse_flag(value: &str) -> bool {
    value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::edit_session::{EditSession, PendingDeletion, SaveStep};
    use serde_json::{json, Value};

    fn look() -> Look {
        serde_json::from_value(json!({
            "id": 3,
            "name": "Осенний",
            "gender": "женский",
            "description": "Тёплый образ. Для прогулок.",
            "clothes_categories": [
                {"id": 10, "name": "Верх", "clothes": [{"id": 5, "name": "Куртка"}]},
                {"id": 11, "name": "Обувь", "clothes": [{"id": 6, "name": "Ботинки"}]}
            ],
            "image_prompts": ["autumn park"],
            "image_urls": ["/images/1.png", "/images/2.png"],
            "checked": false,
            "pushed": null
        }))
        .unwrap()
    }

    #[test]
    fn test_projection_of_loaded_look() {
        let form = LookForm::from(&look());
        assert_eq!(form.gender, "женский");
        assert_eq!(form.image_urls.len(), 2);
        assert!(!form.pushed);
    }

    #[test]
    fn test_name_change_sends_only_name() {
        let session = EditSession::new(LookForm::from(&look()));
        let mut form = LookForm::from(&look());
        form.name = "Зимний".to_string();

        let plan = session.plan(&form.candidate()).unwrap();
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(
            Value::Object(plan.patch_body().unwrap().clone()),
            json!({ "name": "Зимний" })
        );
    }

    #[test]
    fn test_blank_prompt_is_not_a_change() {
        let session = EditSession::new(LookForm::from(&look()));
        let mut form = LookForm::from(&look());
        form.add_prompt();
        form.add_prompt();
        form.set_prompt(2, "  ".to_string());
        assert!(session.plan(&form.candidate()).unwrap().is_empty());

        form.set_prompt(1, "city night".to_string());
        let plan = session.plan(&form.candidate()).unwrap();
        assert_eq!(
            plan.patch_body().and_then(|b| b.get("image_prompts")),
            Some(&json!(["autumn park", "city night"]))
        );
    }

    #[test]
    fn test_removed_image_and_staged_deletions() {
        let mut session = EditSession::new(LookForm::from(&look()));
        let mut form = LookForm::from(&look());
        form.remove_image(0);
        session.queue(PendingDeletion::Item { category_id: 11, clothes_id: 6 });
        session.queue(PendingDeletion::Category { category_id: 10 });

        let plan = session.plan(&form.candidate()).unwrap();
        assert_eq!(
            plan.steps,
            vec![
                SaveStep::Patch(
                    json!({ "image_urls": ["/images/2.png"] })
                        .as_object()
                        .unwrap()
                        .clone()
                ),
                SaveStep::DeleteCategory { category_id: 10 },
                SaveStep::DeleteItem { category_id: 11, clothes_id: 6 },
            ]
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}

//! REST-вызовы для `/api/looks` и его под-ресурсов

use contracts::domain::a002_look::aggregate::{Look, LookAiCreate, PublishResponse};
use contracts::domain::common::{ListQuery, Paginated};
use contracts::enums::Gender;
use serde_json::{json, Map, Value};

use crate::shared::api_utils::{self, ApiError};
use crate::shared::edit_session::{SavePlan, SaveStep};

const RESOURCE: &str = "/api/looks";

pub fn list_path(query: &ListQuery) -> Result<String, ApiError> {
    let qs = query
        .to_query_string()
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(format!("{}/?{}", RESOURCE, qs))
}

pub fn item_path(id: i64) -> String {
    format!("{}/{}", RESOURCE, id)
}

pub fn category_path(look_id: i64, category_id: i64) -> String {
    format!("{}/categories/{}", item_path(look_id), category_id)
}

pub fn category_item_path(look_id: i64, category_id: i64, clothes_id: i64) -> String {
    format!("{}/clothes/{}", category_path(look_id, category_id), clothes_id)
}

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Look>, ApiError> {
    api_utils::get_json(&list_path(&query)?).await
}

pub async fn fetch_by_id(id: i64) -> Result<Look, ApiError> {
    api_utils::get_json(&item_path(id)).await
}

pub async fn patch(id: i64, body: &Map<String, Value>) -> Result<Look, ApiError> {
    api_utils::patch_json(&item_path(id), body).await
}

/// Отметить образ как проверенный, минуя режим редактирования
pub async fn mark_checked(id: i64) -> Result<Look, ApiError> {
    api_utils::patch_json(&item_path(id), &json!({ "checked": true })).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    api_utils::delete(&item_path(id)).await
}

pub async fn delete_category(look_id: i64, category_id: i64) -> Result<(), ApiError> {
    api_utils::delete(&category_path(look_id, category_id)).await
}

pub async fn delete_category_item(look_id: i64, category_id: i64, clothes_id: i64) -> Result<(), ApiError> {
    api_utils::delete(&category_item_path(look_id, category_id, clothes_id)).await
}

/// Публикация в соцсети: сервер ставит фоновую задачу и возвращает её id
pub async fn publish(id: i64) -> Result<PublishResponse, ApiError> {
    api_utils::post_authorized(&format!("{}/publish", item_path(id))).await
}

pub async fn create_with_ai(look_description: String, gender: Gender) -> Result<Look, ApiError> {
    let payload = LookAiCreate {
        look_description,
        genders: vec![gender],
    };
    api_utils::post_json(&format!("{}/ai", RESOURCE), &payload).await
}

/// Шаг плана, на котором сохранение прервалось
#[derive(Debug)]
pub struct SaveFailure {
    /// Сколько шагов до ошибки сервер уже выполнил
    pub completed: usize,
    pub error: ApiError,
}

/// Выполнить план сохранения строго по порядку.
///
/// Первая ошибка прерывает выполнение; уже выполненные шаги не откатываются.
pub async fn apply_save_plan(look_id: i64, plan: &SavePlan) -> Result<(), SaveFailure> {
    for (completed, step) in plan.steps.iter().enumerate() {
        let result = match step {
            SaveStep::Patch(body) => patch(look_id, body).await.map(|_| ()),
            SaveStep::DeleteCategory { category_id } => delete_category(look_id, *category_id).await,
            SaveStep::DeleteItem {
                category_id,
                clothes_id,
            } => delete_category_item(look_id, *category_id, *clothes_id).await,
        };
        result.map_err(|error| SaveFailure { completed, error })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_resource_paths() {
        assert_eq!(item_path(5), "/api/looks/5");
        assert_eq!(category_path(5, 10), "/api/looks/5/categories/10");
        assert_eq!(
            category_item_path(5, 10, 77),
            "/api/looks/5/categories/10/clothes/77"
        );
    }

    #[test]
    fn test_list_path_with_sort() {
        let query = ListQuery::new(1, 25).with_sort("pushed", true);
        assert_eq!(
            list_path(&query).unwrap(),
            "/api/looks/?page=1&page_size=25&order_by=pushed&desc_order=true"
        );
    }
}

//! REST-вызовы для `/api/clothes`

use contracts::domain::a001_clothes::aggregate::{Clothes, ClothesAiCreate};
use contracts::domain::common::{ListQuery, Paginated};
use serde_json::{Map, Value};

use crate::shared::api_utils::{self, ApiError};

const RESOURCE: &str = "/api/clothes";

pub fn list_path(query: &ListQuery) -> Result<String, ApiError> {
    let qs = query
        .to_query_string()
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(format!("{}/?{}", RESOURCE, qs))
}

pub fn item_path(id: i64) -> String {
    format!("{}/{}", RESOURCE, id)
}

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Clothes>, ApiError> {
    api_utils::get_json(&list_path(&query)?).await
}

pub async fn fetch_by_id(id: i64) -> Result<Clothes, ApiError> {
    api_utils::get_json(&item_path(id)).await
}

/// Частичное обновление: в теле только изменённые поля
pub async fn patch(id: i64, body: &Map<String, Value>) -> Result<Clothes, ApiError> {
    api_utils::patch_json(&item_path(id), body).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    api_utils::delete(&item_path(id)).await
}

/// Создание карточки по ссылке на товар
pub async fn create_with_ai(link: String) -> Result<Clothes, ApiError> {
    api_utils::post_json(&format!("{}/ai", RESOURCE), &ClothesAiCreate { link }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(item_path(42), "/api/clothes/42");
        assert_eq!(
            list_path(&ListQuery::new(3, 25)).unwrap(),
            "/api/clothes/?page=3&page_size=25"
        );
    }
}

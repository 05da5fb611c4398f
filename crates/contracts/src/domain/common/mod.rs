//! Общие типы списочных эндпоинтов: страница ответа и параметры запроса

pub mod pagination;

pub use pagination::{total_pages, ListQuery, Paginated};

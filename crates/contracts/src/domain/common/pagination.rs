use serde::{Deserialize, Serialize};

/// Страница коллекции: элементы текущей страницы и общее количество записей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub count: u64,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

/// Количество страниц: `ceil(count / page_size)`, 0 для пустой коллекции
pub fn total_pages(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Параметры `GET /api/{resource}/`
///
/// Сортировка передаётся только когда выбрано поле сортировки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u64,
    pub page_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_order: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ListQuery {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size,
            order_by: None,
            desc_order: None,
            checked: None,
        }
    }

    pub fn with_sort(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.order_by = Some(field.into());
        self.desc_order = Some(descending);
        self
    }

    pub fn only_checked(mut self) -> Self {
        self.checked = Some(true);
        self
    }

    /// Строка запроса без ведущего `?`
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 25), 0);
        assert_eq!(total_pages(1, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(100, 25), 4);
        assert_eq!(total_pages(101, 25), 5);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_query_without_sort() {
        let query = ListQuery::new(3, 25);
        assert_eq!(query.to_query_string().unwrap(), "page=3&page_size=25");
    }

    #[test]
    fn test_query_with_sort() {
        let query = ListQuery::new(1, 25).with_sort("name", false);
        assert_eq!(
            query.to_query_string().unwrap(),
            "page=1&page_size=25&order_by=name&desc_order=false"
        );
    }

    #[test]
    fn test_query_only_checked() {
        let query = ListQuery::new(2, 12).only_checked();
        assert_eq!(
            query.to_query_string().unwrap(),
            "page=2&page_size=12&checked=true"
        );
    }

    #[test]
    fn test_paginated_defaults_missing_fields() {
        let page: Paginated<u32> = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.count, 0);
    }
}

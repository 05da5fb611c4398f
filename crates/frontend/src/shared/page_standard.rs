//! Категории страниц для атрибута `data-page-category`.

/// Таблица записей админки с пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка записи: просмотр и редактирование
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Служебная страница (вход)
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Публичная витрина
pub const PAGE_CAT_PUBLIC: &str = "public";

/// `id` страницы должен иметь вид `{entity}--{category}` с непустыми частями
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_clothes--list"));
        assert!(is_valid_page_id("sys_login--system"));
        assert!(!is_valid_page_id("a001_clothes"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_look--"));
    }
}

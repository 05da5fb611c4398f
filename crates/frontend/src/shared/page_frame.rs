//! Корневая обёртка страницы.
//!
//! Каждая страница приложения (админка и витрина) рендерится внутри
//! `PageFrame`, который выставляет на корневом элементе `id` вида
//! `{entity}--{category}` и атрибут `data-page-category`. Стили и
//! поиск по DOM опираются на эти атрибуты.

use super::page_standard::{is_valid_page_id, PAGE_CAT_DETAIL, PAGE_CAT_PUBLIC};
use leptos::prelude::*;

/// CSS-класс корневого элемента для категории страницы
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_PUBLIC => "page page--public",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, например `"a002_look--list"`
    page_id: &'static str,
    /// Одна из констант `PAGE_CAT_*`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: unexpected page id format: {}", page_id);
    }

    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_standard::{PAGE_CAT_LIST, PAGE_CAT_SYSTEM};

    #[test]
    fn test_page_class_by_category() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_SYSTEM), "page");
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(page_class(PAGE_CAT_PUBLIC), "page page--public");
    }
}

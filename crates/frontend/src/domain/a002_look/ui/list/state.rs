use crate::shared::paged_list::{PagedListState, ADMIN_PAGE_SIZE};
use contracts::domain::a002_look::aggregate::{Look, LookSortField};
use leptos::prelude::*;

pub fn create_state() -> RwSignal<PagedListState<Look>> {
    RwSignal::new(PagedListState::new(ADMIN_PAGE_SIZE))
}

/// Кнопки сортировки: (поле API, подпись)
pub fn sort_fields() -> Vec<(&'static str, &'static str)> {
    LookSortField::all()
        .into_iter()
        .map(|f| (f.code(), f.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_fields_match_api() {
        let codes: Vec<&str> = sort_fields().into_iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["id", "name", "checked", "pushed"]);
    }
}

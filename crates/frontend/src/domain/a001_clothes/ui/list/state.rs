use crate::shared::paged_list::{PagedListState, ADMIN_PAGE_SIZE};
use contracts::domain::a001_clothes::aggregate::Clothes;
use leptos::prelude::*;

// State lives in the component scope and is dropped with the page
pub fn create_state() -> RwSignal<PagedListState<Clothes>> {
    RwSignal::new(PagedListState::new(ADMIN_PAGE_SIZE))
}

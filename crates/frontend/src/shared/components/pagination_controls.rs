use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// PaginationControls component - prev / next / "load more" navigation
///
/// Отключение кнопок вычисляет владелец состояния списка
/// (`PagedListState::can_go_prev` и т.п.).
#[component]
pub fn PaginationControls(
    /// "Страница N из M"
    #[prop(into)]
    page_info: Signal<String>,

    #[prop(into)]
    can_prev: Signal<bool>,

    #[prop(into)]
    can_next: Signal<bool>,

    #[prop(into)]
    can_load_more: Signal<bool>,

    on_prev: Callback<()>,
    on_next: Callback<()>,

    /// Дописать следующую страницу к текущему списку
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                id="prev-page-btn"
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !can_prev.get()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span id="page-info" class="pagination-info">
                {move || page_info.get()}
            </span>
            <button
                id="next-page-btn"
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_next.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <Button
                attr:id="load-more-btn"
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_load_more.run(())
                disabled=Signal::derive(move || !can_load_more.get())
            >
                "Загрузить ещё"
            </Button>
        </div>
    }
}

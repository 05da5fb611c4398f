use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::paged_list::SortState;
use leptos::prelude::*;

/// Ряд кнопок сортировки; активна не более одной
#[component]
pub fn SortButtons(
    /// Пары (поле API, подпись)
    fields: Vec<(&'static str, &'static str)>,

    #[prop(into)]
    sort: Signal<Option<SortState>>,

    on_toggle: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="sort-buttons">
            <span class="sort-buttons__label">"Сортировка:"</span>
            {fields
                .into_iter()
                .map(|(field, label)| {
                    view! {
                        <button
                            class=move || sort.with(|s| get_sort_class(s.as_ref(), field))
                            data-field=field
                            on:click=move |_| on_toggle.run(field)
                        >
                            {label}
                            " "
                            {move || sort.with(|s| get_sort_indicator(s.as_ref(), field))}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

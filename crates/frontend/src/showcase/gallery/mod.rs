pub mod state;

use self::state::{first_sentence, GalleryState, GALLERY_PAGE_SIZE, SCROLL_THRESHOLD_PX};
use crate::domain::a002_look::api;
use crate::shared::api_utils::{api_base, resolve_image_url};
use crate::shared::dialogs::is_scrolled_to_bottom;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use contracts::domain::a002_look::aggregate::Look;
use contracts::domain::common::ListQuery;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

/// Галерея проверенных образов с подгрузкой при прокрутке
#[component]
pub fn Gallery() -> impl IntoView {
    let state = RwSignal::new(GalleryState::default());
    let base = StoredValue::new(api_base());

    let load_next = move || {
        let Some(page) = state.try_update(|s| s.begin_load()).flatten() else {
            return;
        };
        spawn_local(async move {
            let query = ListQuery::new(page, GALLERY_PAGE_SIZE).only_checked();
            let results = match api::fetch_page(query).await {
                Ok(data) => Some(data.results),
                Err(e) => {
                    log::error!("gallery: failed to load page {}: {}", page, e);
                    None
                }
            };
            state.update(|s| s.finish_load(results));
        });
    };

    let handle = window_event_listener(ev::scroll, move |_| {
        if is_scrolled_to_bottom(SCROLL_THRESHOLD_PX) {
            load_next();
        }
    });
    on_cleanup(move || handle.remove());

    load_next();

    view! {
        <PageFrame page_id="showcase--gallery" category=PAGE_CAT_PUBLIC>
            <ul id="looks-list" class="cards__list">
                <For
                    each=move || state.with(|s| s.items.clone())
                    key=|look: &Look| look.id
                    children=move |look: Look| {
                        let href = format!("/looks/{}", look.id);
                        let preview = look
                            .preview_url()
                            .map(|url| base.with_value(|b| resolve_image_url(b, url)))
                            .unwrap_or_default();
                        view! {
                            <li>
                                <div class="card">
                                    <A href=href.clone()><img src=preview alt="Image" /></A>
                                    <div class="card__info">
                                        <A href=href attr:class="link">
                                            <h3 class="card__title">{look.name.clone()}</h3>
                                        </A>
                                        <p class="card__description">
                                            {first_sentence(&look.description).to_string()}
                                        </p>
                                    </div>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </PageFrame>
    }
}

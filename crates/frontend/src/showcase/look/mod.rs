use crate::domain::a002_look::api;
use crate::shared::api_utils::{api_base, resolve_image_url};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use contracts::domain::a001_clothes::aggregate::Clothes;
use contracts::domain::a002_look::aggregate::Look;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Публичная страница образа: изображения, описание и состав по категориям
#[component]
pub fn LookShowcase(id: i64) -> impl IntoView {
    let look = RwSignal::new(None::<Look>);
    let failed = RwSignal::new(false);
    let base = StoredValue::new(api_base());

    spawn_local(async move {
        match api::fetch_by_id(id).await {
            Ok(data) => look.set(Some(data)),
            Err(e) => {
                log::error!("showcase: failed to load look {}: {}", id, e);
                failed.set(true);
            }
        }
    });

    let resolve = move |url: &str| base.with_value(|b| resolve_image_url(b, url));

    view! {
        <PageFrame page_id="showcase--look" category=PAGE_CAT_PUBLIC>
            <ul id="look-images-list" class="images__list">
                {move || look.with(|l| {
                    l.as_ref()
                        .map(|l| l.image_urls.clone())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|url| view! {
                            <li class="image__item"><img src=resolve(&url) alt="Look image" /></li>
                        })
                        .collect_view()
                })}
            </ul>

            <div id="look-info">
                <Show
                    when=move || !failed.get()
                    fallback=|| view! { <p>"Ошибка загрузки образа."</p> }
                >
                    {move || look.get().map(|l| view! {
                        <div class="look-info">
                            <h2 class="look-name">{l.name}</h2>
                            <p class="look-description">{l.description}</p>
                        </div>
                    })}
                </Show>
            </div>

            <div id="look-clothes">
                {move || {
                    let categories = look.with(|l| {
                        l.as_ref().map(|l| l.clothes_categories.clone()).unwrap_or_default()
                    });
                    (!categories.is_empty()).then(|| view! {
                        <div class="look-clothes">
                            <ul class="clothes-categories__list">
                                {categories
                                    .into_iter()
                                    .map(|category| view! {
                                        <li class="clothes-categories__item">
                                            <h3 class="clothes-category__name">{category.name}</h3>
                                            <ul class="links__list">
                                                {category
                                                    .clothes
                                                    .into_iter()
                                                    .map(|item| view! {
                                                        <li class="links__item">{clothes_card(item, resolve)}</li>
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                }}
            </div>
        </PageFrame>
    }
}

/// Карточка вещи; при наличии ссылки целиком оборачивается во внешнюю ссылку
fn clothes_card(item: Clothes, resolve: impl Fn(&str) -> String) -> AnyView {
    let image = (!item.image_url.is_empty()).then(|| {
        let src = resolve(&item.image_url);
        view! { <img src=src alt=item.name.clone() /> }
    });
    let body = view! {
        <div class="clothes-item__image">{image}</div>
        <div class="clothes-item__info">
            <h4 class="clothes-item__name">{item.name.clone()}</h4>
        </div>
    };

    if item.link.is_empty() {
        body.into_any()
    } else {
        view! {
            <a href=item.link target="_blank" rel="noopener noreferrer" class="clothes-item__link">
                {body}
            </a>
        }
        .into_any()
    }
}

//! Загрузка страницы списка в `RwSignal<PagedListState<T>>`.

use std::future::Future;

use contracts::domain::common::{ListQuery, Paginated};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api_utils::ApiError;
use super::dialogs::scroll_to_top;
use super::paged_list::{LoadMode, PageApply, PagedListState};

/// Запросить страницу `page` и применить ответ к состоянию.
///
/// Устаревшие ответы отбрасываются по токену запроса. Если список сократился
/// и страницы `page` больше нет, запрашивается последняя существующая.
/// После замены содержимого окно прокручивается наверх; при дописывании
/// остаётся на месте.
pub fn load_page<T, F, Fut>(
    state: RwSignal<PagedListState<T>>,
    page: u64,
    mode: LoadMode,
    entity: &'static str,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Paginated<T>, ApiError>> + 'static,
{
    let Some((token, query)) = state.try_update(|s| (s.begin_request(), s.query(page))) else {
        return;
    };

    spawn_local(async move {
        match fetch(query).await {
            Ok(data) => {
                let outcome = state
                    .try_update(|s| s.apply_page(token, page, data, mode))
                    .unwrap_or(PageApply::Stale);
                match outcome {
                    PageApply::Applied => {
                        if mode == LoadMode::Replace {
                            scroll_to_top();
                        }
                    }
                    PageApply::Stale => {
                        log::debug!("{}: dropped stale response for page {}", entity, page);
                    }
                    PageApply::OutOfRange { last_page } => {
                        log::debug!("{}: page {} is gone, reloading page {}", entity, page, last_page);
                        load_page(state, last_page, LoadMode::Replace, entity, fetch);
                    }
                }
            }
            Err(e) => {
                log::error!("{}: failed to load page {}: {}", entity, page, e);
                state.update(|s| {
                    s.apply_error(token, format!("Ошибка: {}", e));
                });
            }
        }
    });
}

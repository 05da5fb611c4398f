pub mod state;

use self::state::create_state;
use crate::domain::a001_clothes::api;
use crate::shared::ai_create::{AiCreateState, AiSubmit};
use crate::shared::api_utils::{api_base, resolve_image_url};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::list_loader::load_page;
use crate::shared::list_utils::or_placeholder;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::LoadMode;
use contracts::domain::a001_clothes::aggregate::Clothes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

const ENTITY: &str = "a001_clothes";

#[component]
pub fn ClothesList() -> impl IntoView {
    let state = create_state();
    let ai = AiCreateState::new();
    let base = api_base();

    let load = move |page: u64, mode: LoadMode| load_page(state, page, mode, ENTITY, api::fetch_page);

    let go_prev = move |_: ()| {
        if state.with_untracked(|s| s.can_go_prev()) {
            load(state.with_untracked(|s| s.page) - 1, LoadMode::Replace);
        }
    };
    let go_next = move |_: ()| {
        if state.with_untracked(|s| s.can_go_next()) {
            load(state.with_untracked(|s| s.page) + 1, LoadMode::Replace);
        }
    };
    let load_more = move |_: ()| {
        if state.with_untracked(|s| s.can_load_more()) {
            load(state.with_untracked(|s| s.page) + 1, LoadMode::Append);
        }
    };

    let create_with_ai = move || {
        let link = match ai.begin() {
            AiSubmit::Ready(link) => link,
            AiSubmit::Busy => return,
            AiSubmit::Empty => {
                alert("Введите ссылку на одежду");
                return;
            }
        };
        spawn_local(async move {
            match api::create_with_ai(link).await {
                Ok(created) => {
                    ai.finish(true);
                    load(1, LoadMode::Replace);
                    alert(&format!(
                        "Одежда \"{}\" успешно добавлена!",
                        or_placeholder(&created.name, "Без названия")
                    ));
                }
                Err(e) => {
                    log::error!("{}: AI create failed: {}", ENTITY, e);
                    ai.finish(false);
                    alert(&format!("Ошибка при добавлении одежды: {}", e));
                }
            }
        });
    };

    let delete_item = move |id: i64| {
        if !confirm("Вы уверены, что хотите удалить эту одежду?") {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => load(state.with_untracked(|s| s.page), LoadMode::Replace),
                Err(e) => {
                    log::error!("{}: delete {} failed: {}", ENTITY, id, e);
                    alert(&format!("Ошибка при удалении: {}", e));
                }
            }
        });
    };

    load(1, LoadMode::Replace);

    view! {
        <PageFrame page_id="a001_clothes--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Одежда"</h1>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="ai-create">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Input
                            value=ai.input
                            placeholder="Ссылка на товар"
                            attr:id="ai-link"
                        />
                        <Button
                            attr:id="create-ai-clothes-btn"
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| create_with_ai()
                            disabled=ai.busy
                        >
                            {icon("sparkles")}
                            {move || if ai.busy.get() { "Создание..." } else { "Создать с AI" }}
                        </Button>
                    </Flex>
                </div>

                <Table attr:id="clothes-table" attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"ID"</TableHeaderCell>
                            <TableHeaderCell>"Название"</TableHeaderCell>
                            <TableHeaderCell>"Пол"</TableHeaderCell>
                            <TableHeaderCell>"Изображение"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody attr:id="clothes-tbody">
                        {move || state.with(|s| s.error.clone()).map(|err| view! {
                            <TableRow>
                                <TableCell attr:colspan="5">
                                    <div class="alert alert--error">{err}</div>
                                </TableCell>
                            </TableRow>
                        })}
                        <Show when=move || state.with(|s| s.shows_placeholder())>
                            <TableRow>
                                <TableCell attr:colspan="5">"Список одежды пуст"</TableCell>
                            </TableRow>
                        </Show>
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|item: &Clothes| item.id
                            children={
                                let base = base.clone();
                                move |item: Clothes| {
                                    let id = item.id;
                                    let name = or_placeholder(&item.name, "Без названия");
                                    let gender = item
                                        .gender
                                        .map(|g| g.to_string())
                                        .unwrap_or_else(|| "N/A".to_string());
                                    let image = (!item.image_url.is_empty())
                                        .then(|| resolve_image_url(&base, &item.image_url));
                                    let alt = name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{id}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <A href=format!("/admin/clothes/{}", id)>{name.clone()}</A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{gender}</TableCell>
                                            <TableCell>
                                                {match image {
                                                    Some(src) => view! {
                                                        <img src=src alt=alt class="table__thumbnail" style="max-width: 100px;" />
                                                    }.into_any(),
                                                    None => view! { <span>"N/A"</span> }.into_any(),
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:class="delete-btn"
                                                    on_click=move |_| delete_item(id)
                                                >
                                                    {icon("delete")}
                                                    "Удалить"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <PaginationControls
                    page_info=Signal::derive(move || state.with(|s| s.page_info()))
                    can_prev=Signal::derive(move || state.with(|s| s.can_go_prev()))
                    can_next=Signal::derive(move || state.with(|s| s.can_go_next()))
                    can_load_more=Signal::derive(move || state.with(|s| s.can_load_more()))
                    on_prev=Callback::new(go_prev)
                    on_next=Callback::new(go_next)
                    on_load_more=Callback::new(load_more)
                />
            </div>
        </PageFrame>
    }
}

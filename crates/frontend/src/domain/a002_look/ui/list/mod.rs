pub mod state;

use self::state::{create_state, sort_fields};
use crate::domain::a002_look::api;
use crate::shared::ai_create::{AiCreateState, AiSubmit};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sort_buttons::SortButtons;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::list_loader::load_page;
use crate::shared::list_utils::{or_placeholder, yes_no};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::paged_list::LoadMode;
use contracts::domain::a002_look::aggregate::Look;
use contracts::enums::Gender;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

const ENTITY: &str = "a002_look";

#[component]
pub fn LookList() -> impl IntoView {
    let state = create_state();
    let ai = AiCreateState::new();
    let ai_gender = RwSignal::new(Gender::default().code().to_string());

    let load = move |page: u64, mode: LoadMode| load_page(state, page, mode, ENTITY, api::fetch_page);

    let toggle_sort = move |field: &'static str| {
        state.update(|s| s.toggle_sort(field));
        load(1, LoadMode::Replace);
    };

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
        let description = match ai.begin() {
            AiSubmit::Ready(description) => description,
            AiSubmit::Busy => return,
            AiSubmit::Empty => {
                alert("Введите описание для генерации лука");
                return;
            }
        };
        let gender = Gender::from_code(&ai_gender.get_untracked()).unwrap_or_default();
        spawn_local(async move {
            match api::create_with_ai(description, gender).await {
                Ok(created) => {
                    ai.finish(true);
                    load(1, LoadMode::Replace);
                    alert(&format!(
                        "Лук \"{}\" успешно создан!",
                        or_placeholder(&created.name, "Без названия")
                    ));
                }
                Err(e) => {
                    log::error!("{}: AI create failed: {}", ENTITY, e);
                    ai.finish(false);
                    alert(&format!("Ошибка при создании лука: {}", e));
                }
            }
        });
    };

    let delete_item = move |id: i64| {
        if !confirm("Вы уверены, что хотите удалить этот лук?") {
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
        <PageFrame page_id="a002_look--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Луки"</h1>
                    <Badge>{move || state.with(|s| s.total_count.to_string())}</Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="ai-create">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Textarea
                            value=ai.input
                            placeholder="Опишите образ"
                            attr:id="ai-description"
                        />
                        <select
                            id="ai-gender"
                            prop:value=move || ai_gender.get()
                            on:change=move |ev| ai_gender.set(event_target_value(&ev))
                        >
                            {Gender::all()
                                .into_iter()
                                .map(|g| view! { <option value=g.code()>{g.code()}</option> })
                                .collect_view()}
                        </select>
                        <Button
                            attr:id="create-ai-look-btn"
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| create_with_ai()
                            disabled=ai.busy
                        >
                            {icon("sparkles")}
                            {move || if ai.busy.get() { "Создание..." } else { "Создать с AI" }}
                        </Button>
                    </Flex>
                </div>

                <SortButtons
                    fields=sort_fields()
                    sort=Signal::derive(move || state.with(|s| s.sort.clone()))
                    on_toggle=Callback::new(toggle_sort)
                />

                <div id="looks-list" class="looks-list">
                    {move || state.with(|s| s.error.clone()).map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })}
                    <Show when=move || state.with(|s| s.shows_placeholder())>
                        <p class="looks-list__empty">"Список луков пуст"</p>
                    </Show>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|look: &Look| look.id
                        children=move |look: Look| {
                            let id = look.id;
                            let gender = look
                                .gender
                                .map(|g| g.to_string())
                                .unwrap_or_else(|| "N/A".to_string());
                            view! {
                                <Card class="look-item">
                                    <h3>
                                        <A href=format!("/admin/looks/{}", id)>
                                            {or_placeholder(&look.name, "Без названия")}
                                        </A>
                                    </h3>
                                    <p><strong>"ID: "</strong>{id}</p>
                                    <p><strong>"Пол: "</strong>{gender}</p>
                                    <p><strong>"Проверено: "</strong>{yes_no(look.checked)}</p>
                                    <p><strong>"Опубликовано: "</strong>{yes_no(look.pushed)}</p>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        attr:class="delete-btn"
                                        on_click=move |_| delete_item(id)
                                    >
                                        {icon("delete")}
                                        "Удалить"
                                    </Button>
                                </Card>
                            }
                        }
                    />
                </div>

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

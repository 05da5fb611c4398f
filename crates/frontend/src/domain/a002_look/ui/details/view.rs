use super::model::parse_flag;
use super::view_model::LookDetailsViewModel;
use crate::shared::api_utils::{api_base, resolve_image_url};
use crate::shared::icons::icon;
use crate::shared::list_utils::{or_placeholder, yes_no};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_clothes::aggregate::Clothes;
use contracts::domain::a002_look::aggregate::ClothesCategory;
use contracts::enums::Gender;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn LookDetails(id: i64) -> impl IntoView {
    let vm = LookDetailsViewModel::new(id);
    vm.load();

    let is_editing = vm.is_editing();
    let base = StoredValue::new(api_base());
    let navigate = use_navigate();

    let title = move || {
        let name = vm
            .record
            .with(|r| r.as_ref().map(|l| l.name.clone()).unwrap_or_default());
        format!("Детали лука: {}", or_placeholder(&name, "N/A"))
    };
    let is_checked = move || vm.record.with(|r| r.as_ref().is_some_and(|l| l.checked));
    let categories = move || {
        vm.record
            .with(|r| r.as_ref().map(|l| l.clothes_categories.clone()).unwrap_or_default())
    };

    view! {
        <PageFrame page_id="a002_look--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/admin/looks">{icon("chevron-left")}"К списку"</A>
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Show
                        when=move || is_editing.get()
                        fallback=move || view! {
                            <Button
                                attr:id="edit-btn"
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.toggle_edit_mode()
                            >
                                {icon("edit")}
                                "Редактировать"
                            </Button>
                        }.into_any()
                    >
                        <Button
                            attr:id="save-btn"
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save()
                            disabled=vm.is_saving()
                        >
                            {icon("save")}
                            "Сохранить"
                        </Button>
                        <Button
                            attr:id="cancel-btn"
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.cancel()
                            disabled=vm.is_saving()
                        >
                            {icon("cancel")}
                            "Отмена"
                        </Button>
                    </Show>
                    <Show when=move || vm.record.with(|r| r.is_some()) && !is_checked()>
                        <Button
                            attr:id="check-look-btn"
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.mark_checked()
                        >
                            {icon("check")}
                            "Проверено"
                        </Button>
                    </Show>
                    <Button
                        attr:id="publish-btn"
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.publish()
                    >
                        {icon("send")}
                        "Опубликовать"
                    </Button>
                    <button
                        id="delete-btn"
                        class="button button--danger"
                        on:click=move |_| {
                            let navigate = navigate.clone();
                            vm.delete(move || navigate("/admin/looks", Default::default()));
                        }
                    >
                        {icon("delete")}
                        "Удалить лук"
                    </button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || vm.record.with(|r| r.is_some())>
                <div class="details-form" id="look-details">
                    <div class="form-group">
                        <label>"ID"</label>
                        <span id="look-id">{move || vm.record.with(|r| r.as_ref().map(|l| l.id))}</span>
                    </div>

                    <div class="form-group">
                        <label for="edit-look-name">"Название"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="look-name">
                                    {move || or_placeholder(&vm.form.with(|f| f.name.clone()), "N/A")}
                                </span>
                            }.into_any()
                        >
                            <input
                                type="text"
                                id="edit-look-name"
                                prop:value=move || vm.form.with(|f| f.name.clone())
                                on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            />
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="edit-look-gender">"Пол"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="look-gender">
                                    {move || vm.record.with(|r| {
                                        r.as_ref()
                                            .and_then(|l| l.gender)
                                            .map(|g| g.to_string())
                                            .unwrap_or_else(|| "N/A".to_string())
                                    })}
                                </span>
                            }.into_any()
                        >
                            <select
                                id="edit-look-gender"
                                prop:value=move || vm.form.with(|f| f.gender_value().code())
                                on:change=move |ev| vm.form.update(|f| f.gender = event_target_value(&ev))
                            >
                                {Gender::all()
                                    .into_iter()
                                    .map(|g| view! { <option value=g.code()>{g.code()}</option> })
                                    .collect_view()}
                            </select>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="edit-look-description">"Описание"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="look-description">
                                    {move || or_placeholder(&vm.form.with(|f| f.description.clone()), "N/A")}
                                </span>
                            }.into_any()
                        >
                            <textarea
                                id="edit-look-description"
                                rows="5"
                                prop:value=move || vm.form.with(|f| f.description.clone())
                                on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                            />
                        </Show>
                    </div>

                    <div class="form-group">
                        <label>"Промпты изображений"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <div id="look-image-prompts">
                                    {move || {
                                        let prompts = vm.form.with(|f| f.image_prompts.clone());
                                        if prompts.is_empty() {
                                            view! { "N/A" }.into_any()
                                        } else {
                                            prompts
                                                .into_iter()
                                                .map(|p| view! { <p>{p}</p> })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }}
                                </div>
                            }.into_any()
                        >
                            <div id="edit-look-image-prompts">
                                {move || {
                                    let count = vm.form.with(|f| f.image_prompts.len());
                                    (0..count)
                                        .map(|index| view! {
                                            <div class="prompt-item">
                                                <input
                                                    type="text"
                                                    class="prompt-input"
                                                    placeholder="Новый промпт"
                                                    prop:value=move || vm.form.with(|f| f.image_prompts.get(index).cloned().unwrap_or_default())
                                                    on:input=move |ev| vm.form.update(|f| f.set_prompt(index, event_target_value(&ev)))
                                                />
                                                <button
                                                    class="button button--secondary remove-prompt-btn"
                                                    on:click=move |_| vm.form.update(|f| f.remove_prompt(index))
                                                >
                                                    "Удалить"
                                                </button>
                                            </div>
                                        })
                                        .collect_view()
                                }}
                            </div>
                            <button
                                id="add-prompt-btn"
                                class="button button--secondary"
                                on:click=move |_| vm.form.update(|f| f.add_prompt())
                            >
                                {icon("plus")}
                                "Добавить промпт"
                            </button>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label>"Изображения"</label>
                        <div id="look-image-urls" class="image-grid">
                            {move || {
                                let urls = vm.form.with(|f| f.image_urls.clone());
                                if urls.is_empty() {
                                    return view! { "Нет изображений" }.into_any();
                                }
                                let editing = is_editing.get();
                                urls.into_iter()
                                    .enumerate()
                                    .map(|(index, url)| {
                                        let src = base.with_value(|b| resolve_image_url(b, &url));
                                        view! {
                                            <div class="image-item">
                                                <img src=src alt="Image" />
                                                {editing.then(|| view! {
                                                    <button
                                                        class="button button--secondary remove-image-btn"
                                                        on:click=move |_| vm.form.update(|f| f.remove_image(index))
                                                    >
                                                        "Удалить"
                                                    </button>
                                                })}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="edit-look-checked">"Проверено"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="look-checked">{move || yes_no(vm.form.with(|f| f.checked))}</span>
                            }.into_any()
                        >
                            <select
                                id="edit-look-checked"
                                prop:value=move || vm.form.with(|f| f.checked.to_string())
                                on:change=move |ev| vm.form.update(|f| f.checked = parse_flag(&event_target_value(&ev)))
                            >
                                <option value="true">"Да"</option>
                                <option value="false">"Нет"</option>
                            </select>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="edit-look-pushed">"Опубликовано"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="look-pushed">{move || yes_no(vm.form.with(|f| f.pushed))}</span>
                            }.into_any()
                        >
                            <select
                                id="edit-look-pushed"
                                prop:value=move || vm.form.with(|f| f.pushed.to_string())
                                on:change=move |ev| vm.form.update(|f| f.pushed = parse_flag(&event_target_value(&ev)))
                            >
                                <option value="true">"Да"</option>
                                <option value="false">"Нет"</option>
                            </select>
                        </Show>
                    </div>

                    <h2>"Категории одежды"</h2>
                    <div id="look-clothes-categories">
                        <Show when=move || vm.record.with(|r| r.as_ref().is_some_and(|l| l.clothes_categories.is_empty()))>
                            <p>"Нет категорий"</p>
                        </Show>
                        <For
                            each=categories
                            key=|category: &ClothesCategory| category.id
                            children=move |category: ClothesCategory| {
                                view! { <CategoryCard vm=vm category=category is_editing=is_editing base=base /> }
                            }
                        />
                    </div>
                </div>
            </Show>
        </PageFrame>
    }
}

#[component]
fn CategoryCard(
    vm: LookDetailsViewModel,
    category: ClothesCategory,
    is_editing: Signal<bool>,
    base: StoredValue<String>,
) -> impl IntoView {
    let category_id = category.id;
    let hidden = move || vm.session.with(|s| s.is_category_hidden(category_id));
    let clothes = category.clothes.clone();

    view! {
        <Card class="category-item">
            <div style=move || if hidden() { "display: none;" } else { "" }>
                <div class="category-item__header">
                    <h3>{or_placeholder(&category.name, "N/A")}</h3>
                    <Show when=move || is_editing.get()>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            attr:class="delete-category-btn"
                            on_click=move |_| vm.stage_category_deletion(category_id)
                        >
                            {icon("delete")}
                            "Удалить категорию"
                        </Button>
                    </Show>
                </div>
                {if clothes.is_empty() {
                    view! { <p>"Нет одежды"</p> }.into_any()
                } else {
                    clothes
                        .into_iter()
                        .map(|item| view! {
                            <CategoryItem vm=vm category_id=category_id item=item is_editing=is_editing base=base />
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </Card>
    }
}

#[component]
fn CategoryItem(
    vm: LookDetailsViewModel,
    category_id: i64,
    item: Clothes,
    is_editing: Signal<bool>,
    base: StoredValue<String>,
) -> impl IntoView {
    let clothes_id = item.id;
    let hidden = move || vm.session.with(|s| s.is_item_hidden(category_id, clothes_id));
    let src = base.with_value(|b| resolve_image_url(b, &item.image_url));
    let name = or_placeholder(&item.name, "N/A");
    let gender = item
        .gender
        .map(|g| g.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let link = item.link.clone();
    let href = link.clone();
    let alt = name.clone();

    view! {
        <div class="clothes-item" style=move || if hidden() { "display: none;" } else { "" }>
            <img src=src alt=alt />
            <div class="clothes-item-info">
                <p>
                    <strong>"Название: "</strong>
                    <A href=format!("/admin/clothes/{}", clothes_id)>{name}</A>
                </p>
                <p><strong>"Пол: "</strong>{gender}</p>
                <p>
                    <strong>"Ссылка: "</strong>
                    {if link.is_empty() {
                        view! { "N/A" }.into_any()
                    } else {
                        view! { <a href=href target="_blank">{link}</a> }.into_any()
                    }}
                </p>
            </div>
            <Show when=move || is_editing.get()>
                <Button
                    appearance=ButtonAppearance::Subtle
                    attr:class="remove-clothes-btn"
                    on_click=move |_| vm.stage_item_deletion(category_id, clothes_id)
                >
                    "Удалить"
                </Button>
            </Show>
        </div>
    }
}

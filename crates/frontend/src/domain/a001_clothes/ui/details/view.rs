use super::view_model::ClothesDetailsViewModel;
use crate::shared::api_utils::{api_base, resolve_image_url};
use crate::shared::icons::icon;
use crate::shared::list_utils::or_placeholder;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::enums::{Colour, Gender};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

const COLOUR_LIST_ID: &str = "colour-list";

#[component]
pub fn ClothesDetails(id: i64) -> impl IntoView {
    let vm = ClothesDetailsViewModel::new(id);
    vm.load();

    let is_editing = vm.is_editing();
    let base = StoredValue::new(api_base());

    let title = move || {
        let name = vm
            .record
            .with(|r| r.as_ref().map(|c| c.name.clone()).unwrap_or_default());
        format!("Детали одежды: {}", or_placeholder(&name, "N/A"))
    };

    view! {
        <PageFrame page_id="a001_clothes--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/admin/clothes">{icon("chevron-left")}"К списку"</A>
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
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <datalist id=COLOUR_LIST_ID>
                {Colour::all()
                    .into_iter()
                    .map(|c| view! { <option value=c.code()></option> })
                    .collect_view()}
            </datalist>

            <Show when=move || vm.record.with(|r| r.is_some())>
                <div class="details-form" id="clothes-details">
                    <div class="form-group">
                        <label>"ID"</label>
                        <span id="clothes-id">{move || vm.record.with(|r| r.as_ref().map(|c| c.id))}</span>
                    </div>

                    <div class="form-group">
                        <label for="edit-clothes-name">"Название"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="clothes-name">
                                    {move || or_placeholder(&vm.form.with(|f| f.name.clone()), "N/A")}
                                </span>
                            }.into_any()
                        >
                            <input
                                type="text"
                                id="edit-clothes-name"
                                prop:value=move || vm.form.with(|f| f.name.clone())
                                on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            />
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="edit-clothes-description">"Описание"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="clothes-description">
                                    {move || or_placeholder(&vm.form.with(|f| f.description.clone()), "Нет описания")}
                                </span>
                            }.into_any()
                        >
                            <textarea
                                id="edit-clothes-description"
                                rows="4"
                                prop:value=move || vm.form.with(|f| f.description.clone())
                                on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                            />
                        </Show>
                    </div>

                    <div class="form-group">
                        <label>"Цвета"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="clothes-colours">
                                    {move || {
                                        let colours = vm.form.with(|f| f.colours.join(", "));
                                        or_placeholder(&colours, "N/A")
                                    }}
                                </span>
                            }.into_any()
                        >
                            <div id="colour-inputs">
                                {move || {
                                    let count = vm.form.with(|f| f.colours.len());
                                    (0..count)
                                        .map(|index| view! {
                                            <div class="colour-item">
                                                <input
                                                    type="text"
                                                    class="colour-input"
                                                    list=COLOUR_LIST_ID
                                                    prop:value=move || vm.form.with(|f| f.colours.get(index).cloned().unwrap_or_default())
                                                    on:input=move |ev| vm.form.update(|f| f.set_colour(index, event_target_value(&ev)))
                                                />
                                                <button
                                                    class="button button--secondary remove-colour-btn"
                                                    on:click=move |_| vm.form.update(|f| f.remove_colour(index))
                                                >
                                                    "Удалить"
                                                </button>
                                            </div>
                                        })
                                        .collect_view()
                                }}
                            </div>
                            <button
                                id="add-colour-btn"
                                class="button button--secondary"
                                on:click=move |_| vm.form.update(|f| f.add_colour())
                            >
                                {icon("plus")}
                                "Добавить цвет"
                            </button>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="edit-clothes-gender">"Пол"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="clothes-gender">
                                    {move || vm.record.with(|r| {
                                        r.as_ref()
                                            .and_then(|c| c.gender)
                                            .map(|g| g.to_string())
                                            .unwrap_or_else(|| "N/A".to_string())
                                    })}
                                </span>
                            }.into_any()
                        >
                            <select
                                id="edit-clothes-gender"
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
                        <label for="edit-clothes-link">"Ссылка"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="clothes-link">
                                    {move || {
                                        let link = vm.form.with(|f| f.link.clone());
                                        if link.is_empty() {
                                            view! { "N/A" }.into_any()
                                        } else {
                                            let href = link.clone();
                                            view! { <a href=href target="_blank">{link}</a> }.into_any()
                                        }
                                    }}
                                </span>
                            }.into_any()
                        >
                            <input
                                type="text"
                                id="edit-clothes-link"
                                prop:value=move || vm.form.with(|f| f.link.clone())
                                on:input=move |ev| vm.form.update(|f| f.link = event_target_value(&ev))
                            />
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="edit-clothes-image-url">"Изображение"</label>
                        <Show
                            when=move || is_editing.get()
                            fallback=move || view! {
                                <span id="clothes-image-url">
                                    {move || {
                                        let url = vm.form.with(|f| f.image_url.clone());
                                        if url.is_empty() {
                                            view! { "N/A" }.into_any()
                                        } else {
                                            let src = base.with_value(|b| resolve_image_url(b, &url));
                                            let alt = vm.form.with(|f| f.name.clone());
                                            view! { <img class="details-image" src=src alt=alt /> }.into_any()
                                        }
                                    }}
                                </span>
                            }.into_any()
                        >
                            <input
                                type="text"
                                id="edit-clothes-image-url"
                                prop:value=move || vm.form.with(|f| f.image_url.clone())
                                on:input=move |ev| vm.form.update(|f| f.image_url = event_target_value(&ev))
                            />
                        </Show>
                    </div>
                </div>
            </Show>
        </PageFrame>
    }
}

use super::model::ClothesForm;
use crate::domain::a001_clothes::api;
use crate::shared::dialogs::alert;
use crate::shared::edit_session::EditSession;
use contracts::domain::a001_clothes::aggregate::Clothes;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the clothes detail page
#[derive(Clone, Copy)]
pub struct ClothesDetailsViewModel {
    pub id: i64,
    pub record: RwSignal<Option<Clothes>>,
    pub form: RwSignal<ClothesForm>,
    pub session: RwSignal<EditSession<ClothesForm>>,
    pub error: RwSignal<Option<String>>,
}

impl ClothesDetailsViewModel {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            record: RwSignal::new(None),
            form: RwSignal::new(ClothesForm::default()),
            session: RwSignal::new(EditSession::new(ClothesForm::default())),
            error: RwSignal::new(None),
        }
    }

    pub fn is_editing(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_editing()))
    }

    pub fn is_saving(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_saving()))
    }

    /// Load the record and take a fresh snapshot of its form projection
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_by_id(vm.id).await {
                Ok(clothes) => {
                    let form = ClothesForm::from(&clothes);
                    vm.session.set(EditSession::new(form.clone()));
                    vm.form.set(form);
                    vm.record.set(Some(clothes));
                    vm.error.set(None);
                }
                Err(e) => {
                    log::error!("a001_clothes: failed to load {}: {}", vm.id, e);
                    vm.error.set(Some(format!("Ошибка: {}", e)));
                }
            }
        });
    }

    pub fn toggle_edit_mode(&self) {
        self.session.update(|s| s.toggle_edit_mode());
    }

    pub fn cancel(&self) {
        if let Some(restored) = self.session.try_update(|s| s.cancel()) {
            self.form.set(restored);
        }
    }

    /// Send only the changed fields, then reload
    pub fn save(&self) {
        let candidate = self.form.with_untracked(|f| f.candidate());
        let plan = match self.session.with_untracked(|s| s.plan(&candidate)) {
            Ok(plan) => plan,
            Err(e) => {
                log::error!("a001_clothes: failed to build save plan: {}", e);
                alert(&format!("Ошибка при сохранении: {}", e));
                return;
            }
        };

        if plan.is_empty() {
            self.session.update(|s| {
                if s.is_editing() {
                    s.toggle_edit_mode();
                }
            });
            return;
        }

        if !self.session.try_update(|s| s.begin_save()).unwrap_or(false) {
            return;
        }

        let vm = *self;
        spawn_local(async move {
            let result = match plan.patch_body() {
                Some(body) => api::patch(vm.id, body).await.map(|_| ()),
                None => Ok(()),
            };
            match result {
                Ok(()) => {
                    vm.session.update(|s| s.finish_save(true));
                    vm.load();
                }
                Err(e) => {
                    log::error!("a001_clothes: failed to save {}: {}", vm.id, e);
                    vm.session.update(|s| s.finish_save(false));
                    alert(&format!("Ошибка при сохранении: {}", e));
                }
            }
        });
    }
}

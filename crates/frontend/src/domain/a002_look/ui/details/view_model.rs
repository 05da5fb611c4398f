use super::model::LookForm;
use crate::domain::a002_look::api;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::edit_session::{EditSession, PendingDeletion};
use contracts::domain::a002_look::aggregate::Look;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const ENTITY: &str = "a002_look";

/// ViewModel for the look detail page
#[derive(Clone, Copy)]
pub struct LookDetailsViewModel {
    pub id: i64,
    pub record: RwSignal<Option<Look>>,
    pub form: RwSignal<LookForm>,
    pub session: RwSignal<EditSession<LookForm>>,
    pub error: RwSignal<Option<String>>,
}

impl LookDetailsViewModel {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            record: RwSignal::new(None),
            form: RwSignal::new(LookForm::default()),
            session: RwSignal::new(EditSession::new(LookForm::default())),
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

    /// Load the look and reset the edit session (clears staged deletions)
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_by_id(vm.id).await {
                Ok(look) => {
                    let form = LookForm::from(&look);
                    vm.session.set(EditSession::new(form.clone()));
                    vm.form.set(form);
                    vm.record.set(Some(look));
                    vm.error.set(None);
                }
                Err(e) => {
                    log::error!("{}: failed to load {}: {}", ENTITY, vm.id, e);
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

    pub fn stage_category_deletion(&self, category_id: i64) {
        if confirm("Вы уверены, что хотите удалить эту категорию?") {
            self.session
                .update(|s| s.queue(PendingDeletion::Category { category_id }));
        }
    }

    pub fn stage_item_deletion(&self, category_id: i64, clothes_id: i64) {
        if confirm("Вы уверены, что хотите удалить эту вещь из категории?") {
            self.session.update(|s| {
                s.queue(PendingDeletion::Item {
                    category_id,
                    clothes_id,
                })
            });
        }
    }

    /// PATCH with the changed fields, then the queued deletions, one by one
    pub fn save(&self) {
        let candidate = self.form.with_untracked(|f| f.candidate());
        let plan = match self.session.with_untracked(|s| s.plan(&candidate)) {
            Ok(plan) => plan,
            Err(e) => {
                log::error!("{}: failed to build save plan: {}", ENTITY, e);
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
            match api::apply_save_plan(vm.id, &plan).await {
                Ok(()) => {
                    vm.session.update(|s| s.finish_save(true));
                    vm.load();
                }
                Err(failure) => {
                    log::error!(
                        "{}: failed to save {} after {} of {} steps: {}",
                        ENTITY,
                        vm.id,
                        failure.completed,
                        plan.steps.len(),
                        failure.error
                    );
                    vm.session.update(|s| {
                        s.record_progress(&plan, failure.completed, &candidate);
                        s.finish_save(false);
                    });
                    alert(&format!("Ошибка при сохранении: {}", failure.error));
                }
            }
        });
    }

    pub fn mark_checked(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::mark_checked(vm.id).await {
                Ok(_) => vm.load(),
                Err(e) => {
                    log::error!("{}: failed to mark {} as checked: {}", ENTITY, vm.id, e);
                    alert(&format!("Ошибка при обновлении статуса: {}", e));
                }
            }
        });
    }

    pub fn publish(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::publish(vm.id).await {
                Ok(response) => {
                    log::info!("{}: publish of {} queued as {}", ENTITY, vm.id, response.task_id);
                    alert(&format!(
                        "Лук успешно отправлен в социальные сети!\nTask ID: {}",
                        response.task_id
                    ));
                    vm.load();
                }
                Err(e) => {
                    log::error!("{}: failed to publish {}: {}", ENTITY, vm.id, e);
                    alert(&format!("Ошибка при публикации: {}", e));
                }
            }
        });
    }

    /// Immediate deletion of the whole look; `on_deleted` runs after success
    pub fn delete(&self, on_deleted: impl Fn() + 'static) {
        if !confirm("Вы уверены, что хотите удалить этот лук? Это действие нельзя отменить.") {
            return;
        }
        let id = self.id;
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => on_deleted(),
                Err(e) => {
                    log::error!("{}: failed to delete {}: {}", ENTITY, id, e);
                    alert(&format!("Ошибка при удалении: {}", e));
                }
            }
        });
    }
}

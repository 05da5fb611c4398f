//! Сессия редактирования карточки: снимок, отложенные удаления и план сохранения.
//!
//! Снимок — проекция записи на редактируемые поля, снятая при загрузке.
//! Сохранение отправляет только поля, значение которых отличается от снимка
//! (сравнение по JSON-значению, списки сравниваются по содержимому), затем
//! по одному запросу на каждое отложенное удаление: сначала категории,
//! потом вещи внутри категорий. Если план прервался на ошибке, уже
//! выполненные шаги снимаются с очереди и при повторе не отправляются.

use serde::Serialize;
use serde_json::{Map, Value};

/// Удаление под-ресурса, отложенное до сохранения
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingDeletion {
    Category { category_id: i64 },
    Item { category_id: i64, clothes_id: i64 },
}

/// Один сетевой шаг сохранения
#[derive(Clone, Debug, PartialEq)]
pub enum SaveStep {
    Patch(Map<String, Value>),
    DeleteCategory { category_id: i64 },
    DeleteItem { category_id: i64, clothes_id: i64 },
}

/// Упорядоченный список шагов; выполняется строго последовательно
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavePlan {
    pub steps: Vec<SaveStep>,
}

impl SavePlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn patch_body(&self) -> Option<&Map<String, Value>> {
        self.steps.iter().find_map(|step| match step {
            SaveStep::Patch(body) => Some(body),
            _ => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditMode {
    View,
    Editing,
}

/// Поля `candidate`, JSON-значение которых отличается от `snapshot`
pub fn changed_fields<F: Serialize>(snapshot: &F, candidate: &F) -> Result<Map<String, Value>, serde_json::Error> {
    let before = serde_json::to_value(snapshot)?;
    let after = serde_json::to_value(candidate)?;

    let mut changed = Map::new();
    if let Value::Object(after) = after {
        for (key, value) in after {
            if before.get(&key) != Some(&value) {
                changed.insert(key, value);
            }
        }
    }
    Ok(changed)
}

#[derive(Clone, Debug)]
pub struct EditSession<F> {
    snapshot: F,
    pending: Vec<PendingDeletion>,
    /// Удаления, уже выполненные сервером в прерванном сохранении
    done: Vec<PendingDeletion>,
    mode: EditMode,
    saving: bool,
}

impl<F: Serialize + Clone> EditSession<F> {
    pub fn new(snapshot: F) -> Self {
        Self {
            snapshot,
            pending: Vec::new(),
            done: Vec::new(),
            mode: EditMode::View,
            saving: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Только переключение видимости, данные не трогаются
    pub fn toggle_edit_mode(&mut self) {
        self.mode = match self.mode {
            EditMode::View => EditMode::Editing,
            EditMode::Editing => EditMode::View,
        };
    }

    pub fn queue(&mut self, deletion: PendingDeletion) {
        if !self.pending.contains(&deletion) {
            self.pending.push(deletion);
        }
    }

    pub fn pending(&self) -> &[PendingDeletion] {
        &self.pending
    }

    fn is_deleted(&self, deletion: &PendingDeletion) -> bool {
        self.pending.contains(deletion) || self.done.contains(deletion)
    }

    pub fn is_category_hidden(&self, category_id: i64) -> bool {
        self.is_deleted(&PendingDeletion::Category { category_id })
    }

    /// Вещь скрыта, если удаляется она сама или вся её категория
    pub fn is_item_hidden(&self, category_id: i64, clothes_id: i64) -> bool {
        self.is_category_hidden(category_id)
            || self.is_deleted(&PendingDeletion::Item {
                category_id,
                clothes_id,
            })
    }

    /// Отмена: очередь удалений очищается, форма восстанавливается из снимка.
    /// Уже выполненные удаления остаются скрытыми.
    pub fn cancel(&mut self) -> F {
        self.pending.clear();
        self.mode = EditMode::View;
        self.snapshot.clone()
    }

    /// План сохранения для текущего состояния формы.
    ///
    /// Удаление вещи из категории, которая сама удаляется, в план не попадает.
    pub fn plan(&self, candidate: &F) -> Result<SavePlan, serde_json::Error> {
        let mut steps = Vec::new();

        let changed = changed_fields(&self.snapshot, candidate)?;
        if !changed.is_empty() {
            steps.push(SaveStep::Patch(changed));
        }

        for deletion in &self.pending {
            if let PendingDeletion::Category { category_id } = *deletion {
                steps.push(SaveStep::DeleteCategory { category_id });
            }
        }
        for deletion in &self.pending {
            if let PendingDeletion::Item { category_id, clothes_id } = *deletion {
                if !self.is_category_hidden(category_id) {
                    steps.push(SaveStep::DeleteItem {
                        category_id,
                        clothes_id,
                    });
                }
            }
        }

        Ok(SavePlan { steps })
    }

    /// Захват флага сохранения; `false`, если сохранение уже идёт
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    /// Учесть первые `completed` шагов прерванного плана: изменённые поля
    /// попадают в снимок, выполненные удаления уходят из очереди.
    pub fn record_progress(&mut self, plan: &SavePlan, completed: usize, candidate: &F) {
        for step in plan.steps.iter().take(completed) {
            let deletion = match *step {
                SaveStep::Patch(_) => {
                    self.snapshot = candidate.clone();
                    continue;
                }
                SaveStep::DeleteCategory { category_id } => PendingDeletion::Category { category_id },
                SaveStep::DeleteItem {
                    category_id,
                    clothes_id,
                } => PendingDeletion::Item {
                    category_id,
                    clothes_id,
                },
            };
            self.pending.retain(|d| *d != deletion);
            if !self.done.contains(&deletion) {
                self.done.push(deletion);
            }
        }
    }

    /// При ошибке остаёмся в режиме редактирования с нетронутыми правками
    pub fn finish_save(&mut self, succeeded: bool) {
        self.saving = false;
        if succeeded {
            self.pending.clear();
            self.done.clear();
            self.mode = EditMode::View;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Debug, Serialize)]
    struct Form {
        name: String,
        description: String,
        tags: Vec<String>,
        checked: bool,
    }

    fn form() -> Form {
        Form {
            name: "Осень".to_string(),
            description: "Тёплый образ".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            checked: false,
        }
    }

    #[test]
    fn test_unmodified_form_has_empty_plan() {
        let session = EditSession::new(form());
        let plan = session.plan(&form()).unwrap();
        assert!(plan.is_empty());
        assert!(plan.patch_body().is_none());
    }

    #[test]
    fn test_only_changed_field_is_sent() {
        let session = EditSession::new(form());
        let mut candidate = form();
        candidate.name = "Зима".to_string();

        let plan = session.plan(&candidate).unwrap();
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(
            Value::Object(plan.patch_body().unwrap().clone()),
            json!({ "name": "Зима" })
        );
    }

    #[test]
    fn test_lists_compared_by_content() {
        let snapshot = form();
        let same_content = form();
        assert!(changed_fields(&snapshot, &same_content).unwrap().is_empty());

        let mut reordered = form();
        reordered.tags.reverse();
        let changed = changed_fields(&snapshot, &reordered).unwrap();
        assert_eq!(changed.get("tags"), Some(&json!(["b", "a"])));
        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn test_cancel_discards_queue_and_edits() {
        let mut session = EditSession::new(form());
        session.toggle_edit_mode();
        session.queue(PendingDeletion::Category { category_id: 1 });
        session.queue(PendingDeletion::Item { category_id: 2, clothes_id: 7 });
        assert!(session.is_category_hidden(1));
        assert!(session.is_item_hidden(2, 7));

        let restored = session.cancel();
        assert_eq!(restored.name, "Осень");
        assert!(session.pending().is_empty());
        assert!(!session.is_category_hidden(1));
        assert!(!session.is_item_hidden(2, 7));
        assert!(!session.is_editing());
        assert!(session.plan(&form()).unwrap().is_empty());
    }

    #[test]
    fn test_categories_deleted_before_items() {
        let mut session = EditSession::new(form());
        session.queue(PendingDeletion::Item { category_id: 2, clothes_id: 7 });
        session.queue(PendingDeletion::Category { category_id: 1 });
        let mut candidate = form();
        candidate.checked = true;

        let plan = session.plan(&candidate).unwrap();
        assert_eq!(
            plan.steps,
            vec![
                SaveStep::Patch(json!({ "checked": true }).as_object().unwrap().clone()),
                SaveStep::DeleteCategory { category_id: 1 },
                SaveStep::DeleteItem { category_id: 2, clothes_id: 7 },
            ]
        );
    }

    #[test]
    fn test_item_of_deleted_category_is_skipped() {
        let mut session = EditSession::new(form());
        session.queue(PendingDeletion::Item { category_id: 3, clothes_id: 9 });
        session.queue(PendingDeletion::Category { category_id: 3 });
        session.queue(PendingDeletion::Item { category_id: 3, clothes_id: 9 });

        let plan = session.plan(&form()).unwrap();
        assert_eq!(plan.steps, vec![SaveStep::DeleteCategory { category_id: 3 }]);
        assert!(session.is_item_hidden(3, 9));
    }

    #[test]
    fn test_deletions_without_field_changes_skip_patch() {
        let mut session = EditSession::new(form());
        session.queue(PendingDeletion::Category { category_id: 4 });
        let plan = session.plan(&form()).unwrap();
        assert!(plan.patch_body().is_none());
        assert_eq!(plan.steps, vec![SaveStep::DeleteCategory { category_id: 4 }]);
    }

    #[test]
    fn test_save_guard_and_failure_keeps_editing() {
        let mut session = EditSession::new(form());
        session.toggle_edit_mode();
        session.queue(PendingDeletion::Category { category_id: 5 });

        assert!(session.begin_save());
        assert!(!session.begin_save());
        session.finish_save(false);
        assert!(session.is_editing());
        assert_eq!(session.pending().len(), 1);

        assert!(session.begin_save());
        session.finish_save(true);
        assert!(!session.is_editing());
        assert!(session.pending().is_empty());
        assert!(!session.is_saving());
    }

    #[test]
    fn test_interrupted_save_does_not_repeat_done_steps() {
        let mut session = EditSession::new(form());
        session.toggle_edit_mode();
        session.queue(PendingDeletion::Category { category_id: 1 });
        session.queue(PendingDeletion::Category { category_id: 2 });
        session.queue(PendingDeletion::Item { category_id: 1, clothes_id: 5 });
        let mut candidate = form();
        candidate.name = "Зима".to_string();

        let plan = session.plan(&candidate).unwrap();
        assert_eq!(plan.steps.len(), 3);

        // PATCH и первая категория прошли, вторая категория вернула ошибку
        assert!(session.begin_save());
        session.record_progress(&plan, 2, &candidate);
        session.finish_save(false);

        assert!(session.is_editing());
        assert!(session.is_category_hidden(1));
        assert!(session.is_item_hidden(1, 5));
        let retry = session.plan(&candidate).unwrap();
        assert_eq!(retry.steps, vec![SaveStep::DeleteCategory { category_id: 2 }]);

        // отмена возвращает уже сохранённые значения, удалённое остаётся скрытым
        let restored = session.cancel();
        assert_eq!(restored.name, "Зима");
        assert!(session.is_category_hidden(1));
        assert!(!session.is_category_hidden(2));
    }

    #[test]
    fn test_toggle_edit_mode_does_not_touch_queue() {
        let mut session = EditSession::new(form());
        session.toggle_edit_mode();
        session.queue(PendingDeletion::Category { category_id: 1 });
        session.toggle_edit_mode();
        assert!(!session.is_editing());
        assert_eq!(session.pending().len(), 1);
    }
}

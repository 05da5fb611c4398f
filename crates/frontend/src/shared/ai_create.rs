//! Состояние формы AI-создания записи (поле ввода + флаг занятости)

use leptos::prelude::*;

/// Результат попытки начать отправку
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AiSubmit {
    Ready(String),
    /// Предыдущая отправка ещё не завершилась
    Busy,
    /// Поле пустое, запрос не отправляется
    Empty,
}

#[derive(Clone, Copy)]
pub struct AiCreateState {
    pub input: RwSignal<String>,
    pub busy: RwSignal<bool>,
}

impl AiCreateState {
    pub fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
        }
    }

    /// Захватить флаг занятости и забрать текст для отправки
    pub fn begin(&self) -> AiSubmit {
        if self.busy.get_untracked() {
            return AiSubmit::Busy;
        }
        let Some(text) = submission(&self.input.get_untracked()) else {
            return AiSubmit::Empty;
        };
        self.busy.set(true);
        AiSubmit::Ready(text)
    }

    /// Успех очищает поле; при ошибке введённый текст остаётся
    pub fn finish(&self, succeeded: bool) {
        if succeeded {
            self.input.set(String::new());
        }
        self.busy.set(false);
    }
}

impl Default for AiCreateState {
    fn default() -> Self {
        Self::new()
    }
}

/// Обрезанный текст поля; `None`, если в нём только пробелы
pub fn submission(input: &str) -> Option<String> {
    let text = input.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_not_submitted() {
        assert_eq!(submission(""), None);
        assert_eq!(submission("   "), None);
        assert_eq!(
            submission(" https://shop.example/item ").as_deref(),
            Some("https://shop.example/item")
        );
    }

    #[test]
    fn test_busy_flag_blocks_second_submission() {
        let state = AiCreateState::new();
        assert_eq!(state.begin(), AiSubmit::Empty);

        state.input.set("офисный образ".to_string());
        assert_eq!(state.begin(), AiSubmit::Ready("офисный образ".to_string()));
        assert_eq!(state.begin(), AiSubmit::Busy);

        state.finish(false);
        assert_eq!(state.input.get_untracked(), "офисный образ");
        assert!(!state.busy.get_untracked());

        assert!(matches!(state.begin(), AiSubmit::Ready(_)));
        state.finish(true);
        assert_eq!(state.input.get_untracked(), "");
    }
}

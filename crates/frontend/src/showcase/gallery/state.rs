//! Состояние бесконечной ленты образов

use contracts::domain::a002_look::aggregate::Look;

/// Размер страницы публичной галереи
pub const GALLERY_PAGE_SIZE: u64 = 12;

/// Допуск до низа страницы, после которого подгружается следующая порция
pub const SCROLL_THRESHOLD_PX: i32 = 5;

#[derive(Clone, Debug)]
pub struct GalleryState {
    pub items: Vec<Look>,
    /// Последняя запрошенная страница (0 до первой загрузки)
    pub page: u64,
    pub is_loading: bool,
    pub has_more: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            is_loading: false,
            has_more: true,
        }
    }
}

impl GalleryState {
    /// Номер следующей страницы; `None`, если загрузка уже идёт или лента кончилась
    pub fn begin_load(&mut self) -> Option<u64> {
        if self.is_loading || !self.has_more {
            return None;
        }
        self.is_loading = true;
        self.page += 1;
        Some(self.page)
    }

    /// Применить результат; `None` означает ошибку загрузки и останавливает ленту
    pub fn finish_load(&mut self, results: Option<Vec<Look>>) {
        self.is_loading = false;
        match results {
            Some(results) if !results.is_empty() => {
                self.has_more = results.len() as u64 == GALLERY_PAGE_SIZE;
                self.items.extend(results);
            }
            _ => self.has_more = false,
        }
    }
}

/// Описание до первой точки включительно
pub fn first_sentence(description: &str) -> &str {
    let end = description.find('.').map_or(description.len(), |idx| idx + 1);
    description[..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looks(n: usize) -> Vec<Look> {
        (0..n)
            .map(|i| serde_json::from_value(serde_json::json!({ "id": i })).unwrap())
            .collect()
    }

    #[test]
    fn test_full_page_keeps_feed_open() {
        let mut state = GalleryState::default();
        assert_eq!(state.begin_load(), Some(1));
        assert_eq!(state.begin_load(), None);
        state.finish_load(Some(looks(12)));
        assert!(state.has_more);
        assert_eq!(state.begin_load(), Some(2));
        state.finish_load(Some(looks(5)));
        assert!(!state.has_more);
        assert_eq!(state.items.len(), 17);
        assert_eq!(state.begin_load(), None);
    }

    #[test]
    fn test_empty_or_failed_load_ends_feed() {
        let mut state = GalleryState::default();
        state.begin_load();
        state.finish_load(Some(Vec::new()));
        assert!(!state.has_more);

        let mut state = GalleryState::default();
        state.begin_load();
        state.finish_load(None);
        assert!(!state.has_more);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("Тёплый образ. Для прогулок."), "Тёплый образ.");
        assert_eq!(first_sentence("Без точки"), "Без точки");
        assert_eq!(first_sentence("  Начало с пробела. Дальше"), "Начало с пробела.");
        assert_eq!(first_sentence(""), "");
    }
}

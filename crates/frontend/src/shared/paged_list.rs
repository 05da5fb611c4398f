//! Состояние постраничного списка с серверной пагинацией.
//!
//! Страницы нумеруются с 1, как в API. Один объект состояния живёт на один
//! экземпляр страницы (оборачивается в `RwSignal`), поэтому списки не делят
//! между собой номер страницы или сортировку.
//!
//! Каждая загрузка получает токен через [`PagedListState::begin_request`];
//! ответ с устаревшим токеном отбрасывается, так что быстрые повторные
//! клики не перемешивают страницы.

use contracts::domain::common::{total_pages, ListQuery, Paginated};

/// Размер страницы в админ-панели
pub const ADMIN_PAGE_SIZE: u64 = 25;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub descending: bool,
}

/// Заменить содержимое списка или дописать страницу в конец ("Загрузить ещё")
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    Replace,
    Append,
}

/// Результат применения ответа со страницей
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageApply {
    Applied,
    /// Ответ на устаревший запрос
    Stale,
    OutOfRange { last_page: u64 },
}

#[derive(Clone, Debug)]
pub struct PagedListState<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub sort: Option<SortState>,
    pub error: Option<String>,
    pub is_loaded: bool,
    request_seq: u64,
}

impl<T> PagedListState<T> {
    pub fn new(page_size: u64) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total_count: 0,
            total_pages: 0,
            sort: None,
            error: None,
            is_loaded: false,
            request_seq: 0,
        }
    }

    /// Параметры запроса страницы; сортировка добавляется только если выбрана
    pub fn query(&self, page: u64) -> ListQuery {
        let query = ListQuery::new(page, self.page_size);
        match &self.sort {
            Some(sort) => query.with_sort(sort.field.clone(), sort.descending),
            None => query,
        }
    }

    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    fn is_current(&self, token: u64) -> bool {
        token == self.request_seq
    }

    /// Применить ответ сервера.
    ///
    /// Страница за пределами нового числа страниц (список сократился, например
    /// после удаления последней записи на последней странице) не применяется:
    /// вызывающий перезапрашивает `last_page`. Пустой список всегда
    /// показывается как страница 1.
    pub fn apply_page(&mut self, token: u64, page: u64, data: Paginated<T>, mode: LoadMode) -> PageApply {
        if !self.is_current(token) {
            return PageApply::Stale;
        }
        let pages = total_pages(data.count, self.page_size);
        if pages > 0 && page > pages {
            return PageApply::OutOfRange { last_page: pages };
        }
        self.total_count = data.count;
        self.total_pages = pages;
        self.page = page.clamp(1, pages.max(1));
        self.error = None;
        self.is_loaded = true;
        match mode {
            LoadMode::Replace => self.items = data.results,
            LoadMode::Append => self.items.extend(data.results),
        }
        PageApply::Applied
    }

    /// Ошибка загрузки заменяет содержимое списка сообщением
    pub fn apply_error(&mut self, token: u64, message: String) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.items.clear();
        self.error = Some(message);
        self.is_loaded = true;
        true
    }

    /// Пустой список после успешной загрузки: показывается заглушка
    pub fn shows_placeholder(&self) -> bool {
        self.is_loaded && self.error.is_none() && self.items.is_empty()
    }

    pub fn can_go_prev(&self) -> bool {
        self.total_pages > 0 && self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Загрузить ещё" всегда запрашивает `page + 1` и дописывает результат
    pub fn can_load_more(&self) -> bool {
        self.total_pages > 0 && self.page < self.total_pages
    }

    pub fn page_info(&self) -> String {
        format!("Страница {} из {}", self.page, self.total_pages)
    }

    /// Клик по кнопке сортировки: активное поле меняет направление,
    /// новое поле становится единственным активным с убыванием по умолчанию.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.field == field => Some(SortState {
                field: sort.field,
                descending: !sort.descending,
            }),
            _ => Some(SortState {
                field: field.to_string(),
                descending: true,
            }),
        };
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.sort.as_ref().is_some_and(|s| s.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(count: u64, len: usize) -> Paginated<u32> {
        Paginated {
            results: (0..len as u32).collect(),
            count,
        }
    }

    fn loaded(count: u64, page: u64, len: usize) -> PagedListState<u32> {
        let mut state = PagedListState::new(ADMIN_PAGE_SIZE);
        let token = state.begin_request();
        assert_eq!(
            state.apply_page(token, page, page_of(count, len), LoadMode::Replace),
            PageApply::Applied
        );
        state
    }

    #[test]
    fn test_total_pages_and_boundaries() {
        for count in [1u64, 24, 25, 26, 49, 50, 51, 250] {
            let expected_pages = count.div_ceil(25);
            let first = loaded(count, 1, 1);
            assert_eq!(first.total_pages, expected_pages);
            assert!(!first.can_go_prev());

            let last = loaded(count, expected_pages, 1);
            assert!(!last.can_go_next());
            assert!(!last.can_load_more());

            if expected_pages > 1 {
                assert!(first.can_go_next());
                assert!(first.can_load_more());
                assert!(last.can_go_prev());
            }
        }
    }

    #[test]
    fn test_empty_result_disables_everything() {
        let state = loaded(0, 1, 0);
        assert_eq!(state.total_pages, 0);
        assert!(state.shows_placeholder());
        assert!(!state.can_go_prev());
        assert!(!state.can_go_next());
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_append_keeps_previous_items() {
        let mut state = PagedListState::new(2);
        let token = state.begin_request();
        state.apply_page(token, 1, Paginated { results: vec![1, 2], count: 3 }, LoadMode::Replace);
        let token = state.begin_request();
        state.apply_page(token, 2, Paginated { results: vec![3], count: 3 }, LoadMode::Append);
        assert_eq!(state.items, vec![1, 2, 3]);
        assert_eq!(state.page, 2);
        assert!(!state.can_load_more());

        let token = state.begin_request();
        state.apply_page(token, 1, Paginated { results: vec![1, 2], count: 3 }, LoadMode::Replace);
        assert_eq!(state.items, vec![1, 2]);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state: PagedListState<u32> = PagedListState::new(ADMIN_PAGE_SIZE);
        let stale = state.begin_request();
        let fresh = state.begin_request();
        assert_eq!(state.apply_page(fresh, 2, page_of(60, 25), LoadMode::Replace), PageApply::Applied);
        assert_eq!(state.apply_page(stale, 1, page_of(60, 3), LoadMode::Replace), PageApply::Stale);
        assert_eq!(state.page, 2);
        assert_eq!(state.items.len(), 25);
        assert!(!state.apply_error(stale, "late".to_string()));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_error_replaces_items() {
        let mut state = loaded(30, 1, 25);
        let token = state.begin_request();
        state.apply_error(token, "HTTP error! Status: 500".to_string());
        assert!(state.items.is_empty());
        assert!(!state.shows_placeholder());
        assert!(state.error.as_deref().unwrap_or_default().contains("500"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut state: PagedListState<u32> = PagedListState::new(ADMIN_PAGE_SIZE);
        assert_eq!(state.query(1).order_by, None);

        state.toggle_sort("name");
        assert_eq!(
            state.sort,
            Some(SortState { field: "name".to_string(), descending: true })
        );
        state.toggle_sort("name");
        assert_eq!(state.sort.as_ref().map(|s| s.descending), Some(false));

        state.toggle_sort("checked");
        assert_eq!(
            state.sort,
            Some(SortState { field: "checked".to_string(), descending: true })
        );
        assert!(state.is_sorted_by("checked"));
        assert!(!state.is_sorted_by("name"));

        let query = state.query(1);
        assert_eq!(query.order_by.as_deref(), Some("checked"));
        assert_eq!(query.desc_order, Some(true));
    }

    #[test]
    fn test_shrunk_list_keeps_page_in_range() {
        // 26 записей, открыта вторая страница с единственной записью
        let mut state = loaded(26, 2, 1);
        assert_eq!(state.page_info(), "Страница 2 из 2");

        // запись удалена, перезагрузка той же страницы
        let token = state.begin_request();
        let outcome = state.apply_page(token, 2, page_of(25, 0), LoadMode::Replace);
        assert_eq!(outcome, PageApply::OutOfRange { last_page: 1 });
        assert_eq!(state.page, 2);
        assert_eq!(state.items.len(), 1);
        assert!(!state.shows_placeholder());

        let token = state.begin_request();
        assert_eq!(
            state.apply_page(token, 1, page_of(25, 25), LoadMode::Replace),
            PageApply::Applied
        );
        assert_eq!(state.page_info(), "Страница 1 из 1");
        assert!(!state.can_go_prev());
        assert!(!state.can_go_next());
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn test_empty_list_resets_to_first_page() {
        let mut state = loaded(26, 2, 1);
        let token = state.begin_request();
        assert_eq!(
            state.apply_page(token, 2, page_of(0, 0), LoadMode::Replace),
            PageApply::Applied
        );
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 0);
        assert!(state.shows_placeholder());
        assert!(!state.can_go_prev());
    }

    #[test]
    fn test_page_info() {
        let state = loaded(51, 2, 25);
        assert_eq!(state.page_info(), "Страница 2 из 3");
    }
}

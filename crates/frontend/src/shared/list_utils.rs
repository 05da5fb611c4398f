/// Утилиты для отображения списков и карточек
use super::paged_list::SortState;

/// Индикатор направления для кнопки сортировки.
///
/// Неактивная кнопка показывает направление по умолчанию (убывание).
pub fn get_sort_indicator(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(sort) if sort.field == field && !sort.descending => "↑",
        _ => "↓",
    }
}

/// CSS-класс кнопки сортировки
pub fn get_sort_class(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(sort) if sort.field == field => "sort-btn sort-btn--active",
        _ => "sort-btn",
    }
}

/// Значение поля или заглушка, если оно пустое
pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Да"
    } else {
        "Нет"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let desc = SortState { field: "name".to_string(), descending: true };
        let asc = SortState { field: "name".to_string(), descending: false };
        assert_eq!(get_sort_indicator(None, "name"), "↓");
        assert_eq!(get_sort_indicator(Some(&desc), "name"), "↓");
        assert_eq!(get_sort_indicator(Some(&asc), "name"), "↑");
        assert_eq!(get_sort_indicator(Some(&asc), "id"), "↓");
        assert_eq!(get_sort_class(Some(&asc), "name"), "sort-btn sort-btn--active");
        assert_eq!(get_sort_class(Some(&asc), "id"), "sort-btn");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "N/A"), "N/A");
        assert_eq!(or_placeholder("   ", "N/A"), "N/A");
        assert_eq!(or_placeholder("Пальто", "N/A"), "Пальто");
    }
}

//! Браузерные диалоги и прокрутка окна

use web_sys::{ScrollBehavior, ScrollToOptions};

/// Блокирующее сообщение пользователю
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Подтверждение действия; без окна считаем, что пользователь отказался
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Окно прокручено до низа страницы (с допуском `threshold` пикселей)
pub fn is_scrolled_to_bottom(threshold: i32) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return false;
    };
    element.scroll_top() + element.client_height() >= element.scroll_height() - threshold
}

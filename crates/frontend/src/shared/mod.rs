pub mod ai_create;
pub mod api_utils;
pub mod components;
pub mod dialogs;
pub mod edit_session;
pub mod icons;
pub mod list_loader;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod paged_list;

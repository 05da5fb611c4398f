pub mod pagination_controls;
pub mod sort_buttons;

//! Look Details UI Module
//!
//! - model.rs: editable projection of the look (form + snapshot)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::LookDetails;
pub use view_model::LookDetailsViewModel;

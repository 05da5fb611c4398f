//! Clothes Details UI Module
//!
//! - model.rs: editable projection of the record (form + snapshot)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::ClothesDetails;
pub use view_model::ClothesDetailsViewModel;

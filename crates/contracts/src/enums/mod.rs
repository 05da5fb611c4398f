pub mod colour;
pub mod gender;

pub use colour::Colour;
pub use gender::Gender;

pub mod a001_clothes;
pub mod a002_look;

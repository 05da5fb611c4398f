//! Публичная витрина: галерея проверенных образов и страница образа

pub mod gallery;
pub mod look;

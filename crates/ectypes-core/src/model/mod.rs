//! Modelos neutrales (Fields, Entity).

pub mod entity;
pub mod fields;

pub use entity::Entity;
pub use fields::{fields_from, Fields};

//! `sportcat-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, EntityKind};
pub use value_object::ValueObject;

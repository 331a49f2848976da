//! Sporting-goods catalog and rating aggregation.
//!
//! This crate holds the whole catalog model as deterministic, in-memory domain
//! logic (no IO, no HTTP, no storage). Callers construct a [`Catalog`] and drive
//! it through its operations; presentation layers wrap it, they do not reach
//! into the registries.

pub mod activity;
pub mod catalog;
pub mod category;
pub mod config;
pub mod product;
pub mod rating;
pub mod shared;
pub mod stats;

pub use activity::ActivityRegistry;
pub use catalog::Catalog;
pub use category::CategoryRegistry;
pub use config::{CatalogConfig, ReferencePolicy};
pub use product::{Product, ProductStore};
pub use rating::{Rating, Stars};
pub use shared::SharedCatalog;
pub use stats::StarGroup;

pub use sportcat_core::{DomainError, DomainResult, EntityKind};

//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Kind of catalog entity referenced by a [`DomainError::NotFound`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Activity,
    Category,
    Product,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            EntityKind::Activity => "activity",
            EntityKind::Category => "category",
            EntityKind::Product => "product",
        })
    }
}

/// Domain-level error.
///
/// Every failure is local to the call that produced it: a rejected mutation
/// leaves the catalog exactly as it was, so callers may retry with corrected
/// input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input was rejected (empty activity list, duplicate name, unknown
    /// linked activity, star count out of range, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A named entity does not exist.
    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

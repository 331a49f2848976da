//! User ratings attached to products.

use std::cmp::Ordering;

use serde::Serialize;
use sportcat_core::{DomainError, DomainResult, ValueObject};

/// Star score of a rating, always within `0..=5`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Stars(u8);

impl Stars {
    pub const MAX: u8 = 5;

    pub fn new(value: i32) -> DomainResult<Self> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(DomainError::validation(format!(
                "stars must be within 0..={}, got {value}",
                Self::MAX
            ))),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl ValueObject for Stars {}

impl core::fmt::Display for Stars {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i32> for Stars {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A single user rating. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    product_name: String,
    user: String,
    stars: Stars,
    comment: String,
}

impl ValueObject for Rating {}

impl Rating {
    pub fn new(
        product_name: impl Into<String>,
        user: impl Into<String>,
        stars: Stars,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            user: user.into(),
            stars,
            comment: comment.into(),
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn stars(&self) -> Stars {
        self.stars
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Listing order: more stars first, then comments in descending
    /// lexicographic order.
    ///
    /// Equivalent to sorting the `"<stars> : <comment>"` lines in reverse,
    /// since the star prefix is a single digit.
    pub fn listing_order(a: &Rating, b: &Rating) -> Ordering {
        b.stars
            .cmp(&a.stars)
            .then_with(|| b.comment.cmp(&a.comment))
    }
}

/// Formats as `"<stars> : <comment>"`.
impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} : {}", self.stars, self.comment)
    }
}

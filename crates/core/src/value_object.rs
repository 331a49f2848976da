//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values and never change after construction. In the catalog,
//! star counts and individual ratings are value objects, while products are
//! entities keyed by name.

/// Marker trait for value objects.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Stars(u8);
///
/// impl ValueObject for Stars {}
///
/// assert_eq!(Stars(4), Stars(4));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

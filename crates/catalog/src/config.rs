//! Catalog configuration.

use serde::{Deserialize, Serialize};
use sportcat_core::{DomainError, DomainResult};

/// Environment variable selecting the [`ReferencePolicy`].
pub const REFERENCE_POLICY_ENV: &str = "SPORTCAT_REFERENCE_POLICY";

/// How `add_product` treats its activity and category names.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Accept any activity/category name, known or not.
    #[default]
    Lenient,
    /// Reject products whose activity or category is not registered.
    Strict,
}

impl core::str::FromStr for ReferencePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(DomainError::validation(format!(
                "unknown reference policy: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub references: ReferencePolicy,
}

impl CatalogConfig {
    pub fn strict() -> Self {
        Self {
            references: ReferencePolicy::Strict,
        }
    }

    /// Load from `SPORTCAT_REFERENCE_POLICY`; unset means lenient.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let references = match lookup(REFERENCE_POLICY_ENV) {
            Some(raw) => raw.parse()?,
            None => ReferencePolicy::default(),
        };
        Ok(Self { references })
    }
}

//! Controlled vocabulary of activities.

use std::collections::BTreeSet;

use sportcat_core::{DomainError, DomainResult};

/// Set of known activity names.
///
/// Activities are only ever added; the set iterates in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRegistry {
    names: BTreeSet<String>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every name in `names`, or none of them.
    ///
    /// Rejects an empty batch, a name already registered, and a name repeated
    /// inside the batch itself.
    pub fn define<I, S>(&mut self, names: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let batch: Vec<String> = names.into_iter().map(Into::into).collect();
        if batch.is_empty() {
            return Err(DomainError::validation("at least one activity is required"));
        }

        let mut seen = BTreeSet::new();
        for name in &batch {
            if self.names.contains(name) || !seen.insert(name.as_str()) {
                return Err(DomainError::validation(format!(
                    "duplicate activity: {name}"
                )));
            }
        }

        self.names.extend(batch);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All activities, alphabetically ascending.
    pub fn list(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

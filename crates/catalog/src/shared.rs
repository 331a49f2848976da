//! Shared, lock-guarded access to a [`Catalog`].
//!
//! One `RwLock` guards the whole catalog: a mutation holds the write lock for
//! its entire validate-then-apply sequence, queries share the read lock.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::Catalog;

#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Run a query under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.read_guard())
    }

    /// Run a mutation (or any read-then-write sequence) under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        f(&mut self.write_guard())
    }

    // Catalog operations never leave partial state behind, so a guard
    // recovered from a poisoned lock still holds a consistent catalog.
    fn read_guard(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("catalog lock poisoned; recovering read guard");
            poisoned.into_inner()
        })
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("catalog lock poisoned; recovering write guard");
            poisoned.into_inner()
        })
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

//! Products and the store that owns them.

use std::collections::BTreeMap;

use sportcat_core::{DomainError, DomainResult, Entity, EntityKind};

use crate::rating::{Rating, Stars};

/// A catalog item tied to one activity and one category.
///
/// Name, activity and category are fixed at creation; ratings are append-only
/// and kept in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    activity: String,
    category: String,
    ratings: Vec<Rating>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        activity: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            activity: activity.into(),
            category: category.into(),
            ratings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ratings in submission order.
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn add_rating(
        &mut self,
        user: impl Into<String>,
        stars: Stars,
        comment: impl Into<String>,
    ) {
        let rating = Rating::new(self.name.clone(), user, stars, comment);
        self.ratings.push(rating);
    }

    /// Ratings in listing order (see [`Rating::listing_order`]).
    pub fn ratings_for_listing(&self) -> Vec<&Rating> {
        let mut ratings: Vec<&Rating> = self.ratings.iter().collect();
        ratings.sort_by(|a, b| Rating::listing_order(a, b));
        ratings
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

/// Products keyed by name; iteration is alphabetical by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductStore {
    products: BTreeMap<String, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `product`; fails if a product with the same name exists.
    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        if self.products.contains_key(product.id()) {
            return Err(DomainError::validation(format!(
                "duplicate product: {}",
                product.name()
            )));
        }
        self.products.insert(product.id().clone(), product);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    pub fn get(&self, name: &str) -> DomainResult<&Product> {
        self.products
            .get(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, name))
    }

    pub fn get_mut(&mut self, name: &str) -> DomainResult<&mut Product> {
        self.products
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, name))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, alphabetical by name.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Names of products accepted by `filter`, alphabetically ascending.
    pub fn names_where<F>(&self, filter: F) -> Vec<String>
    where
        F: Fn(&Product) -> bool,
    {
        self.iter()
            .filter(|&p| filter(p))
            .map(|p| p.name.clone())
            .collect()
    }
}

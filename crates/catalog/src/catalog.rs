//! The catalog facade.
//!
//! [`Catalog`] owns the activity and category registries and the product
//! store, and is the only entry point callers use. Mutations validate against
//! the registries before touching any state, so a failed call leaves the
//! catalog unchanged. Queries never mutate.

use std::collections::BTreeMap;

use tracing::instrument;

use sportcat_core::{DomainError, DomainResult};

use crate::activity::ActivityRegistry;
use crate::category::CategoryRegistry;
use crate::config::{CatalogConfig, ReferencePolicy};
use crate::product::{Product, ProductStore};
use crate::rating::{Rating, Stars};
use crate::stats::{self, StarGroup};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CatalogConfig,
    activities: ActivityRegistry,
    categories: CategoryRegistry,
    products: ProductStore,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ---- activities -------------------------------------------------------

    /// Register a batch of activities, all or nothing.
    #[instrument(skip_all, err(level = "warn"))]
    pub fn define_activities<I, S>(&mut self, names: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities.define(names)?;
        tracing::debug!(total = self.activities.len(), "activities defined");
        Ok(())
    }

    /// Known activities, alphabetically ascending.
    pub fn activities(&self) -> Vec<String> {
        self.activities.list()
    }

    pub fn has_activity(&self, name: &str) -> bool {
        self.activities.contains(name)
    }

    // ---- categories -------------------------------------------------------

    #[instrument(
        skip(self, name, linked_activities),
        fields(category = %name),
        err(level = "warn")
    )]
    pub fn add_category<I, S>(&mut self, name: &str, linked_activities: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.add(&self.activities, name, linked_activities)?;
        tracing::debug!("category added");
        Ok(())
    }

    pub fn count_categories(&self) -> usize {
        self.categories.count()
    }

    /// Categories linked to `activity`, alphabetically ascending.
    pub fn categories_for_activity(&self, activity: &str) -> Vec<String> {
        self.categories.for_activity(activity)
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    pub fn activities_for_category(&self, name: &str) -> DomainResult<Vec<String>> {
        self.categories.activities_of(name)
    }

    // ---- products ---------------------------------------------------------

    /// Create a product with no ratings.
    ///
    /// Under [`ReferencePolicy::Lenient`] the activity and category are taken
    /// as given; under [`ReferencePolicy::Strict`] both must be registered.
    #[instrument(skip(self, name), fields(product = %name), err(level = "warn"))]
    pub fn add_product(&mut self, name: &str, activity: &str, category: &str) -> DomainResult<()> {
        if self.config.references == ReferencePolicy::Strict {
            if !self.activities.contains(activity) {
                return Err(DomainError::validation(format!(
                    "product {name} references unknown activity: {activity}"
                )));
            }
            if !self.categories.contains(category) {
                return Err(DomainError::validation(format!(
                    "product {name} references unknown category: {category}"
                )));
            }
        }

        self.products.insert(Product::new(name, activity, category))?;
        tracing::debug!("product added");
        Ok(())
    }

    pub fn product(&self, name: &str) -> DomainResult<&Product> {
        self.products.get(name)
    }

    /// Every product name, alphabetically ascending.
    pub fn product_names(&self) -> Vec<String> {
        self.products.names_where(|_| true)
    }

    pub fn count_products(&self) -> usize {
        self.products.len()
    }

    /// Products in `category`; empty when the category is not registered.
    pub fn products_for_category(&self, category: &str) -> Vec<String> {
        if !self.categories.contains(category) {
            return Vec::new();
        }
        self.products.names_where(|p| p.category() == category)
    }

    /// Products for `activity`; empty when the activity is not registered.
    pub fn products_for_activity(&self, activity: &str) -> Vec<String> {
        if !self.activities.contains(activity) {
            return Vec::new();
        }
        self.products.names_where(|p| p.activity() == activity)
    }

    /// Products for `activity` whose category is one of `categories`.
    ///
    /// Empty when the activity is not registered. Category names are matched
    /// as given, registered or not.
    pub fn products<S: AsRef<str>>(&self, activity: &str, categories: &[S]) -> Vec<String> {
        if !self.activities.contains(activity) {
            return Vec::new();
        }
        self.products.names_where(|p| {
            p.activity() == activity && categories.iter().any(|c| c.as_ref() == p.category())
        })
    }

    // ---- ratings ----------------------------------------------------------

    /// Append a rating to `product`.
    ///
    /// The star count is checked before the product is looked up.
    #[instrument(skip(self, comment), err(level = "warn"))]
    pub fn add_rating(
        &mut self,
        product: &str,
        user: &str,
        stars: i32,
        comment: &str,
    ) -> DomainResult<()> {
        let stars = Stars::new(stars)?;
        let product = self.products.get_mut(product)?;
        product.add_rating(user, stars, comment);
        tracing::debug!(ratings = product.ratings().len(), "rating added");
        Ok(())
    }

    /// Ratings of `product` formatted as `"<stars> : <comment>"`, most stars first.
    ///
    /// Equal star counts are ordered by descending comment.
    pub fn ratings_for_product(&self, product: &str) -> DomainResult<Vec<String>> {
        let product = self.products.get(product)?;
        Ok(product
            .ratings_for_listing()
            .into_iter()
            .map(ToString::to_string)
            .collect())
    }

    pub fn rating_count(&self, product: &str) -> DomainResult<usize> {
        Ok(self.products.get(product)?.ratings().len())
    }

    /// Ratings submitted by `user`, by product name then submission order.
    pub fn ratings_by_user(&self, user: &str) -> Vec<&Rating> {
        self.products
            .iter()
            .flat_map(|p| p.ratings())
            .filter(|r| r.user() == user)
            .collect()
    }

    // ---- statistics -------------------------------------------------------

    /// Mean stars of `product`; [`stats::NO_RATINGS`] when it has no ratings.
    pub fn average_stars_of_product(&self, product: &str) -> DomainResult<f64> {
        let product = self.products.get(product)?;
        Ok(stats::product_mean(product).unwrap_or(stats::NO_RATINGS))
    }

    /// Mean stars over all ratings; [`stats::NO_RATINGS`] when there are none.
    pub fn average_stars_overall(&self) -> f64 {
        stats::overall_mean(&self.products).unwrap_or(stats::NO_RATINGS)
    }

    /// Mean stars per registered, rated activity, keyed alphabetically.
    pub fn average_stars_per_activity(&self) -> BTreeMap<String, f64> {
        stats::mean_per_activity(&self.activities, &self.products)
    }

    /// Rated products grouped by average stars, highest average first.
    pub fn products_grouped_by_average_stars(&self) -> Vec<StarGroup> {
        stats::group_by_mean(&self.products)
    }
}

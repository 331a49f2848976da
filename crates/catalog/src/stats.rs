//! Aggregate statistics over ratings.
//!
//! Everything here is a pure function of the product store. Products without
//! ratings never contribute a value; where a single number is expected and no
//! rating exists, the result is [`NO_RATINGS`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::activity::ActivityRegistry;
use crate::product::{Product, ProductStore};
use crate::rating::Rating;

/// Average reported when there are no ratings to average.
pub const NO_RATINGS: f64 = 0.0;

/// Running sum/count of star values.
#[derive(Debug, Default, Clone, Copy)]
struct StarTally {
    sum: u64,
    count: u64,
}

impl StarTally {
    fn add_all<'a>(&mut self, ratings: impl IntoIterator<Item = &'a Rating>) {
        for rating in ratings {
            self.sum += u64::from(rating.stars().get());
            self.count += 1;
        }
    }

    fn mean(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

/// Products sharing the same average star value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarGroup {
    pub average: f64,
    /// Product names, alphabetically ascending.
    pub products: Vec<String>,
}

/// Mean star count of one product, or `None` when it has no ratings.
pub fn product_mean(product: &Product) -> Option<f64> {
    let mut tally = StarTally::default();
    tally.add_all(product.ratings());
    tally.mean()
}

/// Mean star count over every rating of every product.
pub fn overall_mean(store: &ProductStore) -> Option<f64> {
    let mut tally = StarTally::default();
    for product in store.iter() {
        tally.add_all(product.ratings());
    }
    tally.mean()
}

/// Mean star count per registered activity, over all ratings of that
/// activity's products.
///
/// Activities without any rating are absent, as are activity names that are
/// not in `activities`. Keys are alphabetically ascending.
pub fn mean_per_activity(
    activities: &ActivityRegistry,
    store: &ProductStore,
) -> BTreeMap<String, f64> {
    let mut tallies: BTreeMap<&str, StarTally> = BTreeMap::new();
    for product in store
        .iter()
        .filter(|p| !p.ratings().is_empty() && activities.contains(p.activity()))
    {
        tallies
            .entry(product.activity())
            .or_default()
            .add_all(product.ratings());
    }

    tallies
        .into_iter()
        .filter_map(|(activity, tally)| tally.mean().map(|m| (activity.to_string(), m)))
        .collect()
}

/// Rated products grouped by their own average, highest average first.
///
/// Averages are compared exactly: two products fall in the same group only
/// when their means are the same `f64`, which holds whenever the underlying
/// fractions are equal.
pub fn group_by_mean(store: &ProductStore) -> Vec<StarGroup> {
    let mut groups: Vec<StarGroup> = Vec::new();

    // The store iterates by name, so each group's list stays sorted.
    for product in store.iter() {
        let Some(average) = product_mean(product) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.average == average) {
            Some(group) => group.products.push(product.name().to_string()),
            None => groups.push(StarGroup {
                average,
                products: vec![product.name().to_string()],
            }),
        }
    }

    groups.sort_by(|a, b| b.average.total_cmp(&a.average));
    groups
}

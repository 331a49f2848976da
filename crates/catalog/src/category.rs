//! Product categories and the activities they apply to.

use std::collections::{BTreeMap, BTreeSet};

use sportcat_core::{DomainError, DomainResult, EntityKind};

use crate::activity::ActivityRegistry;

/// Maps category name → set of linked activity names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` linked to `linked_activities`.
    ///
    /// Every linked activity must already be known to `activities`; otherwise
    /// nothing is stored. Registering an existing name replaces its links.
    pub fn add<I, S>(
        &mut self,
        activities: &ActivityRegistry,
        name: impl Into<String>,
        linked_activities: I,
    ) -> DomainResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let linked: BTreeSet<String> = linked_activities.into_iter().map(Into::into).collect();

        if let Some(unknown) = linked.iter().find(|a| !activities.contains(a)) {
            return Err(DomainError::validation(format!(
                "category {name} links unknown activity: {unknown}"
            )));
        }

        self.links.insert(name, linked);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.links.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.links.len()
    }

    /// Categories whose linked set contains `activity`, alphabetically ascending.
    pub fn for_activity(&self, activity: &str) -> Vec<String> {
        self.links
            .iter()
            .filter(|(_, linked)| linked.contains(activity))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Activities linked to `category`, alphabetically ascending.
    pub fn activities_of(&self, category: &str) -> DomainResult<Vec<String>> {
        self.links
            .get(category)
            .map(|linked| linked.iter().cloned().collect())
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activities() -> ActivityRegistry {
        let mut registry = ActivityRegistry::new();
        registry.define(["Skiing", "Hiking", "Climbing"]).unwrap();
        registry
    }

    #[test]
    fn add_rejects_unknown_activity() {
        let activities = activities();
        let mut categories = CategoryRegistry::new();

        let err = categories
            .add(&activities, "Footwear", ["Skiing", "Surfing"])
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(categories.count(), 0);
        assert!(categories.for_activity("Skiing").is_empty());
    }

    #[test]
    fn for_activity_returns_matching_categories_sorted() {
        let activities = activities();
        let mut categories = CategoryRegistry::new();
        categories.add(&activities, "Ropes", ["Climbing"]).unwrap();
        categories.add(&activities, "Footwear", ["Skiing", "Hiking"]).unwrap();
        categories.add(&activities, "Backpacks", ["Hiking", "Climbing"]).unwrap();

        assert_eq!(categories.for_activity("Hiking"), vec!["Backpacks", "Footwear"]);
        assert_eq!(categories.for_activity("Climbing"), vec!["Backpacks", "Ropes"]);
        assert!(categories.for_activity("Running").is_empty());
    }

    #[test]
    fn re_adding_a_category_overwrites_its_links() {
        let activities = activities();
        let mut categories = CategoryRegistry::new();
        categories.add(&activities, "Footwear", ["Skiing"]).unwrap();
        categories.add(&activities, "Footwear", ["Hiking", "Hiking"]).unwrap();

        assert_eq!(categories.count(), 1);
        assert!(categories.for_activity("Skiing").is_empty());
        assert_eq!(categories.activities_of("Footwear").unwrap(), vec!["Hiking"]);
    }

    #[test]
    fn category_without_links_is_counted() {
        let activities = activities();
        let mut categories = CategoryRegistry::new();
        categories.add(&activities, "Gift cards", Vec::<String>::new()).unwrap();
        assert_eq!(categories.count(), 1);
    }

    #[test]
    fn activities_of_unknown_category_is_not_found() {
        let categories = CategoryRegistry::new();
        let err = categories.activities_of("Helmets").unwrap_err();
        assert_eq!(err, DomainError::not_found(EntityKind::Category, "Helmets"));
    }
}

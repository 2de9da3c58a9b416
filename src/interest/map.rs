use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::article::Category;

/// Per-device engagement counts, keyed by category display name.
///
/// Keys are kept as strings so that entries written for categories this
/// build does not know about survive a read-modify-write.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestMap {
    inner: BTreeMap<String, u64>,
}

impl InterestMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engagement count for `category`, 0 if never seen.
    pub fn affinity(&self, category: Category) -> u64 {
        self.inner.get(category.as_str()).copied().unwrap_or(0)
    }

    pub fn record(&mut self, category: Category) {
        let count = self.inner.entry(category.as_str().to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn set(&mut self, category: Category, count: u64) {
        self.inner.insert(category.as_str().to_string(), count);
    }

    pub fn total(&self) -> u64 {
        self.inner.values().fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.inner.iter()
    }
}

impl FromIterator<(Category, u64)> for InterestMap {
    fn from_iter<I: IntoIterator<Item = (Category, u64)>>(iter: I) -> Self {
        let mut map = InterestMap::new();
        for (category, count) in iter {
            map.set(category, count);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_from_zero() {
        let mut map = InterestMap::new();
        assert_eq!(map.affinity(Category::Sports), 0);

        map.record(Category::Sports);
        map.record(Category::Sports);
        assert_eq!(map.affinity(Category::Sports), 2);
    }

    #[test]
    fn record_saturates() {
        let mut map: InterestMap = [(Category::Satire, u64::MAX)].into_iter().collect();
        map.record(Category::Satire);
        assert_eq!(map.affinity(Category::Satire), u64::MAX);
        assert_eq!(map.total(), u64::MAX);
    }
}

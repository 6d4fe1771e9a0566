use std::collections::HashMap;

use indexmap::IndexMap;

/// A named answer with an optional explanation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerEntry {
    pub name: String,
    /// Empty when the source record had no description.
    pub description: String,
}

impl AnswerEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Answer entries grouped by category.
///
/// Categories keep the order in which they were inserted, which is also the
/// order used when scanning every category. The pool is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct AnswerPool {
    categories: IndexMap<String, Vec<AnswerEntry>>,
    descriptions: HashMap<String, (usize, usize)>,
}

impl AnswerPool {
    pub fn new(categories: IndexMap<String, Vec<AnswerEntry>>) -> Self {
        // First entry in category order wins.
        let mut descriptions = HashMap::new();
        for (category_index, entries) in categories.values().enumerate() {
            for (entry_index, entry) in entries.iter().enumerate() {
                descriptions
                    .entry(entry.name.clone())
                    .or_insert((category_index, entry_index));
            }
        }

        Self {
            categories,
            descriptions,
        }
    }

    /// Entries stored under `category`, or an empty slice for unknown categories.
    pub fn entries_in(&self, category: &str) -> &[AnswerEntry] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every category name, in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Description of the first entry named `name`, or `""` if there is none.
    pub fn describe(&self, name: &str) -> &str {
        self.descriptions
            .get(name)
            .and_then(|&(category, entry)| {
                self.categories
                    .get_index(category)
                    .and_then(|(_, entries)| entries.get(entry))
            })
            .map(|entry| entry.description.as_str())
            .unwrap_or_default()
    }

    /// All entries of all categories, in category order.
    pub fn entries(&self) -> impl Iterator<Item = &AnswerEntry> {
        self.categories.values().flatten()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(String, Vec<AnswerEntry>)> for AnswerPool {
    fn from_iter<T: IntoIterator<Item = (String, Vec<AnswerEntry>)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pool() -> AnswerPool {
        AnswerPool::from_iter([
            (
                "fruit".to_string(),
                vec![
                    AnswerEntry::new("Apple", "A fruit"),
                    AnswerEntry::new("Pear", "Another fruit"),
                ],
            ),
            (
                "veg".to_string(),
                vec![
                    AnswerEntry::new("Carrot", "A root"),
                    AnswerEntry::new("Apple", "Not really a vegetable"),
                ],
            ),
        ])
    }

    #[test]
    fn test_entries_in_known_and_unknown_category() {
        let pool = sample_pool();
        assert_eq!(pool.entries_in("fruit").len(), 2);
        assert!(pool.entries_in("meat").is_empty());
    }

    #[test]
    fn test_categories_keep_insertion_order() {
        let pool = sample_pool();
        assert_eq!(pool.categories().collect::<Vec<_>>(), ["fruit", "veg"]);
        assert_eq!(pool.category_count(), 2);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_describe_uses_first_match() {
        let pool = sample_pool();
        assert_eq!(pool.describe("Apple"), "A fruit");
        assert_eq!(pool.describe("Carrot"), "A root");
        assert_eq!(pool.describe("Banana"), "");
    }

    #[test]
    fn test_empty_pool() {
        let pool = AnswerPool::default();
        assert!(pool.is_empty());
        assert_eq!(pool.categories().count(), 0);
        assert_eq!(pool.describe("anything"), "");
    }
}

//! Identity-keyed in-memory repository.
//!
//! Holds the single mapping from identity to record behind each service. The
//! map is the source of truth for uniqueness: an identity is taken exactly
//! while a record with it is stored.

use super::traits::Record;
use crate::error::{RecordError, RecordResult};
use std::collections::HashMap;

/// In-memory store for one record kind.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R: Record> {
    records: HashMap<String, R>,
}

impl<R: Record> InMemoryRepository<R> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Store a record under its identity.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the identity is taken; the store is untouched.
    pub fn insert(&mut self, record: R) -> RecordResult<()> {
        if self.records.contains_key(record.id()) {
            return Err(RecordError::AlreadyExists {
                field: R::ID_FIELD,
                id: record.id().to_string(),
            });
        }

        self.records.insert(record.id().to_string(), record);
        Ok(())
    }

    /// Remove and return the record with this identity.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such record is stored.
    pub fn remove(&mut self, id: &str) -> RecordResult<R> {
        self.records.remove(id).ok_or_else(|| Self::not_found(id))
    }

    /// Look up a record. Absence is a normal result.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    /// Mutable access for in-place updates.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such record is stored.
    pub fn get_mut(&mut self, id: &str) -> RecordResult<&mut R> {
        self.records.get_mut(id).ok_or_else(|| Self::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All stored records ordered by identity.
    ///
    /// The map itself has no order; sorting here keeps listings stable.
    pub fn sorted(&self) -> Vec<&R> {
        let mut records: Vec<&R> = self.records.values().collect();
        records.sort_by(|a, b| a.id().cmp(b.id()));
        records
    }

    fn not_found(id: &str) -> RecordError {
        RecordError::NotFound {
            field: R::ID_FIELD,
            id: id.to_string(),
        }
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Record for Widget {
        const KIND: &'static str = "widget";
        const ID_FIELD: &'static str = "widget_id";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn widget(id: &str, label: &str) -> Widget {
        Widget {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut repo = InMemoryRepository::new();
        repo.insert(widget("w1", "first")).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("w1"), Some(&widget("w1", "first")));
        assert_eq!(repo.get("w2"), None);
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut repo = InMemoryRepository::new();
        repo.insert(widget("w1", "first")).unwrap();

        let err = repo.insert(widget("w1", "second")).unwrap_err();
        assert_eq!(
            err,
            RecordError::AlreadyExists {
                field: "widget_id",
                id: "w1".to_string()
            }
        );
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("w1").unwrap().label, "first");
    }

    #[test]
    fn test_remove_unknown_is_not_found() {
        let mut repo: InMemoryRepository<Widget> = InMemoryRepository::new();
        let err = repo.remove("nope").unwrap_err();
        assert_eq!(err.to_string(), "widget_id not found: nope");
        assert!(repo.is_empty());
    }

    #[test]
    fn test_remove_frees_identity() {
        let mut repo = InMemoryRepository::new();
        repo.insert(widget("w1", "first")).unwrap();
        let removed = repo.remove("w1").unwrap();
        assert_eq!(removed.label, "first");
        assert!(!repo.contains("w1"));

        repo.insert(widget("w1", "again")).unwrap();
        assert_eq!(repo.get("w1").unwrap().label, "again");
    }

    #[test]
    fn test_get_mut() {
        let mut repo = InMemoryRepository::new();
        repo.insert(widget("w1", "first")).unwrap();
        repo.get_mut("w1").unwrap().label = "changed".to_string();
        assert_eq!(repo.get("w1").unwrap().label, "changed");
        assert!(repo.get_mut("w2").is_err());
    }

    #[test]
    fn test_sorted_orders_by_identity() {
        let mut repo = InMemoryRepository::new();
        for id in ["c", "a", "b"] {
            repo.insert(widget(id, id)).unwrap();
        }
        let ids: Vec<&str> = repo.sorted().into_iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}

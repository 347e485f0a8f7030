//! View-local lists kept in step with mutation responses.
//!
//! A view fetches a list once on activation, then patches its local copy with
//! each successful create or delete instead of re-fetching. Nothing here is
//! shared between views or survives navigation.

use api::{AdminUser, Category, Transaction};

/// Entities with a server-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for AdminUser {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Ordered, id-unique list owned by one view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewList<T> {
    items: Vec<T>,
}

impl<T> Default for ViewList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> ViewList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with the result of a fresh fetch.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Put a newly created item first. An item with the same id is replaced
    /// rather than duplicated, so a late response cannot double an entry.
    pub fn prepend(&mut self, item: T) {
        self.items.retain(|existing| existing.id() != item.id());
        self.items.insert(0, item);
    }

    /// Put a newly created item last, replacing any item with the same id in place.
    pub fn append(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
    }

    /// Drop the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Identified> From<Vec<T>> for ViewList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Where a view is with its current request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: i64, amount: f64) -> Transaction {
        Transaction {
            id,
            date: "2024-06-01T00:00:00".to_string(),
            amount,
            category_id: None,
            category_name: None,
            category: None,
            description: None,
            owner_id: 1,
        }
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            user_id: Some(1),
        }
    }

    fn ids<T: Identified>(list: &ViewList<T>) -> Vec<i64> {
        list.iter().map(Identified::id).collect()
    }

    #[test]
    fn test_created_transaction_appears_once_at_front() {
        let mut ledger = ViewList::from(vec![txn(2, 10.0), txn(1, 5.0)]);

        ledger.prepend(txn(3, -7.0));
        assert_eq!(ids(&ledger), vec![3, 2, 1]);

        // Same response applied twice
        ledger.prepend(txn(3, -7.0));
        assert_eq!(ids(&ledger), vec![3, 2, 1]);
        assert_eq!(ledger.iter().filter(|t| t.id == 3).count(), 1);
    }

    #[test]
    fn test_deleted_transaction_removed_once() {
        let mut ledger = ViewList::from(vec![txn(3, 1.0), txn(2, 2.0), txn(1, 3.0)]);

        assert!(ledger.remove(2));
        assert_eq!(ids(&ledger), vec![3, 1]);

        // Second delete response for the same id is a no-op
        assert!(!ledger.remove(2));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_add_then_delete_roundtrip() {
        let mut ledger = ViewList::new();
        ledger.prepend(txn(7, 99.0));
        assert_eq!(ledger.get(7).map(|t| t.amount), Some(99.0));

        ledger.remove(7);
        assert!(ledger.is_empty());
        assert!(ledger.get(7).is_none());
    }

    #[test]
    fn test_categories_append_in_order() {
        let mut categories = ViewList::new();
        categories.append(category(1, "Income"));
        categories.append(category(2, "Expense"));
        categories.append(category(1, "Salary"));

        assert_eq!(ids(&categories), vec![1, 2]);
        assert_eq!(categories.get(1).map(|c| c.name.as_str()), Some("Salary"));
    }

    #[test]
    fn test_replace_discards_local_edits() {
        let mut categories = ViewList::from(vec![category(1, "Income")]);
        categories.append(category(5, "Local"));

        categories.replace(vec![category(2, "Expense")]);
        assert_eq!(ids(&categories), vec![2]);
    }

    #[test]
    fn test_load_state_default() {
        assert_eq!(LoadState::default(), LoadState::Loading);
    }
}

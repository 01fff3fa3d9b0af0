//! Array-backed transaction store
//!
//! Records are held contiguously in a `Vec`, which gives O(1) amortized
//! appends and lets binary search index the backing storage directly.

use crate::core::algorithms::{self, SearchOutcome};
use crate::core::traits::{SortOutcome, StoreKind, TransactionStore};
use crate::types::{Field, TransactionRecord};

/// Initial capacity of a new store
const INITIAL_CAPACITY: usize = 10;

/// Transaction store backed by a growable array
#[derive(Debug)]
pub struct ArrayTransactionStore {
    records: Vec<TransactionRecord>,
    sorted_by: Option<Field>,
}

impl ArrayTransactionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        ArrayTransactionStore {
            records: Vec::with_capacity(INITIAL_CAPACITY),
            sorted_by: None,
        }
    }

    /// Records in current order
    pub fn as_slice(&self) -> &[TransactionRecord] {
        &self.records
    }
}

impl Default for ArrayTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for ArrayTransactionStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Array
    }

    fn insert(&mut self, record: TransactionRecord) {
        self.records.push(record);
        self.sorted_by = None;
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &TransactionRecord> + '_> {
        Box::new(self.records.iter())
    }

    fn sorted_by(&self) -> Option<Field> {
        self.sorted_by
    }

    fn sort_by_field(&mut self, field: Field) -> SortOutcome {
        let count = self.len();
        self.sorted_by = Some(field);
        if count < 2 {
            return SortOutcome::NothingToSort { count };
        }

        algorithms::merge_sort_by(&mut self.records, |a, b| {
            field.value(a).cmp(field.value(b))
        });

        SortOutcome::Sorted { count }
    }

    fn binary_search(&self, query: &str, field: Field) -> SearchOutcome {
        algorithms::binary_search_by(&self.records, |record| field.value(record).cmp(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::fixtures::record;

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut store = ArrayTransactionStore::new();
        for i in 0..(INITIAL_CAPACITY * 3) {
            store.insert(record(&format!("T{}", i), "deposit", "Tokyo", "False"));
        }

        assert_eq!(store.len(), INITIAL_CAPACITY * 3);
        assert_eq!(store.as_slice()[0].transaction_id, "T0");
        assert_eq!(store.as_slice()[29].transaction_id, "T29");
    }

    #[test]
    fn test_sort_reorders_backing_slice() {
        let mut store = ArrayTransactionStore::new();
        store.insert(record("T1", "withdrawal", "Tokyo", "False"));
        store.insert(record("T2", "deposit", "Berlin", "False"));
        store.insert(record("T3", "payment", "Athens", "False"));

        store.sort_by_field(Field::TransactionType);

        let types: Vec<_> = store
            .as_slice()
            .iter()
            .map(|r| r.transaction_type.as_str())
            .collect();
        assert_eq!(types, vec!["deposit", "payment", "withdrawal"]);
    }
}

//! Core trait for transaction storage
//!
//! This module defines the trait abstraction that allows the linked and the
//! array-backed stores to be used interchangeably, plus the factory that
//! picks an implementation at runtime.

use crate::core::algorithms::SearchOutcome;
use crate::core::{ArrayTransactionStore, LinkedTransactionStore};
use crate::types::{Field, TransactionRecord};
use clap::ValueEnum;
use std::fmt;

/// Available backing structures for a transaction store
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Singly linked nodes held in an index-linked arena
    Linked,
    /// Contiguous growable array
    Array,
}

impl StoreKind {
    pub fn display_name(self) -> &'static str {
        match self {
            StoreKind::Linked => "Linked List",
            StoreKind::Array => "Array",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of a sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Records were reordered by the merge sort
    Sorted { count: usize },
    /// Fewer than two records, nothing to do
    NothingToSort { count: usize },
}

/// Ordered collection of transaction records
///
/// Implementations own their records exclusively. Insertion appends, so
/// iteration yields records in insertion order until a sort is applied.
pub trait TransactionStore {
    /// Which backing structure this store uses
    fn kind(&self) -> StoreKind;

    /// Append a record; duplicates are kept
    fn insert(&mut self, record: TransactionRecord);

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate records in current order
    fn iter(&self) -> Box<dyn Iterator<Item = &TransactionRecord> + '_>;

    /// Field the store was last sorted by, if no insert happened since
    fn sorted_by(&self) -> Option<Field>;

    /// Stable merge sort of all records by the given field
    fn sort_by_field(&mut self, field: Field) -> SortOutcome;

    /// Binary search with duplicate expansion
    ///
    /// The store must already be sorted by `field`; see
    /// [`crate::core::algorithms::binary_search_by`].
    fn binary_search(&self, query: &str, field: Field) -> SearchOutcome;

    /// Count records whose field equals `query` exactly, scanning every record
    fn linear_search(&self, query: &str, field: Field) -> usize {
        self.iter()
            .filter(|&record| field.value(record) == query)
            .count()
    }

    /// Collect records whose field equals `query` exactly, in current order
    fn find_matches(&self, query: &str, field: Field) -> Vec<&TransactionRecord> {
        self.iter()
            .filter(|&record| field.value(record) == query)
            .collect()
    }
}

/// Create an empty store of the requested kind
pub fn create_store(kind: StoreKind) -> Box<dyn TransactionStore> {
    match kind {
        StoreKind::Linked => Box::new(LinkedTransactionStore::new()),
        StoreKind::Array => Box::new(ArrayTransactionStore::new()),
    }
}

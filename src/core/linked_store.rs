//! Singly linked transaction store
//!
//! Nodes live in an arena (`Vec<Node>`) and link to each other by index, so
//! there is no manual allocation or deletion: every node is owned by the
//! arena and dropped with it. The store keeps both a head and a tail link,
//! which makes appending O(1) while keeping insertion order.
//!
//! # Sorting
//!
//! The merge sort runs over the node indices in list order and the list is
//! relinked from the sorted index sequence. Records never move in the arena.
//!
//! # Binary Search
//!
//! A linked list has no random access, so binary search first gathers the
//! records into a contiguous view of references (O(n)) and searches that.

use crate::core::algorithms::{self, SearchOutcome};
use crate::core::traits::{SortOutcome, StoreKind, TransactionStore};
use crate::types::{Field, TransactionRecord};
use std::iter;

#[derive(Debug)]
struct Node {
    record: TransactionRecord,
    next: Option<usize>,
}

/// Transaction store backed by index-linked nodes
#[derive(Debug, Default)]
pub struct LinkedTransactionStore {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
    sorted_by: Option<Field>,
}

impl LinkedTransactionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Node indices in list order
    fn node_ids(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(self.head, move |&id| self.nodes[id].next)
    }

    /// Rebuild the links so the list follows `order`
    fn relink(&mut self, order: &[usize]) {
        for pair in order.windows(2) {
            self.nodes[pair[0]].next = Some(pair[1]);
        }
        if let Some(&last) = order.last() {
            self.nodes[last].next = None;
        }
        self.head = order.first().copied();
        self.tail = order.last().copied();
    }
}

impl TransactionStore for LinkedTransactionStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Linked
    }

    fn insert(&mut self, record: TransactionRecord) {
        let id = self.nodes.len();
        self.nodes.push(Node { record, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.sorted_by = None;
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &TransactionRecord> + '_> {
        Box::new(self.node_ids().map(move |id| &self.nodes[id].record))
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

        let mut order: Vec<usize> = self.node_ids().collect();
        let nodes = &self.nodes;
        algorithms::merge_sort_by(&mut order, |&a, &b| {
            field
                .value(&nodes[a].record)
                .cmp(field.value(&nodes[b].record))
        });
        self.relink(&order);

        SortOutcome::Sorted { count }
    }

    fn binary_search(&self, query: &str, field: Field) -> SearchOutcome {
        if self.is_empty() {
            return SearchOutcome::miss();
        }

        let view: Vec<&TransactionRecord> = self.iter().collect();
        algorithms::binary_search_by(&view, |record| field.value(record).cmp(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::fixtures::record;

    #[test]
    fn test_append_keeps_head_and_tail() {
        let mut store = LinkedTransactionStore::new();
        assert_eq!(store.head, None);
        assert_eq!(store.tail, None);

        store.insert(record("T1", "deposit", "Tokyo", "False"));
        assert_eq!(store.head, Some(0));
        assert_eq!(store.tail, Some(0));

        store.insert(record("T2", "deposit", "Berlin", "False"));
        assert_eq!(store.head, Some(0));
        assert_eq!(store.tail, Some(1));
        assert_eq!(store.nodes[0].next, Some(1));
        assert_eq!(store.nodes[1].next, None);
    }

    #[test]
    fn test_sort_relinks_without_moving_nodes() {
        let mut store = LinkedTransactionStore::new();
        store.insert(record("T1", "deposit", "Tokyo", "False"));
        store.insert(record("T2", "deposit", "Berlin", "False"));
        store.insert(record("T3", "deposit", "London", "False"));

        store.sort_by_field(Field::Location);

        assert_eq!(store.nodes[0].record.transaction_id, "T1");
        assert_eq!(store.head, Some(1));
        assert_eq!(store.tail, Some(0));
        assert_eq!(store.node_ids().collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    #[test]
    fn test_insert_after_sort_appends_to_new_tail() {
        let mut store = LinkedTransactionStore::new();
        store.insert(record("T1", "deposit", "Tokyo", "False"));
        store.insert(record("T2", "deposit", "Berlin", "False"));
        store.sort_by_field(Field::Location);

        store.insert(record("T3", "deposit", "Athens", "False"));

        let ids: Vec<_> = store.iter().map(|r| r.transaction_id.as_str()).collect();
        assert_eq!(ids, vec!["T2", "T1", "T3"]);
    }
}

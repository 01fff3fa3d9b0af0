//! Core business logic module
//!
//! This module contains the transaction store components:
//! - `traits` - The `TransactionStore` abstraction and implementation factory
//! - `algorithms` - Merge sort and binary search shared by every store
//! - `linked_store` - Index-linked node implementation
//! - `array_store` - Contiguous array implementation
//! - `channels` - One store per payment channel

pub mod algorithms;
pub mod array_store;
pub mod channels;
pub mod linked_store;
pub mod traits;

pub use algorithms::SearchOutcome;
pub use array_store::ArrayTransactionStore;
pub use channels::ChannelStores;
pub use linked_store::LinkedTransactionStore;
pub use traits::{create_store, SortOutcome, StoreKind, TransactionStore};

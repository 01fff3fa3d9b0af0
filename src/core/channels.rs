//! Per-channel partitioning of transaction stores
//!
//! `ChannelStores` holds one independent store per payment channel. Routing a
//! record moves it into exactly one store; records with an unrecognized
//! channel are handed back to the caller, which drops them.

use crate::core::traits::{create_store, StoreKind, TransactionStore};
use crate::types::{Channel, TransactionRecord};

/// The four per-channel stores of one import
pub struct ChannelStores {
    kind: StoreKind,
    stores: [Box<dyn TransactionStore>; 4],
}

impl ChannelStores {
    /// Create four empty stores of the given kind
    pub fn new(kind: StoreKind) -> Self {
        ChannelStores {
            kind,
            stores: std::array::from_fn(|_| create_store(kind)),
        }
    }

    fn slot(channel: Channel) -> usize {
        match channel {
            Channel::Ach => 0,
            Channel::Card => 1,
            Channel::Upi => 2,
            Channel::WireTransfer => 3,
        }
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn get(&self, channel: Channel) -> &dyn TransactionStore {
        self.stores[Self::slot(channel)].as_ref()
    }

    pub fn get_mut(&mut self, channel: Channel) -> &mut dyn TransactionStore {
        self.stores[Self::slot(channel)].as_mut()
    }

    /// Move a record into the store of its payment channel
    ///
    /// # Returns
    ///
    /// * `Ok(Channel)` - The channel the record was routed to
    /// * `Err(TransactionRecord)` - The record, when its channel is not recognized
    pub fn route(&mut self, record: TransactionRecord) -> Result<Channel, TransactionRecord> {
        match record.channel() {
            Some(channel) => {
                self.get_mut(channel).insert(record);
                Ok(channel)
            }
            None => Err(record),
        }
    }

    /// Record count of every channel, in menu order
    pub fn counts(&self) -> [(Channel, usize); 4] {
        Channel::ALL.map(|channel| (channel, self.get(channel).len()))
    }

    /// Total records across all channels
    pub fn total(&self) -> usize {
        self.stores.iter().map(|store| store.len()).sum()
    }
}

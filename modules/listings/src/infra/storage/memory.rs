//! In-memory repository implementation
//!
//! The backing store is a BTreeMap behind a parking_lot RwLock, so
//! `get_all` comes back in id order. Ids are assigned from a monotonically
//! increasing counter and never reused.

use crate::contract::{Listing, ListingDraft};
use crate::domain::repository::ListingRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct InMemoryListingRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    listings: BTreeMap<i64, Listing>,
    next_id: i64,
}

impl Store {
    fn insert(&mut self, draft: ListingDraft) -> Listing {
        self.next_id += 1;
        let listing = Listing {
            id: self.next_id,
            attributes: draft.into_attributes(),
        };
        self.listings.insert(listing.id, listing.clone());
        listing
    }
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with demo data. Seeded listings get sequential
    /// ids starting at 1.
    pub fn with_seed(seed: impl IntoIterator<Item = ListingDraft>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.inner.write();
            for draft in seed {
                store.insert(draft);
            }
        }
        repo
    }

    /// Number of stored listings
    pub fn len(&self) -> usize {
        self.inner.read().listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().listings.is_empty()
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn get_all(&self) -> Result<Vec<Listing>> {
        Ok(self.inner.read().listings.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Listing>> {
        Ok(self.inner.read().listings.get(&id).cloned())
    }

    async fn create(&self, draft: ListingDraft) -> Result<Listing> {
        Ok(self.inner.write().insert(draft))
    }

    async fn update(&self, id: i64, draft: ListingDraft) -> Result<Option<Listing>> {
        let mut store = self.inner.write();
        match store.listings.get_mut(&id) {
            Some(listing) => {
                listing.attributes = draft.into_attributes();
                Ok(Some(listing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.inner.write().listings.remove(&id).is_some())
    }
}

//! Repository trait for listing persistence
//!
//! This trait defines the interface for data access operations.
//! Implementations are in infra/storage.

use crate::contract::{Listing, ListingDraft};
use anyhow::Result;
use async_trait::async_trait;

/// Storage abstraction for listings
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// All listings in id order
    async fn get_all(&self) -> Result<Vec<Listing>>;

    /// Find a listing by id
    async fn get_by_id(&self, id: i64) -> Result<Option<Listing>>;

    /// Persist a new listing, assigning its id
    async fn create(&self, draft: ListingDraft) -> Result<Listing>;

    /// Replace an existing listing's attributes, `None` if absent
    async fn update(&self, id: i64, draft: ListingDraft) -> Result<Option<Listing>>;

    /// Delete a listing, `false` if absent
    async fn delete(&self, id: i64) -> Result<bool>;
}

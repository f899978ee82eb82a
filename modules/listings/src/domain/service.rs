//! Domain service - flag checks and repository orchestration

use super::delay;
use super::repository::ListingRepository;
use crate::config::FlagSource;
use crate::contract::{Listing, ListingDraft, ListingsError};
use std::sync::Arc;

/// Domain service for listings
pub struct Service {
    repo: Arc<dyn ListingRepository>,
    flags: Arc<dyn FlagSource>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn ListingRepository>, flags: Arc<dyn FlagSource>) -> Self {
        Self { repo, flags }
    }

    /// All listings
    pub async fn list_listings(&self) -> Result<Vec<Listing>, ListingsError> {
        self.repo.get_all().await.map_err(internal)
    }

    /// Get a single listing. With the `errors` flag set, the synthetic
    /// slow path runs first to simulate a degraded backend.
    pub async fn get_listing(&self, id: i64) -> Result<Listing, ListingsError> {
        if self.flags.snapshot().errors {
            tracing::warn!(id, "errors flag set, injecting synthetic delay");
            delay::inject_synthetic_delay().await;
        }

        self.repo
            .get_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(ListingsError::NotFound { id })
    }

    /// Create a listing; the repository assigns the id.
    pub async fn create_listing(&self, draft: ListingDraft) -> Result<Listing, ListingsError> {
        self.ensure_crud_enabled()?;
        self.repo.create(draft).await.map_err(internal)
    }

    /// Replace a listing's attributes.
    pub async fn update_listing(
        &self,
        id: i64,
        draft: ListingDraft,
    ) -> Result<Listing, ListingsError> {
        self.ensure_crud_enabled()?;
        self.repo
            .update(id, draft)
            .await
            .map_err(internal)?
            .ok_or(ListingsError::NotFound { id })
    }

    /// Delete a listing.
    pub async fn delete_listing(&self, id: i64) -> Result<(), ListingsError> {
        self.ensure_crud_enabled()?;
        let deleted = self.repo.delete(id).await.map_err(internal)?;
        if deleted {
            Ok(())
        } else {
            Err(ListingsError::NotFound { id })
        }
    }

    /// Reject writes when the `enable_crud` flag is off. The flag is
    /// checked before touching the repository so state stays unchanged.
    fn ensure_crud_enabled(&self) -> Result<(), ListingsError> {
        if !self.flags.snapshot().enable_crud {
            tracing::warn!("write operation rejected, enable_crud is off");
            return Err(ListingsError::CrudDisabled);
        }
        Ok(())
    }
}

fn internal(error: anyhow::Error) -> ListingsError {
    tracing::error!(%error, "repository failure");
    ListingsError::Internal
}

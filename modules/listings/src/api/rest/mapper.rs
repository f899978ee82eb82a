//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Listing> for ListingDto {
    fn from(listing: contract::Listing) -> Self {
        Self {
            id: listing.id,
            attributes: listing.attributes,
        }
    }
}

impl From<ListingPayload> for contract::ListingDraft {
    fn from(payload: ListingPayload) -> Self {
        contract::ListingDraft::new(payload.attributes)
    }
}

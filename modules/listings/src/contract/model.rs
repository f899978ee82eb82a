//! Contract models for the listings service

use serde_json::{Map, Value};

/// A listing as owned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Repository-assigned identifier
    pub id: i64,
    /// Arbitrary listing attributes (name, description, ...)
    pub attributes: Map<String, Value>,
}

/// Incoming listing payload, before the repository assigns an id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingDraft {
    attributes: Map<String, Value>,
}

impl ListingDraft {
    /// Build a draft from raw attributes. A client-supplied `id` attribute
    /// is discarded: identifiers are assigned by the repository only.
    pub fn new(mut attributes: Map<String, Value>) -> Self {
        attributes.remove("id");
        Self { attributes }
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }
}

//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Listing response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    /// Repository-assigned identifier
    #[schema(example = 1)]
    pub id: i64,

    /// Arbitrary listing attributes, flattened into the object
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

/// Create/update listing request
///
/// Attributes are free-form; a client-supplied `id` is ignored because
/// identifiers are assigned by the repository.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ListingPayload {
    /// Listing attributes (name, description, ...)
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

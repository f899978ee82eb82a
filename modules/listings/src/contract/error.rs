//! Contract error types for the listings service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! response codes at the boundary.

/// Listings service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingsError {
    /// No listing with the requested id
    NotFound {
        /// Requested listing id
        id: i64,
    },
    /// Write operations are disabled by configuration
    CrudDisabled,
    /// Internal error
    Internal,
}

impl std::fmt::Display for ListingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => {
                write!(f, "listing not found: {}", id)
            }
            Self::CrudDisabled => {
                write!(f, "CRUD operations are currently disabled")
            }
            Self::Internal => {
                write!(f, "internal error")
            }
        }
    }
}

impl std::error::Error for ListingsError {}

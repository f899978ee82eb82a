//! Listings Service Module
//!
//! HTTP CRUD for the listing resource, delegating to a repository
//! abstraction. Two request-time flags alter behavior: `ERRORS` injects a
//! synthetic slow path on single-listing reads, `ENABLE_CRUD` gates the
//! write endpoints.

// Public exports
pub mod contract;
pub use contract::{error::ListingsError, Listing, ListingDraft};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

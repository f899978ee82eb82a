//! Route registration for the listings REST API

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the `/api/listings` router
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/api/listings/", get(handlers::list_listings))
        .route("/api/listings/", post(handlers::create_listing))
        .route("/api/listings/{id}", get(handlers::get_listing))
        .route("/api/listings/{id}", put(handlers::update_listing))
        .route("/api/listings/{id}", delete(handlers::delete_listing))
        // Add service as extension for handlers
        .layer(Extension(service))
}

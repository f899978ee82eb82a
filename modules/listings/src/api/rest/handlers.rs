//! HTTP request handlers - thin layer that delegates to the domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{
    extract::Path,
    http::{header, HeaderName, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

/// List all listings
pub async fn list_listings(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<ListingDto>>, Problem> {
    let listings = service.list_listings().await.map_err(map_domain_error)?;

    Ok(Json(listings.into_iter().map(Into::into).collect()))
}

/// Get a listing by id
pub async fn get_listing(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<ListingDto>, Problem> {
    let listing = service.get_listing(id).await.map_err(map_domain_error)?;

    Ok(Json(listing.into()))
}

/// Create a listing
pub async fn create_listing(
    Extension(service): Extension<Arc<Service>>,
    Json(payload): Json<ListingPayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ListingDto>), Problem> {
    let listing = service
        .create_listing(payload.into())
        .await
        .map_err(map_domain_error)?;

    let location = format!("/api/listings/{}", listing.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(listing.into()),
    ))
}

/// Update an existing listing
pub async fn update_listing(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(payload): Json<ListingPayload>,
) -> Result<Json<ListingDto>, Problem> {
    let listing = service
        .update_listing(id, payload.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(listing.into()))
}

/// Delete a listing
pub async fn delete_listing(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    service.delete_listing(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

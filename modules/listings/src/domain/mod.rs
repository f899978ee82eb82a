//! Domain layer - business logic and services

pub mod delay;
pub mod repository;
pub mod service;

pub use repository::ListingRepository;
pub use service::Service;

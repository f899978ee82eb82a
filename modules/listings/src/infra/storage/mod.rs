//! Storage layer - repository implementations

pub mod memory;

pub use memory::InMemoryListingRepository;

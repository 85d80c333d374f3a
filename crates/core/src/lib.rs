//! Pigeonhole Core Library
//!
//! Models, directory registry, message store, and seed loading for the
//! Pigeonhole demo messenger.

pub mod error;
pub mod invariants;
pub mod models;
pub mod registry;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
pub use models::*;
pub use registry::DirectoryRegistry;
pub use seed::{Seed, SeedContact};
pub use store::MessageStore;

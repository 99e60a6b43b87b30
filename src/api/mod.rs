//! HTTP client for the store's read-only API.

pub mod client;
pub mod error;
pub mod models;

pub use client::StoreClient;
pub use error::{ApiError, Result};
pub use models::{KeyPage, StoreStats, ValueRecord};

//! Storage Layer
//!
//! Bounded in-memory repository for sample history and fired alerts,
//! keyed by city. Results are never persisted durably.

mod repository;

pub use repository::{AlertRecord, Repository, SampleRecord};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Lock error: {0}")]
    Lock(String),
}

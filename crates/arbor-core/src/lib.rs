//! arbor-core: shared foundation for arbor.
//!
//! Contains:
//! - ids (compact node ids for the tree arena)
//! - record (the flat `{id, parent}` input fact)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod record;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ArborError, ArborResult};
pub use ids::*;
pub use record::Record;

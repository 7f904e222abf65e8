//! cn-core: stable foundation for charnet.
//!
//! Contains:
//! - ids (compact vertex identifiers)
//! - error (shared error taxonomy)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CnError, CnResult};
pub use ids::*;

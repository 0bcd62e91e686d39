//! Certificate models
//!
//! Re-exports models from the shared crate so handlers have one import path

pub use shared::models::*;
pub use shared::types::{Grid, SetupValidation};

//! Shared types and pipelines for the Certificate Hub
//!
//! This crate holds the certificate schema together with the two pure
//! pipelines built on it: generating records from a template and a recipient
//! list, and mapping a spreadsheet feed into records. It performs no I/O and
//! is used by the backend, the batch generator, and the browser (via WASM).

pub mod dates;
pub mod error;
pub mod feed;
pub mod generator;
pub mod identifiers;
pub mod models;
pub mod search;
pub mod types;
pub mod validation;

pub use error::*;
pub use feed::{
    certificate_ids, find_certificate, map_feed, parse_is_verified, parse_skills, validate_feed,
    Column, FeedRow, HeaderIndex,
};
pub use generator::{
    create_certificate, generate_certificates, generate_certificates_excluding,
    generate_certificates_with,
};
pub use models::*;
pub use search::search_certificates;
pub use types::*;
pub use validation::*;

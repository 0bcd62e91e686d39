//! Business logic services for the Certificate Hub

pub mod certificates;
pub mod export;
pub mod generation;

pub use certificates::CertificateService;
pub use export::{export_csv, export_json, write_batch, BatchArtifacts};
pub use generation::GenerationService;

//! Domain models for certificate hosting

mod certificate;
mod recipient;
mod template;

pub use certificate::*;
pub use recipient::*;
pub use template::*;

//! HTTP request handlers

pub mod certificates;
pub mod generation;
pub mod health;
pub mod setup;

pub use certificates::*;
pub use generation::*;
pub use health::*;
pub use setup::*;

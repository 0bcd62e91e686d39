//! External API integrations

pub mod cache;
pub mod sheets;

use async_trait::async_trait;
use shared::Grid;

use crate::error::AppResult;

pub use cache::CachedFeed;
pub use sheets::SheetsClient;

/// Read access to the remote certificate spreadsheet.
///
/// An empty grid means the sheet exists but holds no values; transport and
/// credential failures are `AppError::FeedUnavailable`.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_grid(&self) -> AppResult<Grid>;
}

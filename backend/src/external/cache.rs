//! Time-bounded cache in front of a feed source
//!
//! Only successful reads are stored; a failed read is returned to the caller
//! and the next request tries the source again.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use shared::Grid;
use tokio::sync::Mutex;

use super::FeedSource;
use crate::error::AppResult;

struct CachedGrid {
    fetched_at: Instant,
    grid: Grid,
}

/// Reuses the last successful grid for `ttl`
pub struct CachedFeed<F> {
    inner: F,
    ttl: Duration,
    cached: Mutex<Option<CachedGrid>>,
}

impl<F: FeedSource> CachedFeed<F> {
    pub fn new(inner: F, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: Mutex::new(None),
        }
    }

    /// Drop the stored grid so the next read goes to the source
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }
}

#[async_trait]
impl<F: FeedSource> FeedSource for CachedFeed<F> {
    async fn fetch_grid(&self) -> AppResult<Grid> {
        // Held across the fetch so concurrent misses share one remote read
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                tracing::debug!("Serving certificate feed from cache");
                return Ok(entry.grid.clone());
            }
        }

        let grid = self.inner.fetch_grid().await?;
        *cached = Some(CachedGrid {
            fetched_at: Instant::now(),
            grid: grid.clone(),
        });
        Ok(grid)
    }
}

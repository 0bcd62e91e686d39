//! Certificate service for reading certificates from the spreadsheet feed

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use shared::{
    certificate_ids, find_certificate, map_feed, search_certificates, CertificateRecord,
    FeedValidationError, SetupValidation,
};

use crate::error::AppResult;
use crate::external::FeedSource;

/// Read-only access to the certificates held in the feed
#[derive(Clone)]
pub struct CertificateService {
    feed: Arc<dyn FeedSource>,
}

impl CertificateService {
    pub fn new(feed: Arc<dyn FeedSource>) -> Self {
        Self { feed }
    }

    /// All certificates in feed order.
    ///
    /// A feed without data rows lists as empty; a feed missing required
    /// columns is an error.
    pub async fn list_certificates(&self) -> AppResult<Vec<CertificateRecord>> {
        let grid = self.feed.fetch_grid().await?;
        match map_feed(&grid, Utc::now()) {
            Ok(records) => Ok(records),
            Err(FeedValidationError::Empty) => Ok(Vec::new()),
            Err(err) => {
                tracing::warn!("Certificate feed rejected: {}", err);
                Err(err.into())
            }
        }
    }

    /// Certificates matching `term` by recipient name, course name or id
    pub async fn search_certificates(&self, term: &str) -> AppResult<Vec<CertificateRecord>> {
        let records = self.list_certificates().await?;
        Ok(search_certificates(records, term))
    }

    /// Certificate with exactly this id, `None` when absent
    pub async fn get_certificate(&self, id: &str) -> AppResult<Option<CertificateRecord>> {
        let grid = self.feed.fetch_grid().await?;
        match find_certificate(&grid, id, Utc::now()) {
            Ok(found) => Ok(found),
            Err(FeedValidationError::Empty) => Ok(None),
            Err(err) => {
                tracing::warn!("Certificate feed rejected: {}", err);
                Err(err.into())
            }
        }
    }

    /// Ids already present in the feed
    pub async fn known_ids(&self) -> AppResult<HashSet<String>> {
        let grid = self.feed.fetch_grid().await?;
        match certificate_ids(&grid) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(FeedValidationError::Empty) => Ok(HashSet::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Check that the feed is reachable, has data and carries the required
    /// columns. Failures are reported in the result rather than raised.
    pub async fn validate_setup(&self) -> SetupValidation {
        let grid = match self.feed.fetch_grid().await {
            Ok(grid) => grid,
            Err(err) => {
                tracing::warn!("Setup check could not read feed: {}", err);
                return SetupValidation::invalid(err.to_string(), Vec::new());
            }
        };

        match map_feed(&grid, Utc::now()) {
            Ok(records) => {
                tracing::info!("Setup check passed with {} certificates", records.len());
                SetupValidation::valid(records)
            }
            Err(err) => {
                tracing::warn!("Setup check failed: {}", err);
                SetupValidation::invalid(err.to_string(), err.missing_columns())
            }
        }
    }
}

//! Shared fixtures for backend integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use certificate_hub::{external::FeedSource, AppError, AppResult};
use shared::Grid;

pub const HEADERS: [&str; 13] = [
    "Certificate ID",
    "Recipient Name",
    "Recipient Email",
    "Course Name",
    "Issuer Name",
    "Issue Date",
    "Completion Date",
    "Duration",
    "Grade",
    "Skills",
    "Instructor Name",
    "Verification Code",
    "Is Verified",
];

/// In-memory feed that counts reads and can be switched to failing
#[derive(Clone)]
pub struct FakeFeed {
    grid: Arc<Mutex<Option<Grid>>>,
    fetches: Arc<AtomicUsize>,
}

impl FakeFeed {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid: Arc::new(Mutex::new(Some(grid))),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            grid: Arc::new(Mutex::new(None)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_grid(&self, grid: Option<Grid>) {
        *self.grid.lock().unwrap() = grid;
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for FakeFeed {
    async fn fetch_grid(&self) -> AppResult<Grid> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.grid
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::FeedUnavailable("sheet offline".to_string()))
    }
}

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Header row plus two certificates
pub fn sample_grid() -> Grid {
    vec![
        row(&HEADERS),
        row(&[
            "CERT-1",
            "Jane Doe",
            "jane@example.com",
            "Rust Basics",
            "Academy",
            "January 5, 2024",
            "January 10, 2024",
            "4 weeks",
            "A",
            "Ownership, Lifetimes",
            "Dr. Smith",
            "VER-AAAAAAAAA",
            "TRUE",
        ]),
        row(&[
            "CERT-2",
            "John Roe",
            "john@example.com",
            "Async Rust",
            "Academy",
            "February 1, 2024",
            "February 6, 2024",
            "",
            "Pass",
            "",
            "",
            "VER-BBBBBBBBB",
            "false",
        ]),
    ]
}

//! Error types for pagination rendering

use thiserror::Error;

/// Boxed error produced by caller-supplied row renderers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PaginationError {
    /// The requested page lies outside `1..=total_pages`.
    #[error("Unknown page selected: page {page} of {total_pages} total pages")]
    InvalidPage { page: usize, total_pages: usize },

    /// A row renderer failed; the page is discarded as a whole.
    #[error("Failed to render row {index}: {source}")]
    RowRender {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PaginationError {
    /// Total page count carried by an [`PaginationError::InvalidPage`] error.
    pub fn total_pages(&self) -> Option<usize> {
        match self {
            PaginationError::InvalidPage { total_pages, .. } => Some(*total_pages),
            _ => None,
        }
    }
}

pub type PaginationResult<T> = Result<T, PaginationError>;

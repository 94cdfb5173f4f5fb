//! Fixed-width, styled pagination of item lists.
//!
//! Build a [`Pagination`] once, then render any page of any collection:
//!
//! ```
//! use paginator::{CommandTemplate, Pagination, infallible};
//! use ratatui::text::Line;
//!
//! let pagination: Pagination<&str> = paginator::builder()
//!     .width(20)
//!     .results_per_page(2)
//!     .build(
//!         "Results",
//!         infallible(|item: &&str, _| vec![Line::from(item.to_string())]),
//!         CommandTemplate::new("/results {page}"),
//!     )
//!     .unwrap();
//!
//! let page = pagination.render(&["a", "b", "c"], 1).unwrap();
//! assert_eq!(page.plain_text()[0], "---Results (1/2)----");
//! assert_eq!(page.footer().unwrap().links[0].command, "/results 2");
//! ```

pub mod config;
pub mod error;
pub mod pagination;

pub use error::{BoxError, PaginationError, PaginationResult};
pub use pagination::*;

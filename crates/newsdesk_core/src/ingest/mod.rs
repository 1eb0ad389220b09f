//! CSV ingestion boundary.
//!
//! # Responsibility
//! - Prepare raw source files and merge them into one labeled file.
//! - Load the merged file into an [`ArticleList`](crate::list::article_list::ArticleList).
//! - Export the list after sorting.

pub mod clean;
pub mod csv;

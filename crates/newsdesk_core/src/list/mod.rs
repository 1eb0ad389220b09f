//! Sequence container for ingested articles.
//!
//! # Responsibility
//! - Own article nodes and their forward links.
//! - Expose positional and traversal APIs to ingestion and reporting.
//!
//! # Invariants
//! - Only the sorter relinks nodes, and only through head replacement.

pub mod article_list;

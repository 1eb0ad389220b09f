//! Read-only reporting over the article list.
//!
//! # Responsibility
//! - Derive label, political and word statistics for console reporting.
//!
//! # Invariants
//! - Reporting only borrows the list immutably.

pub mod stats;
pub mod words;

//! Date ordering for the article list.
//!
//! # Responsibility
//! - Reorder list nodes by date key without copying records.
//!
//! # Invariants
//! - Sorting is stable and never changes the list length.
//! - A rejected sort leaves the list untouched.

pub mod run_sort;

//! Article domain model.
//!
//! # Responsibility
//! - Define the record shape shared by ingestion, sorting and reporting.
//! - Derive comparable date keys from raw date text.
//!
//! # Invariants
//! - Records are immutable once ingested.
//! - Date keys are derived on demand and never stored on the record.

pub mod date_key;
pub mod record;

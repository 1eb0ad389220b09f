//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate ingestion, sorting and reporting for callers such as the CLI.

pub mod desk_service;

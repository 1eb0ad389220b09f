//! Search APIs over ingested articles.

pub mod keyword;

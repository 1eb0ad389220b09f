//! Core library for the news desk tool.
//! Owns the article list, the stable date sort and the reporting helpers
//! built on top of them.

pub mod analysis;
pub mod ingest;
pub mod list;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod sort;

pub use analysis::stats::{
    count_labels, political_fake_by_month, political_fake_percentage, render_month_histogram,
    LabelCounts, MonthShare, MonthlyBreakdown,
};
pub use analysis::words::{top_words, WordCount, WordFrequency};
pub use ingest::clean::{merge_labeled_sources, remove_empty_rows};
pub use ingest::csv::{
    import_articles, import_csv_file, parse_article_row, split_csv_fields, write_sorted_csv,
    ImportStats, IngestError, IngestResult, MERGED_HEADER, SORTED_HEADER,
};
pub use list::article_list::{ArticleList, Iter, ListError, ListResult};
pub use logging::{default_log_level, init_logging, init_logging_with, logging_status, LogConfig};
pub use model::date_key::{
    extract_date_key, month_abbreviation, DateKey, DateParseError, DateParseReason,
};
pub use model::record::{Article, Label};
pub use search::keyword::{search_articles, KeywordQuery, DEFAULT_SEARCH_LIMIT};
pub use service::desk_service::{DeskError, DeskService};
pub use sort::run_sort::{
    sort_by_date, RunSorter, SortConfig, SortError, SortResult, SortStats, DEFAULT_RUN_SIZE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! News desk use-case service.
//!
//! # Responsibility
//! - Own the article list for one ingest → sort → report session.
//! - Delegate to ingestion, sorter and reporting modules.
//!
//! # Invariants
//! - Ingestion appends only; sorting relinks only; reporting only reads.
//! - A failed sort leaves the list in its pre-sort order.

use crate::analysis::stats::{
    count_labels, political_fake_by_month, political_fake_percentage, LabelCounts,
    MonthlyBreakdown,
};
use crate::analysis::words::{top_words, WordCount};
use crate::ingest::csv::{
    import_articles, import_csv_file, write_sorted_csv, ImportStats, IngestError,
};
use crate::list::article_list::ArticleList;
use crate::model::record::Article;
use crate::search::keyword::{search_articles, KeywordQuery};
use crate::sort::run_sort::{RunSorter, SortConfig, SortError, SortResult, SortStats};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::path::Path;

/// Service error wrapping the failing stage.
#[derive(Debug)]
pub enum DeskError {
    Ingest(IngestError),
    Sort(SortError),
}

impl Display for DeskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ingest(err) => write!(f, "ingest failed: {err}"),
            Self::Sort(err) => write!(f, "sort failed: {err}"),
        }
    }
}

impl Error for DeskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ingest(err) => Some(err),
            Self::Sort(err) => Some(err),
        }
    }
}

impl From<IngestError> for DeskError {
    fn from(value: IngestError) -> Self {
        Self::Ingest(value)
    }
}

impl From<SortError> for DeskError {
    fn from(value: SortError) -> Self {
        Self::Sort(value)
    }
}

/// Session facade over one article list.
pub struct DeskService {
    articles: ArticleList,
    sorter: RunSorter,
}

impl DeskService {
    /// Creates an empty session.
    ///
    /// # Errors
    /// - `InvalidRunSize` when `config.run_size == 0`.
    pub fn new(config: SortConfig) -> SortResult<Self> {
        Ok(Self {
            articles: ArticleList::new(),
            sorter: RunSorter::new(config)?,
        })
    }

    /// Appends every well-formed row of a merged CSV file.
    pub fn import_csv_file(&mut self, path: impl AsRef<Path>) -> Result<ImportStats, DeskError> {
        Ok(import_csv_file(path, &mut self.articles)?)
    }

    /// Appends every well-formed row of merged CSV text.
    pub fn import_reader<R: BufRead>(&mut self, reader: R) -> Result<ImportStats, DeskError> {
        Ok(import_articles(reader, &mut self.articles)?)
    }

    pub fn push_article(&mut self, article: Article) {
        self.articles.push_back(article);
    }

    /// Stable-sorts the session list by date.
    pub fn sort_by_date(&mut self) -> Result<SortStats, DeskError> {
        Ok(self.sorter.sort_list(&mut self.articles)?)
    }

    pub fn articles(&self) -> &ArticleList {
        &self.articles
    }

    pub fn label_counts(&self) -> LabelCounts {
        count_labels(&self.articles)
    }

    pub fn political_fake_percentage(&self, year: i32) -> f64 {
        political_fake_percentage(&self.articles, year)
    }

    pub fn political_fake_by_month(&self, year: i32) -> MonthlyBreakdown {
        political_fake_by_month(&self.articles, year)
    }

    pub fn top_words(&self, category_fragment: &str, label: &str, n: usize) -> Vec<WordCount> {
        top_words(&self.articles, category_fragment, label, n)
    }

    pub fn search(&self, query: &KeywordQuery) -> Vec<&Article> {
        search_articles(&self.articles, query)
    }

    /// Writes the list in its current order as the sorted CSV export.
    pub fn export_sorted<W: Write>(&self, writer: W) -> Result<(), DeskError> {
        Ok(write_sorted_csv(&self.articles, writer)?)
    }
}

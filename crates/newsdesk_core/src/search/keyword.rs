//! Linear keyword search.
//!
//! # Responsibility
//! - Filter articles by content keyword, category and year.
//!
//! # Invariants
//! - Results follow list order; callers sort first for date-ordered hits.
//! - Empty criteria match every article.

use crate::list::article_list::ArticleList;
use crate::model::record::Article;

/// Default number of hits returned by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 3;

/// Search criteria; blank fields are ignored.
#[derive(Debug, Clone)]
pub struct KeywordQuery {
    /// Case-insensitive substring of article content.
    pub keyword: String,
    /// Case-insensitive exact category.
    pub category: String,
    /// Substring of the raw date text, e.g. `2016` or `-16`.
    pub year: String,
    pub limit: usize,
}

impl Default for KeywordQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            category: String::new(),
            year: String::new(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl KeywordQuery {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Returns up to `query.limit` articles matching every non-blank criterion.
pub fn search_articles<'a>(list: &'a ArticleList, query: &KeywordQuery) -> Vec<&'a Article> {
    let keyword = query.keyword.trim().to_lowercase();
    let category = query.category.trim().to_lowercase();
    let year = query.year.trim();

    list.iter()
        .filter(|article| {
            (keyword.is_empty() || article.content.to_lowercase().contains(&keyword))
                && (category.is_empty() || article.category.to_lowercase() == category)
                && (year.is_empty() || article.date.contains(year))
        })
        .take(query.limit)
        .collect()
}

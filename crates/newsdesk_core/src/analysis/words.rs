//! Word frequency over article content.

use crate::list::article_list::ArticleList;
use crate::model::record::Article;
use serde::Serialize;
use std::collections::HashMap;

/// One word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Frequency table that remembers first-appearance order.
#[derive(Debug, Default)]
pub struct WordFrequency {
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every word of `text`.
    ///
    /// Words are whitespace separated, stripped of leading and trailing ASCII
    /// punctuation and lowercased. Tokens that are pure punctuation are ignored.
    pub fn add_text(&mut self, text: &str) {
        for token in text.split_whitespace() {
            let word = token.trim_matches(|ch: char| ch.is_ascii_punctuation());
            if word.is_empty() {
                continue;
            }
            self.add_word(&word.to_lowercase());
        }
    }

    pub fn add_word(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most frequent words first; equal counts keep first-appearance order.
    pub fn top(mut self, n: usize) -> Vec<WordCount> {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.entries.truncate(n);
        self.entries
    }
}

/// Top `n` content words across articles whose category contains
/// `category_fragment` and whose label equals `label` (both case-insensitive).
pub fn top_words(
    list: &ArticleList,
    category_fragment: &str,
    label: &str,
    n: usize,
) -> Vec<WordCount> {
    let fragment = category_fragment.to_lowercase();
    let label = label.trim().to_lowercase();
    let matches = |article: &&Article| {
        article.category.to_lowercase().contains(&fragment)
            && article.label.trim().to_lowercase() == label
    };

    let mut frequency = WordFrequency::new();
    for article in list.iter().filter(matches) {
        frequency.add_text(&article.content);
    }
    frequency.top(n)
}

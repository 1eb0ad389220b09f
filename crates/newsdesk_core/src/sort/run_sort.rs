//! Run-based stable date sort over the article list.
//!
//! # Responsibility
//! - Order an [`ArticleList`] by date key by relinking nodes only.
//! - Reject the whole sort before any relinking when a date is malformed.
//!
//! # Invariants
//! - No node is created, dropped or duplicated; `len` is unchanged.
//! - Equal keys keep arrival order (insertion and merge both favour the
//!   earlier node).
//! - Bookkeeping is one key per node plus one head per run.
//!
//! Phases: validate keys, cut the chain into runs of at most `run_size`
//! nodes, insertion-sort each run, then merge adjacent run pairs round by
//! round until one chain remains.

use crate::list::article_list::{ArticleList, ListError, NodeId};
use crate::model::date_key::{extract_date_key, DateKey, DateParseError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default maximum number of nodes per insertion-sorted run.
pub const DEFAULT_RUN_SIZE: usize = 32;

pub type SortResult<T> = Result<T, SortError>;

/// Tunables for [`RunSorter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Maximum run length; must be at least 1.
    pub run_size: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            run_size: DEFAULT_RUN_SIZE,
        }
    }
}

/// Sort failure. The list is left in its pre-sort order for every variant
/// except `Chain`, which signals an internal relinking defect.
#[derive(Debug)]
pub enum SortError {
    InvalidRunSize(usize),
    /// Article at chain `position` carries an unparseable date.
    DateParse {
        position: usize,
        source: DateParseError,
    },
    Chain(ListError),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRunSize(size) => write!(f, "run size must be at least 1, got {size}"),
            Self::DateParse { position, source } => {
                write!(f, "article at position {position}: {source}")
            }
            Self::Chain(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRunSize(_) => None,
            Self::DateParse { source, .. } => Some(source),
            Self::Chain(err) => Some(err),
        }
    }
}

impl From<ListError> for SortError {
    fn from(value: ListError) -> Self {
        Self::Chain(value)
    }
}

/// Summary of one completed sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortStats {
    pub nodes: usize,
    pub runs: usize,
    pub merge_rounds: usize,
}

/// Stable hybrid insertion/merge sorter keyed by article date.
#[derive(Debug, Clone)]
pub struct RunSorter {
    run_size: usize,
}

impl Default for RunSorter {
    fn default() -> Self {
        Self {
            run_size: DEFAULT_RUN_SIZE,
        }
    }
}

impl RunSorter {
    /// Creates a sorter from validated configuration.
    ///
    /// # Errors
    /// - `InvalidRunSize` when `config.run_size == 0`.
    pub fn new(config: SortConfig) -> SortResult<Self> {
        if config.run_size == 0 {
            return Err(SortError::InvalidRunSize(config.run_size));
        }
        Ok(Self {
            run_size: config.run_size,
        })
    }

    pub fn run_size(&self) -> usize {
        self.run_size
    }

    /// Sorts `list` ascending by date key, keeping equal keys in arrival order.
    ///
    /// Every date is parsed before any link moves, so a malformed date leaves
    /// the list exactly as it was.
    ///
    /// # Errors
    /// - `DateParse` for the first article (by position) with a bad date.
    /// - `Chain` if the relinked chain fails head replacement checks.
    pub fn sort_list(&self, list: &mut ArticleList) -> SortResult<SortStats> {
        let nodes = list.len();
        let Some(head) = list.head_id().filter(|_| nodes > 1) else {
            return Ok(SortStats {
                nodes,
                runs: nodes,
                merge_rounds: 0,
            });
        };

        let keys = KeyCache::build(list).inspect_err(|err| {
            warn!("event=sort_rejected module=sort status=error nodes={nodes} reason=\"{err}\"");
        })?;

        let mut run_heads = self.build_runs(list, head, &keys);
        let runs = run_heads.len();
        let merge_rounds = merge_rounds(list, &mut run_heads, &keys);

        list.replace_head(run_heads.first().copied())?;

        debug!(
            "event=sort_done module=sort status=ok nodes={} runs={} merge_rounds={} run_size={}",
            nodes, runs, merge_rounds, self.run_size
        );
        Ok(SortStats {
            nodes,
            runs,
            merge_rounds,
        })
    }

    /// Cuts the chain into runs, insertion-sorts each, and returns run heads
    /// in chain order.
    fn build_runs(&self, list: &mut ArticleList, head: NodeId, keys: &KeyCache) -> Vec<NodeId> {
        let mut run_heads = Vec::with_capacity(list.len().div_ceil(self.run_size));
        let mut cursor = Some(head);

        while let Some(run_head) = cursor {
            let mut run_tail = run_head;
            let mut count = 1;
            while count < self.run_size {
                match list.next_of(run_tail) {
                    Some(next) => {
                        run_tail = next;
                        count += 1;
                    }
                    None => break,
                }
            }

            cursor = list.next_of(run_tail);
            list.set_next(run_tail, None);
            run_heads.push(insertion_sort(list, run_head, keys));
        }

        run_heads
    }
}

/// Sorts `list` with the default run size.
pub fn sort_by_date(list: &mut ArticleList) -> SortResult<SortStats> {
    RunSorter::default().sort_list(list)
}

/// Date keys addressed by node slot.
struct KeyCache {
    keys: Vec<DateKey>,
}

impl KeyCache {
    fn build(list: &ArticleList) -> SortResult<Self> {
        let mut keys = vec![DateKey::default(); list.slot_count()];
        let mut cursor = list.head_id();
        let mut position = 0;
        while let Some(id) = cursor {
            keys[id.slot()] = extract_date_key(&list.article_of(id).date)
                .map_err(|source| SortError::DateParse { position, source })?;
            cursor = list.next_of(id);
            position += 1;
        }
        Ok(Self { keys })
    }

    fn key(&self, id: NodeId) -> DateKey {
        self.keys[id.slot()]
    }
}

/// Linked insertion sort of one severed run; returns the new run head.
///
/// Each incoming node goes before the first sorted node with a strictly
/// greater key.
fn insertion_sort(list: &mut ArticleList, head: NodeId, keys: &KeyCache) -> NodeId {
    let mut sorted: Option<NodeId> = None;
    let mut current = Some(head);

    while let Some(node) = current {
        current = list.next_of(node);
        let key = keys.key(node);

        match sorted {
            Some(first) if keys.key(first) <= key => {
                let mut at = first;
                while let Some(next) = list.next_of(at) {
                    if keys.key(next) > key {
                        break;
                    }
                    at = next;
                }
                let after = list.next_of(at);
                list.set_next(node, after);
                list.set_next(at, Some(node));
            }
            _ => {
                list.set_next(node, sorted);
                sorted = Some(node);
            }
        }
    }

    sorted.unwrap_or(head)
}

/// Merges two sorted chains; ties take the left node first.
fn merge(list: &mut ArticleList, left: NodeId, right: NodeId, keys: &KeyCache) -> NodeId {
    let (head, mut left, mut right) = if keys.key(left) <= keys.key(right) {
        (left, list.next_of(left), Some(right))
    } else {
        (right, Some(left), list.next_of(right))
    };
    let mut tail = head;

    loop {
        match (left, right) {
            (Some(l), Some(r)) => {
                let next = if keys.key(l) <= keys.key(r) {
                    left = list.next_of(l);
                    l
                } else {
                    right = list.next_of(r);
                    r
                };
                list.set_next(tail, Some(next));
                tail = next;
            }
            (rest, None) | (None, rest) => {
                list.set_next(tail, rest);
                break;
            }
        }
    }

    head
}

/// Pairwise merges run heads in place until one remains; returns round count.
fn merge_rounds(list: &mut ArticleList, run_heads: &mut Vec<NodeId>, keys: &KeyCache) -> usize {
    let mut rounds = 0;
    while run_heads.len() > 1 {
        let mut merged = 0;
        let mut index = 0;
        while index < run_heads.len() {
            let head = match run_heads.get(index + 1).copied() {
                Some(right) => merge(list, run_heads[index], right, keys),
                None => run_heads[index],
            };
            run_heads[merged] = head;
            merged += 1;
            index += 2;
        }
        run_heads.truncate(merged);
        rounds += 1;
    }
    rounds
}

#[cfg(test)]
mod tests {
    use super::{RunSorter, SortConfig, SortError};
    use crate::list::article_list::ArticleList;
    use crate::model::record::Article;

    fn dated(title: &str, date: &str) -> Article {
        Article::new(title, "body", "News", date, "True")
    }

    fn titles(list: &ArticleList) -> Vec<String> {
        list.iter().map(|a| a.title.clone()).collect()
    }

    #[test]
    fn zero_run_size_is_rejected() {
        let err = RunSorter::new(SortConfig { run_size: 0 }).unwrap_err();
        assert!(matches!(err, SortError::InvalidRunSize(0)));
    }

    #[test]
    fn run_size_one_degenerates_to_pure_merge_sort() {
        let sorter = RunSorter::new(SortConfig { run_size: 1 }).unwrap();
        let mut list: ArticleList = [
            dated("c", "03-Jan-17"),
            dated("a", "01-Jan-17"),
            dated("b", "02-Jan-17"),
        ]
        .into_iter()
        .collect();

        let stats = sorter.sort_list(&mut list).unwrap();
        assert_eq!(stats.runs, 3);
        assert_eq!(stats.merge_rounds, 2);
        assert_eq!(titles(&list), ["a", "b", "c"]);
    }

    #[test]
    fn insertion_sort_keeps_equal_keys_in_arrival_order() {
        let sorter = RunSorter::new(SortConfig { run_size: 8 }).unwrap();
        let mut list: ArticleList = [
            dated("x1", "05-Mar-17"),
            dated("y1", "01-Mar-17"),
            dated("x2", "05-Mar-17"),
            dated("y2", "01-Mar-17"),
            dated("x3", "March 5, 2017"),
        ]
        .into_iter()
        .collect();

        let stats = sorter.sort_list(&mut list).unwrap();
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.merge_rounds, 0);
        assert_eq!(titles(&list), ["y1", "y2", "x1", "x2", "x3"]);
    }

    #[test]
    fn odd_run_count_carries_trailing_run() {
        let sorter = RunSorter::new(SortConfig { run_size: 2 }).unwrap();
        let mut list: ArticleList = [
            dated("e", "05-Jan-17"),
            dated("d", "04-Jan-17"),
            dated("c", "03-Jan-17"),
            dated("b", "02-Jan-17"),
            dated("a", "01-Jan-17"),
        ]
        .into_iter()
        .collect();

        let stats = sorter.sort_list(&mut list).unwrap();
        assert_eq!(stats.runs, 3);
        assert_eq!(stats.merge_rounds, 2);
        assert_eq!(titles(&list), ["a", "b", "c", "d", "e"]);
        assert_eq!(list.back().unwrap().title, "e");
    }
}

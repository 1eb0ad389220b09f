//! Singly-linked article list backed by a node arena.
//!
//! # Responsibility
//! - Own every article node and the forward links between them.
//! - Provide positional insert/erase, append, traversal and head replacement.
//!
//! # Invariants
//! - `len` equals the number of nodes reachable from `head`.
//! - `tail` is the last reachable node, and is `None` iff `head` is `None`.
//! - Every live arena slot is reachable from `head` exactly once.
//! - Released slots are recycled by later inserts; a `NodeId` is only
//!   meaningful while its slot is live.

use crate::model::record::Article;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::iter::FusedIterator;

pub type ListResult<T> = Result<T, ListError>;

/// Error for positional list operations and chain replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Positional operation got an index outside the valid range.
    IndexOutOfRange { index: usize, len: usize },
    /// Removal attempted on an empty list.
    Empty,
    /// A replacement chain does not cover exactly the list's live nodes.
    BrokenChain(&'static str),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::Empty => write!(f, "list is empty"),
            Self::BrokenChain(details) => write!(f, "broken node chain: {details}"),
        }
    }
}

impl Error for ListError {}

/// Arena handle of one list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena slot index, usable to address per-node side tables.
    pub(crate) fn slot(self) -> usize {
        self.0
    }
}

#[derive(Clone)]
struct Node {
    article: Article,
    next: Option<NodeId>,
}

/// Ordered sequence of articles with forward-only links.
#[derive(Clone, Default)]
pub struct ArticleList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl ArticleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of articles, O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends at the tail in O(1).
    pub fn push_back(&mut self, article: Article) {
        let id = self.alloc(article, None);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Inserts `article` so that it ends up at position `index`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index > len`.
    pub fn insert(&mut self, index: usize, article: Article) -> ListResult<()> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            self.push_back(article);
            return Ok(());
        }

        if index == 0 {
            let id = self.alloc(article, self.head);
            self.head = Some(id);
        } else {
            let prev = self.node_id_at(index - 1);
            let next = self.node(prev).next;
            let id = self.alloc(article, next);
            self.node_mut(prev).next = Some(id);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the article at `index`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index >= len`.
    pub fn erase(&mut self, index: usize) -> ListResult<Article> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.pop_front();
        }

        let prev = self.node_id_at(index - 1);
        let target = self
            .node(prev)
            .next
            .ok_or(ListError::BrokenChain("chain ended before list length"))?;
        let after = self.node(target).next;
        self.node_mut(prev).next = after;
        if after.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(self.release(target))
    }

    /// Removes and returns the first article.
    ///
    /// # Errors
    /// - `Empty` when the list has no nodes.
    pub fn pop_front(&mut self) -> ListResult<Article> {
        let head = self.head.ok_or(ListError::Empty)?;
        self.head = self.node(head).next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(self.release(head))
    }

    /// Returns the article at `index` after an O(n) walk.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index >= len`.
    pub fn get(&self, index: usize) -> ListResult<&Article> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.node(self.node_id_at(index)).article)
    }

    pub fn front(&self) -> Option<&Article> {
        self.head.map(|id| &self.node(id).article)
    }

    pub fn back(&self) -> Option<&Article> {
        self.tail.map(|id| &self.node(id).article)
    }

    /// Whether any article satisfies `matcher`.
    pub fn contains<F>(&self, matcher: F) -> bool
    where
        F: FnMut(&Article) -> bool,
    {
        self.iter().any(matcher)
    }

    /// Whether an article with exactly this title exists.
    pub fn contains_title(&self, title: &str) -> bool {
        self.contains(|article| article.title == title)
    }

    /// Releases every node. Safe to call on an empty list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Forward-only traversal from head to end.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    pub(crate) fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.node_mut(id).next = next;
    }

    pub(crate) fn article_of(&self, id: NodeId) -> &Article {
        &self.node(id).article
    }

    /// Upper bound (exclusive) of live slot indexes.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Installs a relinked chain starting at `new_head` and recomputes `tail`.
    ///
    /// The chain must reach exactly `len` live nodes and terminate. On error the
    /// current head and tail are left untouched.
    ///
    /// # Errors
    /// - `BrokenChain` when the chain is longer (or cyclic), shorter, or
    ///   references a released slot.
    pub(crate) fn replace_head(&mut self, new_head: Option<NodeId>) -> ListResult<()> {
        let mut count = 0;
        let mut last = None;
        let mut cursor = new_head;
        while let Some(id) = cursor {
            if count == self.len {
                return Err(ListError::BrokenChain("chain longer than list length"));
            }
            let node = self
                .slots
                .get(id.0)
                .and_then(Option::as_ref)
                .ok_or(ListError::BrokenChain("chain references a released node"))?;
            count += 1;
            last = Some(id);
            cursor = node.next;
        }
        if count != self.len {
            return Err(ListError::BrokenChain("chain shorter than list length"));
        }

        self.head = new_head;
        self.tail = last;
        Ok(())
    }

    fn node_id_at(&self, index: usize) -> NodeId {
        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|id| self.node(id).next);
        }
        cursor.expect("index checked against list length")
    }

    fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("node id refers to a live slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("node id refers to a live slot")
    }

    fn alloc(&mut self, article: Article, next: Option<NodeId>) -> NodeId {
        let node = Some(Node { article, next });
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                NodeId(slot)
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Article {
        let node = self.slots[id.0]
            .take()
            .expect("released node id refers to a live slot");
        self.free.push(id.0);
        node.article
    }
}

impl Debug for ArticleList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Article> for ArticleList {
    fn extend<I: IntoIterator<Item = Article>>(&mut self, iter: I) {
        for article in iter {
            self.push_back(article);
        }
    }
}

impl FromIterator<Article> for ArticleList {
    fn from_iter<I: IntoIterator<Item = Article>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a ArticleList {
    type Item = &'a Article;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing head-to-end iterator over an [`ArticleList`].
pub struct Iter<'a> {
    list: &'a ArticleList,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Article;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.node(id);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.article)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

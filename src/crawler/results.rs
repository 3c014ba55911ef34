//! Result accumulation
//!
//! Extracted records land in a shared, append-only collection. Each insert
//! takes the result lock and is tagged with the next value of the sequence
//! counter, so the final ordering is the lock-acquisition order rather than
//! fetch-completion order; re-runs over the same data order the same way.

use serde::Serialize;
use std::sync::Mutex;

/// One extracted news article
///
/// `published_at` is the site's display timestamp, kept as free-form text.
/// `content` holds the member-only sentinel instead of body text for
/// paywalled articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Journalist")]
    pub journalist: String,

    #[serde(rename = "Time")]
    pub published_at: String,

    #[serde(rename = "Content")]
    pub content: String,
}

/// An article tagged with its insertion sequence number
#[derive(Debug, Clone)]
pub struct SequencedRecord {
    /// 1-based insertion order under the result lock
    pub seq: u64,

    /// The extracted article
    pub article: Article,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<SequencedRecord>,
    next_seq: u64,
}

/// Thread-safe ordered collection of extracted records
#[derive(Debug, Default)]
pub struct ResultSet {
    inner: Mutex<Inner>,
}

impl ResultSet {
    /// Creates an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an article, assigning it the next sequence number
    ///
    /// Returns the assigned sequence number (starting at 1).
    pub fn push(&self, article: Article) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_seq += 1;
        let seq = inner.next_seq;
        inner.records.push(SequencedRecord { seq, article });
        seq
    }

    /// Returns the number of accumulated records
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().records.is_empty()
    }

    /// Drains all records, sorted by sequence number
    pub fn take_records(&self) -> Vec<SequencedRecord> {
        let mut records = std::mem::take(&mut self.inner.lock().unwrap().records);
        records.sort_by_key(|record| record.seq);
        records
    }
}

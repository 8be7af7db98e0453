//! Document store: concatenated corpus text with position bookkeeping.
//!
//! Documents are appended to one growing [`Utf8String`] with a separator
//! after every document, including the last. Two orderings of the same
//! position records are maintained: the insertion-ordered arena (which is
//! sorted by start position, since appends only ever grow the text) and an
//! id-sorted index vector. The first answers offset-to-document lookups in
//! O(log n), the second rejects duplicate ids in O(log n).

use crate::error::{Error, Result};
use crate::text::Utf8String;

/// A document's placement inside the concatenated text.
///
/// `start` and `length` are code-point units; `length` excludes the
/// following separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentPosition {
    /// Database id of the document (SQLite rowid).
    pub id: i64,
    /// Position of the document's first code point in the concatenated text.
    pub start: usize,
    /// Document length in code points.
    pub length: usize,
}

/// Append-only store of separator-joined documents.
///
/// Move-only: the store hands out borrows of its concatenated text, and the
/// position records index into it.
#[derive(Debug)]
pub struct DocumentStore {
    separator: Utf8String,
    text: Utf8String,
    /// Position records in insertion order; `start` is strictly increasing.
    docs: Vec<DocumentPosition>,
    /// Indices into `docs`, sorted by document id.
    by_id: Vec<usize>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(Utf8String::from("$"))
    }
}

impl DocumentStore {
    /// Create a store using `separator` between documents.
    ///
    /// The separator should be chosen so it cannot occur inside document
    /// content; the finder clips matches to document bounds either way, so a
    /// colliding separator cannot produce a match that straddles documents.
    pub fn new(separator: Utf8String) -> Self {
        Self {
            separator,
            text: Utf8String::new(),
            docs: Vec::new(),
            by_id: Vec::new(),
        }
    }

    /// Hint the expected total content size in bytes.
    pub fn reserve(&mut self, bytes: usize) {
        self.text.reserve(bytes);
    }

    /// Append a document.
    ///
    /// Returns `false` without mutating anything when `id` is already
    /// present. Otherwise the content and one separator are appended to the
    /// concatenated text and both orderings are updated.
    pub fn add(&mut self, content: &Utf8String, id: i64) -> bool {
        let slot = match self.by_id.binary_search_by_key(&id, |&i| self.docs[i].id) {
            Ok(_) => return false,
            Err(slot) => slot,
        };

        let record = DocumentPosition {
            id,
            start: self.text.len(),
            length: content.len(),
        };
        self.by_id.insert(slot, self.docs.len());
        self.docs.push(record);
        self.text.append(content);
        self.text.append(&self.separator);
        true
    }

    /// Map a code-point offset in the concatenated text to the document
    /// containing it.
    ///
    /// A document owns the half-open range `[start, start + length +
    /// separator_len)`, except the last document, whose range stops at
    /// `start + length`. Positions inside the trailing separator (or past
    /// the text) are out of range.
    pub fn find_document(&self, pos: usize) -> Result<DocumentPosition> {
        if self.docs.is_empty() {
            return Err(Error::OutOfRange("store is empty".into()));
        }

        // Upper bound on start positions, then step back to the candidate.
        let idx = self.docs.partition_point(|d| d.start <= pos);
        if idx == 0 {
            return Err(Error::OutOfRange(format!("position {pos} precedes the first document")));
        }
        let doc = self.docs[idx - 1];

        let mut end = doc.start + doc.length;
        if idx < self.docs.len() {
            end += self.separator.len();
        }
        if pos < end {
            Ok(doc)
        } else {
            Err(Error::OutOfRange(format!("position {pos} is not inside any document")))
        }
    }

    /// The concatenated text of all documents.
    pub fn concatenated(&self) -> &Utf8String {
        &self.text
    }

    pub fn separator(&self) -> &Utf8String {
        &self.separator
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Position records in insertion (start) order.
    pub fn documents(&self) -> &[DocumentPosition] {
        &self.docs
    }
}

//! Cross-document duplicate extraction.
//!
//! Walks adjacent suffix pairs of the store's concatenated text and keeps,
//! for every unordered pair of distinct documents, the single longest
//! common substring at or above a threshold. The LCP of any two suffixes is
//! the minimum `lcp[i]` over the suffix-array interval between them, so the
//! longest common substring of two documents always surfaces at some
//! adjacent index drawn from both; scanning adjacencies is exact for
//! per-pair longest matches.

use ahash::AHashMap;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::{create, BuilderKind};
use crate::store::DocumentStore;

/// One best shared substring between a pair of documents.
///
/// `doc1_id < doc2_id` always; `start_pos1`/`start_pos2` are code-point
/// offsets inside the respective document bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub doc1_id: i64,
    pub doc2_id: i64,
    pub start_pos1: usize,
    pub start_pos2: usize,
    pub length: usize,
}

impl Ord for Match {
    /// Output order: longest first, then ascending document ids.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .length
            .cmp(&self.length)
            .then(self.doc1_id.cmp(&other.doc1_id))
            .then(self.doc2_id.cmp(&other.doc2_id))
            .then(self.start_pos1.cmp(&other.start_pos1))
            .then(self.start_pos2.cmp(&other.start_pos2))
    }
}

impl PartialOrd for Match {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds per-pair longest duplicates in a [`DocumentStore`].
///
/// Each call to [`find_duplicates`](Self::find_duplicates) owns its suffix
/// index; no state is shared between runs.
#[derive(Debug, Default)]
pub struct DuplicateFinder {
    kind: BuilderKind,
}

impl DuplicateFinder {
    /// Create a finder using the selected construction algorithm.
    pub fn new(kind: BuilderKind) -> Self {
        Self { kind }
    }

    /// Report the longest common substring of every document pair whose
    /// best match is at least `min_length` code points, sorted by
    /// descending length then ascending ids.
    ///
    /// An empty store yields an empty result without building an index.
    pub fn find_duplicates(&self, store: &DocumentStore, min_length: usize) -> Result<Vec<Match>> {
        if store.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = create(self.kind);
        builder.build(store.concatenated())?;
        let sa = builder.array()?;
        let lcp = builder.lcp()?;

        let mut best: AHashMap<(i64, i64), Match> = AHashMap::new();

        for (i, &common) in lcp.iter().enumerate() {
            let p1 = sa[i];
            let p2 = sa[i + 1];

            // A suffix starting inside the trailing separator belongs to no
            // document; that is the only error this loop swallows.
            let d1 = match store.find_document(p1) {
                Ok(doc) => doc,
                Err(Error::OutOfRange(_)) => continue,
                Err(e) => return Err(e),
            };
            let d2 = match store.find_document(p2) {
                Ok(doc) => doc,
                Err(Error::OutOfRange(_)) => continue,
                Err(e) => return Err(e),
            };
            if d1.id == d2.id {
                continue;
            }

            let o1 = p1 - d1.start;
            let o2 = p2 - d2.start;

            // Clip to the shorter remaining body so a match never crosses a
            // separator. Offsets inside a separator cell clip to zero.
            let allowed = d1
                .length
                .saturating_sub(o1)
                .min(d2.length.saturating_sub(o2));
            let length = common.min(allowed);
            if length < min_length {
                continue;
            }

            let candidate = if d1.id < d2.id {
                Match {
                    doc1_id: d1.id,
                    doc2_id: d2.id,
                    start_pos1: o1,
                    start_pos2: o2,
                    length,
                }
            } else {
                Match {
                    doc1_id: d2.id,
                    doc2_id: d1.id,
                    start_pos1: o2,
                    start_pos2: o1,
                    length,
                }
            };

            // Keep the first-encountered best; replace only on strictly
            // longer candidates.
            match best.entry((candidate.doc1_id, candidate.doc2_id)) {
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
                Entry::Occupied(mut slot) => {
                    if candidate.length > slot.get().length {
                        slot.insert(candidate);
                    }
                }
            }
        }

        let mut matches: Vec<Match> = best.into_iter().map(|(_, m)| m).collect();
        matches.sort_unstable();
        Ok(matches)
    }
}

//! Match list serialization.
//!
//! The on-disk form is a single JSON array, one object per match, rendered
//! byte-for-byte as downstream consumers expect it:
//!
//! ```text
//! [{"doc1_id": 1, "doc2_id": 2, "start_pos1": 0, "start_pos2": 4, "length": 11}]
//! ```
//!
//! Rendering is hand-written because the separators and key order are part
//! of the contract; reading back goes through serde, which accepts the same
//! shape.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::finder::Match;

/// Render matches as the normative JSON array.
pub fn render_matches(matches: &[Match]) -> String {
    let mut out = String::with_capacity(2 + matches.len() * 80);
    out.push('[');
    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(
            out,
            "{{\"doc1_id\": {}, \"doc2_id\": {}, \"start_pos1\": {}, \"start_pos2\": {}, \"length\": {}}}",
            m.doc1_id, m.doc2_id, m.start_pos1, m.start_pos2, m.length
        );
    }
    out.push(']');
    out
}

/// Write the rendered match array to `path`.
pub fn write_matches(path: impl AsRef<Path>, matches: &[Match]) -> Result<()> {
    fs::write(path, render_matches(matches))?;
    Ok(())
}

/// Read a match file back.
pub fn read_matches(path: impl AsRef<Path>) -> Result<Vec<Match>> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

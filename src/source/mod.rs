//! SQLite ingestion source.
//!
//! Feeds a [`DocumentStore`] from a corpus table, one row per document,
//! keyed by rowid. Table and column identifiers pass through a structural
//! guard before any SQL is prepared; filter values are always bound
//! parameters. Content is validated as UTF-8 on the way in.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::store::DocumentStore;
use crate::text::Utf8String;
use crate::utils::progress::{ProgressBar, ProgressStyle};

/// Identifiers accepted in SQL positions that cannot be bound.
fn ident_pattern() -> &'static Regex {
    static IDENT_RE: OnceLock<Regex> = OnceLock::new();
    IDENT_RE.get_or_init(|| Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern"))
}

fn check_ident(name: &str) -> Result<()> {
    if ident_pattern().is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

/// Where to read documents from: `SELECT <content_column>, rowid FROM
/// <table> WHERE <filter_column> = <filter_value>`.
#[derive(Debug, Clone, Copy)]
pub struct DocumentQuery<'a> {
    pub table: &'a str,
    pub filter_column: &'a str,
    pub content_column: &'a str,
    pub filter_value: &'a str,
}

/// A SQLite-backed document source.
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Open a database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Check that `table` exists and carries every column in `columns`.
    ///
    /// Returns `Ok(None)` when the schema is complete, `Ok(Some(name))`
    /// naming the missing table or column otherwise.
    pub fn validate(&self, table: &str, columns: &[&str]) -> Result<Option<String>> {
        check_ident(table)?;
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({table})"))?;
        let existing = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()?;

        if existing.is_empty() {
            return Ok(Some(table.to_string()));
        }
        for &column in columns {
            if !existing.iter().any(|c| c == column) {
                return Ok(Some(column.to_string()));
            }
        }
        Ok(None)
    }

    /// Stream every matching row into a new [`DocumentStore`].
    ///
    /// A pre-query sizes the store's buffer and the progress bar; the bar
    /// is only drawn when `verbose` is set.
    pub fn document_store(
        &self,
        query: &DocumentQuery<'_>,
        separator: Utf8String,
        verbose: bool,
    ) -> Result<DocumentStore> {
        check_ident(query.table)?;
        check_ident(query.filter_column)?;
        check_ident(query.content_column)?;

        let (doc_count, total_bytes): (u64, u64) = self.conn.query_row(
            &format!(
                "SELECT COUNT(*), COALESCE(SUM(LENGTH({content})), 0) FROM {table} WHERE {filter} = ?1",
                content = query.content_column,
                table = query.table,
                filter = query.filter_column,
            ),
            [query.filter_value],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let mut store = DocumentStore::new(separator);
        store.reserve(total_bytes as usize);

        let progress = verbose.then(|| {
            let bar = ProgressBar::new(doc_count);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40} {pos}/{len} documents")
                    .expect("static template")
                    .progress_chars("=> "),
            );
            bar
        });

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {content}, rowid FROM {table} WHERE {filter} = ?1",
            content = query.content_column,
            table = query.table,
            filter = query.filter_column,
        ))?;
        let mut rows = stmt.query([query.filter_value])?;
        while let Some(row) = rows.next()? {
            let content: Vec<u8> = row.get(0)?;
            let id: i64 = row.get(1)?;
            let text = Utf8String::from_bytes(content)?;
            store.add(&text, id);
            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }
        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        Ok(store)
    }

    /// Set one column of one row, addressed by rowid.
    pub fn update_row(&self, table: &str, row_id: i64, column: &str, value: &str) -> Result<()> {
        check_ident(table)?;
        check_ident(column)?;
        self.conn.execute(
            &format!("UPDATE {table} SET {column} = ?1 WHERE rowid = ?2"),
            rusqlite::params![value, row_id],
        )?;
        Ok(())
    }
}

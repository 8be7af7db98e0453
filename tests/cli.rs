//! Integration tests driving the dupfind binary end to end.
//!
//! Each test builds its own SQLite corpus in a per-process temp directory,
//! runs the compiled binary against it, and checks the exit status, the
//! summary line, and the bytes of the emitted match file.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use rusqlite::Connection;

static FIXTURE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get or create the test fixture directory (singleton)
fn fixture_dir() -> PathBuf {
    FIXTURE_DIR
        .get_or_init(|| {
            let dir = std::env::temp_dir()
                .join("dupfind_test_fixtures")
                .join(format!("test_{}", std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).expect("Failed to create fixture dir");
            dir
        })
        .clone()
}

/// Create a corpus database with the standard schema
fn make_db(name: &str, rows: &[(&str, &str)]) -> PathBuf {
    let path = fixture_dir().join(name);
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE data_table (domains TEXT, doc_content TEXT)")
        .unwrap();
    for (domain, content) in rows {
        conn.execute(
            "INSERT INTO data_table (domains, doc_content) VALUES (?1, ?2)",
            rusqlite::params![domain, content],
        )
        .unwrap();
    }
    path
}

fn run_dupfind(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dupfind"))
        .args(args)
        .output()
        .expect("failed to run dupfind")
}

#[test]
fn test_finds_duplicates_end_to_end() {
    let db = make_db(
        "simple.db",
        &[
            ("example.com", "hello world"),
            ("example.com", "Say hello world"),
        ],
    );
    let out_path = fixture_dir().join("simple.json");

    let output = run_dupfind(&[
        db.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "example.com",
        "5",
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 1 duplicate matches"), "stdout: {stdout}");

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "[{\"doc1_id\": 1, \"doc2_id\": 2, \"start_pos1\": 0, \"start_pos2\": 4, \"length\": 11}]"
    );
}

#[test]
fn test_multibyte_corpus_offsets_in_code_points() {
    let db = make_db(
        "georgian.db",
        &[
            ("ka.example", "გამარჯობა მსოფლიო"),
            ("ka.example", "გამარჯობა კარგო"),
            ("ka.example", "ჩემო კარგო"),
            ("ka.example", "მსოფლიო ულამაზესია!"),
            ("other.org", "ignored row"),
        ],
    );
    let out_path = fixture_dir().join("georgian.json");

    let output = run_dupfind(&[
        db.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "ka.example",
        "5",
    ]);
    assert!(output.status.success());

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "[{\"doc1_id\": 1, \"doc2_id\": 2, \"start_pos1\": 0, \"start_pos2\": 0, \"length\": 10}, \
         {\"doc1_id\": 1, \"doc2_id\": 4, \"start_pos1\": 10, \"start_pos2\": 0, \"length\": 7}, \
         {\"doc1_id\": 2, \"doc2_id\": 3, \"start_pos1\": 9, \"start_pos2\": 4, \"length\": 6}]"
    );
}

#[test]
fn test_no_matching_domain_writes_empty_array() {
    let db = make_db("empty_domain.db", &[("example.com", "some text")]);
    let out_path = fixture_dir().join("empty_domain.json");

    let output = run_dupfind(&[
        db.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "nothing.here",
        "5",
    ]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "[]");
}

#[test]
fn test_verbose_flag_traces_to_stderr() {
    let db = make_db(
        "verbose.db",
        &[("example.com", "duplicate text"), ("example.com", "duplicate text")],
    );
    let out_path = fixture_dir().join("verbose.json");

    // Flag position is free-form
    let output = run_dupfind(&[
        db.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "example.com",
        "4",
        "-v",
    ]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading documents"), "stderr: {stderr}");
    assert!(stderr.contains("indexing"), "stderr: {stderr}");
}

#[test]
fn test_missing_arguments_exit_one() {
    let output = run_dupfind(&["only_one_arg"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_non_numeric_threshold_exits_one() {
    let db = make_db("badthreshold.db", &[("example.com", "text")]);
    let out_path = fixture_dir().join("badthreshold.json");
    let output = run_dupfind(&[
        db.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "example.com",
        "lots",
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_database_without_schema_fails_validation() {
    let path = fixture_dir().join("no_schema.db");
    drop(Connection::open(&path).unwrap());
    let out_path = fixture_dir().join("no_schema.json");

    let output = run_dupfind(&[
        path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "example.com",
        "5",
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"), "stderr: {stderr}");
    assert!(!out_path.exists());
}

#[test]
fn test_help_exits_zero() {
    let output = run_dupfind(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

//! `zhuyin-import`: convert a UTF-16 Zhuyin lexicon into a user-phrase
//! SQLite store.
//!
//! # Usage
//!
//! ```text
//! zhuyin-import phrases.txt userphrase
//! zhuyin-import phrases.txt out.sqlite3 --overwrite --on-duplicate skip --report rejected.json
//! ```
//!
//! Row constants and the duplicate policy can also be set in
//! `zhuyin-import.toml` (or the file given with `--config`) and through
//! `ZHUYIN_*` environment variables.

mod settings;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use settings::ImportConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use zhuyin_core::{DuplicatePolicy, Encoder, ImportReport, PhraseStore};
use zhuyin_store_sqlite::SqliteStore;

const STORE_EXTENSION: &str = "sqlite3";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a Zhuyin lexicon into a user-phrase store")]
struct Cli {
  /// UTF-16LE lexicon file (`<phrase>  <syllable> <syllable> ...` per line).
  input: PathBuf,

  /// Destination SQLite file; `.sqlite3` is appended when missing.
  output: PathBuf,

  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "zhuyin-import.toml")]
  config: PathBuf,

  /// Delete an existing destination file before writing.
  #[arg(long)]
  overwrite: bool,

  /// What to do with rows that repeat a phrase and pronunciation
  /// (`abort` or `skip`). Overrides the config file.
  #[arg(long, value_name = "POLICY")]
  on_duplicate: Option<DuplicatePolicy>,

  /// Parse and encode only; do not write the store.
  #[arg(long)]
  dry_run: bool,

  /// Write rows skipped as duplicates to this JSON file.
  #[arg(long, value_name = "FILE")]
  report: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = ImportConfig::load(&cli.config)?;
  run(cli, settings).await
}

async fn run(cli: Cli, settings: ImportConfig) -> anyhow::Result<()> {
  let output = with_store_extension(&cli.output);
  let policy = cli.on_duplicate.unwrap_or(settings.on_duplicate);

  // Parse and encode everything before touching the destination.
  let parsed = zhuyin_lexicon::read_lexicon(&cli.input)
    .with_context(|| format!("failed to read lexicon {}", cli.input.display()))?;

  let encoder = Encoder::new(settings.row_defaults());
  let rows = encoder.encode_all(&parsed.entries);

  for row in rows.iter().filter(|r| r.is_truncated()) {
    tracing::warn!(
      phrase = %row.phrase,
      length = row.length,
      "phrase has more syllables than phone columns; extra syllables dropped"
    );
  }

  println!(
    "Records to import into {}: {} ({} malformed lines skipped)",
    output.display(),
    rows.len(),
    parsed.stats.malformed,
  );

  if cli.dry_run {
    return Ok(());
  }

  if cli.overwrite && output.exists() {
    std::fs::remove_file(&output)
      .with_context(|| format!("failed to remove {}", output.display()))?;
  }

  let store = SqliteStore::create(&output)
    .await
    .with_context(|| format!("failed to create store at {}", output.display()))?;

  let report = store
    .import(rows, policy)
    .await
    .with_context(|| format!("failed to import into {}", output.display()))?;

  println!("Exported {} records to {}", report.inserted, output.display());
  if !report.rejected.is_empty() {
    println!("Skipped {} duplicate records", report.rejected.len());
  }

  if let Some(path) = &cli.report {
    write_report(path, &report)?;
  }

  Ok(())
}

/// Append `.sqlite3` unless the path already ends with it.
fn with_store_extension(path: &Path) -> PathBuf {
  if path.extension().is_some_and(|e| e == STORE_EXTENSION) {
    return path.to_path_buf();
  }
  let mut s = path.as_os_str().to_owned();
  s.push(".");
  s.push(STORE_EXTENSION);
  PathBuf::from(s)
}

fn write_report(path: &Path, report: &ImportReport) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(&report.rejected)
    .context("failed to serialise rejected rows")?;
  std::fs::write(path, json)
    .with_context(|| format!("failed to write report {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn utf16le_with_bom(s: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    out.extend(s.encode_utf16().flat_map(u16::to_le_bytes));
    out
  }

  fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zhuyin-cli-{}-{name}", std::process::id()))
  }

  fn cli(input: &Path, output: &Path, extra: &[&str]) -> Cli {
    let mut args = vec![
      "zhuyin-import",
      input.to_str().unwrap(),
      output.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
  }

  /// `(userphrase_v1 rows, config_v1 rows)` read through a fresh connection.
  fn table_counts(path: &Path) -> (i64, i64) {
    let conn = rusqlite::Connection::open(path).unwrap();
    let count = |table: &str| -> i64 {
      conn
        .query_row(&format!("SELECT count(*) FROM {table}"), [], |r| r.get(0))
        .unwrap()
    };
    (count("userphrase_v1"), count("config_v1"))
  }

  #[test]
  fn appends_store_extension() {
    assert_eq!(with_store_extension(Path::new("out")), PathBuf::from("out.sqlite3"));
    assert_eq!(with_store_extension(Path::new("a.db")), PathBuf::from("a.db.sqlite3"));
    assert_eq!(
      with_store_extension(Path::new("dir/out.sqlite3")),
      PathBuf::from("dir/out.sqlite3")
    );
  }

  #[test]
  fn parses_arguments() {
    let cli = Cli::try_parse_from([
      "zhuyin-import",
      "in.txt",
      "out",
      "--on-duplicate",
      "skip",
      "--dry-run",
    ])
    .unwrap();
    assert_eq!(cli.input, PathBuf::from("in.txt"));
    assert_eq!(cli.on_duplicate, Some(DuplicatePolicy::Skip));
    assert!(cli.dry_run);
    assert!(!cli.overwrite);
    assert_eq!(cli.config, PathBuf::from("zhuyin-import.toml"));
  }

  #[test]
  fn rejects_unknown_policy() {
    let r = Cli::try_parse_from(["zhuyin-import", "in.txt", "out", "--on-duplicate", "merge"]);
    assert!(r.is_err());
  }

  #[tokio::test]
  async fn end_to_end_import_with_skip_report() {
    let input = temp_path("input.txt");
    let output = temp_path("output");
    let report = temp_path("report.json");
    let store_path = with_store_extension(&output);
    std::fs::remove_file(&store_path).ok();
    std::fs::write(
      &input,
      utf16le_with_bom("測試  ㄘㄜˋ ㄕˋ\r\n壞行\r\n\r\n注音  ㄓㄨˋ ㄧㄣ\r\n測試  ㄘㄜˋ ㄕˋ\r\n"),
    )
    .unwrap();

    let args = cli(&input, &output, &[
      "--on-duplicate",
      "skip",
      "--report",
      report.to_str().unwrap(),
    ]);
    run(args, ImportConfig::default()).await.unwrap();

    let counts = table_counts(&store_path);
    let rejected: serde_json::Value =
      serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    for p in [&input, &store_path, &report] {
      std::fs::remove_file(p).ok();
    }

    assert_eq!(counts, (2, 0));
    assert_eq!(rejected.as_array().map(Vec::len), Some(1));
    assert_eq!(rejected[0]["row"]["phrase"], "測試");
    assert_eq!(rejected[0]["index"], 2);
  }

  #[tokio::test]
  async fn dry_run_writes_nothing() {
    let input = temp_path("dry.txt");
    let output = temp_path("dry-out");
    std::fs::write(&input, utf16le_with_bom("字  ㄗˋ\n")).unwrap();

    run(cli(&input, &output, &["--dry-run"]), ImportConfig::default())
      .await
      .unwrap();
    std::fs::remove_file(&input).ok();

    assert!(!with_store_extension(&output).exists());
  }

  #[tokio::test]
  async fn settings_flow_into_rows() {
    let input = temp_path("settings.txt");
    let output = temp_path("settings-out.sqlite3");
    std::fs::remove_file(&output).ok();
    std::fs::write(&input, utf16le_with_bom("字  ㄗˋ\n")).unwrap();

    let settings = ImportConfig { time: 7, ..ImportConfig::default() };
    run(cli(&input, &output, &[]), settings).await.unwrap();

    let conn = rusqlite::Connection::open(&output).unwrap();
    let (time, length, phone_0): (i64, i64, i64) = conn
      .query_row("SELECT time, length, phone_0 FROM userphrase_v1", [], |r| {
        Ok((r.get(0)?, r.get(1)?, r.get(2)?))
      })
      .unwrap();
    drop(conn);
    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    assert_eq!((time, length, phone_0), (7, 1, 9728 + 4));
  }

  #[tokio::test]
  async fn duplicate_aborts_by_default() {
    let input = temp_path("dup.txt");
    let output = temp_path("dup-out.sqlite3");
    std::fs::remove_file(&output).ok();
    std::fs::write(&input, utf16le_with_bom("字  ㄗˋ\n字  ㄗˋ\n")).unwrap();

    let result = run(cli(&input, &output, &[]), ImportConfig::default()).await;
    let counts = table_counts(&output);
    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    assert!(result.is_err());
    assert_eq!(counts, (0, 0));
  }

  #[tokio::test]
  async fn existing_store_needs_overwrite() {
    let input = temp_path("again.txt");
    let output = temp_path("again-out.sqlite3");
    std::fs::remove_file(&output).ok();
    std::fs::write(&input, utf16le_with_bom("字  ㄗˋ\n")).unwrap();

    run(cli(&input, &output, &[]), ImportConfig::default()).await.unwrap();
    let second = run(cli(&input, &output, &[]), ImportConfig::default()).await;
    let third = run(cli(&input, &output, &["--overwrite"]), ImportConfig::default()).await;
    let counts = table_counts(&output);
    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    assert!(second.is_err());
    assert!(third.is_ok());
    assert_eq!(counts, (1, 0));
  }

  #[tokio::test]
  async fn missing_input_is_fatal() {
    let input = temp_path("missing.txt");
    let output = temp_path("missing-out.sqlite3");
    let result = run(cli(&input, &output, &[]), ImportConfig::default()).await;
    assert!(result.is_err());
    assert!(!output.exists());
  }
}

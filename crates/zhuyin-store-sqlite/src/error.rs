//! Error type for `zhuyin-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The destination already holds the tables, or could not be written.
  #[error("cannot create schema: {0}")]
  Schema(#[source] tokio_rusqlite::Error),

  /// Row `index` of the batch repeats an already-staged primary key. Nothing
  /// was committed.
  #[error("duplicate phrase {phrase:?} at row {index}: {reason}")]
  DuplicateKey {
    index:  usize,
    phrase: String,
    reason: String,
  },

  #[error("column {column} holds out-of-range value {value}")]
  OutOfRange { column: &'static str, value: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

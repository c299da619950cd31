//! The `PhraseStore` trait and import bookkeeping types.
//!
//! Implemented by storage backends (e.g. `zhuyin-store-sqlite`). The CLI
//! depends on this abstraction for the write phase.

use std::{fmt, future::Future, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, row::EncodedRow};

// ─── Duplicate handling ──────────────────────────────────────────────────────

/// What to do when a row collides with an already-staged primary key
/// (the eleven phone columns plus the phrase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
  /// Fail the whole import; nothing is committed.
  #[default]
  Abort,
  /// Leave the colliding row out, record it, and keep going.
  Skip,
}

impl FromStr for DuplicatePolicy {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "abort" => Ok(Self::Abort),
      "skip" => Ok(Self::Skip),
      other => Err(Error::UnknownDuplicatePolicy(other.to_owned())),
    }
  }
}

impl fmt::Display for DuplicatePolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Abort => "abort",
      Self::Skip => "skip",
    })
  }
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// A row left out of the import, with the backend's reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
  /// Zero-based position in the submitted batch.
  pub index:  usize,
  pub row:    EncodedRow,
  pub reason: String,
}

/// Outcome of a committed import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
  pub inserted: usize,
  pub rejected: Vec<RejectedRow>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Destination for encoded user phrases.
///
/// A backend is created empty with its schema in place; `import` writes a
/// whole batch atomically.
pub trait PhraseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert every row inside one transaction and commit.
  ///
  /// Under [`DuplicatePolicy::Abort`] a key collision fails the call and
  /// nothing is committed. Under [`DuplicatePolicy::Skip`] colliding rows are
  /// returned in [`ImportReport::rejected`].
  fn import(
    &self,
    rows: Vec<EncodedRow>,
    policy: DuplicatePolicy,
  ) -> impl Future<Output = Result<ImportReport, Self::Error>> + Send + '_;

  /// Number of rows in the user-phrase table.
  fn count_phrases(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Number of rows in the (normally empty) config table.
  fn count_config(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// All stored rows in insertion order.
  fn phrases(&self) -> impl Future<Output = Result<Vec<EncodedRow>, Self::Error>> + Send + '_;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn policy_parses_case_insensitively() {
    assert_eq!("abort".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Abort);
    assert_eq!(" Skip ".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Skip);
  }

  #[test]
  fn unknown_policy_is_an_error() {
    let err = "ignore".parse::<DuplicatePolicy>().unwrap_err();
    assert!(matches!(err, Error::UnknownDuplicatePolicy(ref s) if s == "ignore"));
  }

  #[test]
  fn policy_display_round_trips() {
    for p in [DuplicatePolicy::Abort, DuplicatePolicy::Skip] {
      assert_eq!(p.to_string().parse::<DuplicatePolicy>().unwrap(), p);
    }
  }

  #[test]
  fn default_policy_aborts() {
    assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Abort);
  }
}

//! [`SqliteStore`]: the SQLite implementation of [`PhraseStore`].

use std::path::Path;

use zhuyin_core::{DuplicatePolicy, EncodedRow, ImportReport, PhraseStore, RejectedRow};

use crate::{
  Error, Result,
  encode::{RawRow, encode_length},
  schema::{INSERT_PHRASE, SCHEMA, SELECT_PHRASES},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A user-phrase store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// Result of staging a batch inside the connection thread.
enum Staged {
  Committed(ImportReport),
  /// Aborted on a key collision; the transaction was rolled back.
  Duplicate {
    index:  usize,
    phrase: String,
    reason: String,
  },
}

impl SqliteStore {
  /// Create a store at `path` and its tables.
  ///
  /// Fails with [`Error::Schema`] if the file already contains them.
  pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::info!(path = %path.display(), "created user-phrase store");
    Ok(store)
  }

  /// Create an in-memory store, for tests.
  pub async fn create_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::Schema)
  }

  async fn count(&self, sql: &'static str) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(move |conn| Ok(conn.query_row(sql, [], |r| r.get(0))?))
      .await?;
    usize::try_from(n).map_err(|_| Error::OutOfRange { column: "count(*)", value: n })
  }
}

// ─── Row helpers ─────────────────────────────────────────────────────────────

fn insert_row(stmt: &mut rusqlite::Statement<'_>, row: &EncodedRow) -> rusqlite::Result<()> {
  let p = &row.phones;
  stmt.execute(rusqlite::params![
    row.time,
    row.user_freq,
    row.max_freq,
    row.orig_freq,
    encode_length(row.length),
    p[0],
    p[1],
    p[2],
    p[3],
    p[4],
    p[5],
    p[6],
    p[7],
    p[8],
    p[9],
    p[10],
    row.phrase,
  ])?;
  Ok(())
}

/// The composite key is a unique index on a rowid table; depending on the
/// SQLite build the violation is reported as either extended code.
fn is_key_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.code == rusqlite::ErrorCode::ConstraintViolation
        && (f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
          || f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
  )
}

// ─── PhraseStore impl ────────────────────────────────────────────────────────

impl PhraseStore for SqliteStore {
  type Error = Error;

  async fn import(&self, rows: Vec<EncodedRow>, policy: DuplicatePolicy) -> Result<ImportReport> {
    tracing::debug!(rows = rows.len(), %policy, "staging rows");

    let staged = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut report = ImportReport::default();

        {
          let mut stmt = tx.prepare(INSERT_PHRASE)?;
          for (index, row) in rows.into_iter().enumerate() {
            match insert_row(&mut stmt, &row) {
              Ok(()) => report.inserted += 1,
              Err(e) if is_key_violation(&e) => {
                let reason = e.to_string();
                match policy {
                  // Dropping `tx` on return rolls everything back.
                  DuplicatePolicy::Abort => {
                    return Ok(Staged::Duplicate { index, phrase: row.phrase, reason });
                  }
                  DuplicatePolicy::Skip => {
                    tracing::warn!(index, phrase = %row.phrase, "skipping duplicate phrase");
                    report.rejected.push(RejectedRow { index, row, reason });
                  }
                }
              }
              Err(e) => return Err(e.into()),
            }
          }
        }

        tracing::debug!(
          inserted = report.inserted,
          rejected = report.rejected.len(),
          "committing"
        );
        tx.commit()?;
        Ok(Staged::Committed(report))
      })
      .await?;

    match staged {
      Staged::Committed(report) => Ok(report),
      Staged::Duplicate { index, phrase, reason } => {
        Err(Error::DuplicateKey { index, phrase, reason })
      }
    }
  }

  async fn count_phrases(&self) -> Result<usize> {
    self.count("SELECT count(*) FROM userphrase_v1").await
  }

  async fn count_config(&self) -> Result<usize> {
    self.count("SELECT count(*) FROM config_v1").await
  }

  async fn phrases(&self) -> Result<Vec<EncodedRow>> {
    let raws: Vec<RawRow> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(SELECT_PHRASES)?;
        let rows = stmt
          .query_map([], RawRow::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRow::into_encoded).collect()
  }
}

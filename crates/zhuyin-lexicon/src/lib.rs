//! Reader for UTF-16 Zhuyin lexicon files.
//!
//! Turns the raw bytes of a lexicon export into [`LexiconEntry`] values.
//! Pure synchronous apart from [`read_lexicon`]; no database dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use zhuyin_lexicon::parse_str;
//!
//! let parsed = parse_str("測試  ㄘㄜˋ ㄕˋ\n");
//! assert_eq!(parsed.entries[0].phrase, "測試");
//! ```

mod decode;
pub mod error;
mod parse;

use std::path::Path;

pub use decode::decode_utf16;
pub use error::{Error, Result};
pub use parse::{LineOutcome, parse_line};
use zhuyin_core::LexiconEntry;

// ─── Public types
// ─────────────────────────────────────────────────────────────

/// Per-run counters, mainly for the summary printed before import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
  pub lines:     usize,
  pub blank:     usize,
  pub malformed: usize,
  pub entries:   usize,
}

/// Entries in file order plus the counters collected while reading them.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
  pub entries: Vec<LexiconEntry>,
  pub stats:   ParseStats,
}

// ─── Public API
// ───────────────────────────────────────────────────────────────

/// Parse already-decoded lexicon text.
///
/// Blank and malformed lines are skipped; parsing never fails.
pub fn parse_str(text: &str) -> Parsed {
  let mut parsed = Parsed::default();

  for (i, line) in text.split('\n').enumerate() {
    parsed.stats.lines += 1;
    match parse_line(line) {
      LineOutcome::Entry(entry) => parsed.entries.push(entry),
      LineOutcome::Blank => parsed.stats.blank += 1,
      LineOutcome::Malformed => {
        parsed.stats.malformed += 1;
        tracing::debug!(line = i + 1, "skipping line without a phrase/phonetic separator");
      }
    }
  }

  parsed.stats.entries = parsed.entries.len();
  parsed
}

/// Decode UTF-16 bytes and parse them.
pub fn parse_bytes(bytes: &[u8]) -> Result<Parsed> {
  let text = decode_utf16(bytes)?;
  Ok(parse_str(&text))
}

/// Read and parse the lexicon file at `path`.
pub fn read_lexicon(path: impl AsRef<Path>) -> Result<Parsed> {
  let path = path.as_ref();
  let bytes = std::fs::read(path).map_err(|source| Error::Read {
    path: path.to_path_buf(),
    source,
  })?;
  let parsed = parse_bytes(&bytes)?;
  tracing::info!(
    path = %path.display(),
    entries = parsed.stats.entries,
    malformed = parsed.stats.malformed,
    "read lexicon"
  );
  Ok(parsed)
}

//! The fixed-shape `userphrase_v1` row.

use serde::{Deserialize, Serialize};

/// Number of phone columns in `userphrase_v1`.
pub const PHONE_SLOTS: usize = 11;

/// Constant columns written with every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDefaults {
  pub time:      i64,
  pub user_freq: i64,
  pub max_freq:  i64,
  pub orig_freq: i64,
}

impl Default for RowDefaults {
  fn default() -> Self {
    Self { time: 926, user_freq: 1, max_freq: 1, orig_freq: 1 }
  }
}

/// One encoded phrase, column-for-column with `userphrase_v1`.
///
/// `length` is the true syllable count and may exceed [`PHONE_SLOTS`]; in that
/// case only the first eleven codes are kept. Slots past `length` are `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedRow {
  pub time:      i64,
  pub user_freq: i64,
  pub max_freq:  i64,
  pub orig_freq: i64,
  pub length:    usize,
  pub phones:    [u32; PHONE_SLOTS],
  pub phrase:    String,
}

impl EncodedRow {
  /// Whether the phrase had more syllables than there are phone columns.
  pub fn is_truncated(&self) -> bool { self.length > PHONE_SLOTS }

  /// The populated prefix of [`phones`](Self::phones).
  pub fn stored_phones(&self) -> &[u32] {
    &self.phones[..self.length.min(PHONE_SLOTS)]
  }
}

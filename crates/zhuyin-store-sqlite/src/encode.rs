//! Conversions between [`EncodedRow`] and SQLite column values.
//!
//! Every column is stored as `INTEGER` except `phrase`. Phone codes are
//! `u32` in memory and read back with a range check.

use zhuyin_core::{EncodedRow, PHONE_SLOTS};

use crate::{Error, Result};

// ─── Columns ─────────────────────────────────────────────────────────────────

pub fn encode_length(length: usize) -> i64 {
  i64::try_from(length).unwrap_or(i64::MAX)
}

fn decode_length(value: i64) -> Result<usize> {
  usize::try_from(value).map_err(|_| Error::OutOfRange { column: "length", value })
}

fn decode_phone(column: &'static str, value: i64) -> Result<u32> {
  u32::try_from(value).map_err(|_| Error::OutOfRange { column, value })
}

const PHONE_COLUMNS: [&str; PHONE_SLOTS] = [
  "phone_0", "phone_1", "phone_2", "phone_3", "phone_4", "phone_5",
  "phone_6", "phone_7", "phone_8", "phone_9", "phone_10",
];

// ─── Row types ───────────────────────────────────────────────────────────────

/// Values read directly from a `userphrase_v1` row.
pub struct RawRow {
  pub time:      i64,
  pub user_freq: i64,
  pub max_freq:  i64,
  pub orig_freq: i64,
  pub length:    i64,
  pub phones:    [i64; PHONE_SLOTS],
  pub phrase:    String,
}

impl RawRow {
  /// Read the columns in [`SELECT_PHRASES`](crate::schema::SELECT_PHRASES)
  /// order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    let mut phones = [0i64; PHONE_SLOTS];
    for (i, phone) in phones.iter_mut().enumerate() {
      *phone = row.get(5 + i)?;
    }
    Ok(Self {
      time: row.get(0)?,
      user_freq: row.get(1)?,
      max_freq: row.get(2)?,
      orig_freq: row.get(3)?,
      length: row.get(4)?,
      phones,
      phrase: row.get(16)?,
    })
  }

  pub fn into_encoded(self) -> Result<EncodedRow> {
    let mut phones = [0u32; PHONE_SLOTS];
    for (i, (slot, value)) in phones.iter_mut().zip(self.phones).enumerate() {
      *slot = decode_phone(PHONE_COLUMNS[i], value)?;
    }

    Ok(EncodedRow {
      time: self.time,
      user_freq: self.user_freq,
      max_freq: self.max_freq,
      orig_freq: self.orig_freq,
      length: decode_length(self.length)?,
      phones,
      phrase: self.phrase,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(length: i64, phones: [i64; PHONE_SLOTS]) -> RawRow {
    RawRow {
      time: 926,
      user_freq: 1,
      max_freq: 1,
      orig_freq: 1,
      length,
      phones,
      phrase: "測試".into(),
    }
  }

  #[test]
  fn decodes_valid_row() {
    let mut phones = [0; PHONE_SLOTS];
    phones[0] = 10268;
    phones[1] = 8708;
    let row = raw(2, phones).into_encoded().unwrap();
    assert_eq!(row.length, 2);
    assert_eq!(row.stored_phones(), &[10268, 8708]);
  }

  #[test]
  fn negative_phone_is_out_of_range() {
    let mut phones = [0; PHONE_SLOTS];
    phones[3] = -1;
    let err = raw(4, phones).into_encoded().unwrap_err();
    assert!(matches!(err, Error::OutOfRange { column: "phone_3", value: -1 }));
  }

  #[test]
  fn negative_length_is_out_of_range() {
    let err = raw(-2, [0; PHONE_SLOTS]).into_encoded().unwrap_err();
    assert!(matches!(err, Error::OutOfRange { column: "length", .. }));
  }

  #[test]
  fn length_encodes_as_integer() {
    assert_eq!(encode_length(13), 13);
  }
}

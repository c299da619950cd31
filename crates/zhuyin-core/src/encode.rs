//! Lexicon entry → [`EncodedRow`].
//!
//! Pipeline:
//!   phonetic string
//!     └─ split(' ')          → syllables
//!          └─ pack_syllable()  → one code per syllable (sum of symbol codes)
//!               └─ Encoder::encode() → 17-column row, 11 phone slots

use crate::{
  entry::LexiconEntry,
  row::{EncodedRow, PHONE_SLOTS, RowDefaults},
  symbol::lookup,
};

/// Sum of the codes of every symbol in `syllable`.
///
/// Unknown characters add nothing, so a syllable with no recognised symbol
/// packs to `0`.
pub fn pack_syllable(syllable: &str) -> u32 {
  syllable
    .chars()
    .fold(0u32, |acc, c| acc.saturating_add(lookup(c)))
}

/// One packed code per space-separated syllable, in order.
pub fn encode_phonetic(phonetic: &str) -> Vec<u32> {
  phonetic.split(' ').map(pack_syllable).collect()
}

/// Builds rows with a fixed set of constant columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
  defaults: RowDefaults,
}

impl Encoder {
  pub fn new(defaults: RowDefaults) -> Self { Self { defaults } }

  pub fn defaults(&self) -> RowDefaults { self.defaults }

  pub fn encode(&self, entry: &LexiconEntry) -> EncodedRow {
    let codes = encode_phonetic(&entry.phonetic);

    let mut phones = [0u32; PHONE_SLOTS];
    for (slot, code) in phones.iter_mut().zip(&codes) {
      *slot = *code;
    }

    EncodedRow {
      time: self.defaults.time,
      user_freq: self.defaults.user_freq,
      max_freq: self.defaults.max_freq,
      orig_freq: self.defaults.orig_freq,
      length: codes.len(),
      phones,
      phrase: entry.phrase.clone(),
    }
  }

  pub fn encode_all(&self, entries: &[LexiconEntry]) -> Vec<EncodedRow> {
    entries.iter().map(|e| self.encode(e)).collect()
  }
}

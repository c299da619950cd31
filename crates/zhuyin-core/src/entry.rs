//! A single parsed lexicon line.

use serde::{Deserialize, Serialize};

/// A phrase and its pronunciation, as read from the lexicon.
///
/// `phonetic` holds one syllable per space-separated token, e.g. `ㄘㄜˋ ㄕˋ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
  pub phrase:   String,
  pub phonetic: String,
}

impl LexiconEntry {
  pub fn new(phrase: impl Into<String>, phonetic: impl Into<String>) -> Self {
    Self { phrase: phrase.into(), phonetic: phonetic.into() }
  }

  /// Syllable tokens in order; an empty token is still a syllable.
  pub fn syllables(&self) -> impl Iterator<Item = &str> {
    self.phonetic.split(' ')
  }
}

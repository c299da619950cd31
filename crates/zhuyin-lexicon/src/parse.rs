//! Line-level lexicon parser.
//!
//! A line is `<phrase><two spaces><syllable> <syllable> ...`. Full-width
//! spaces are noise from the exporting tool and are dropped before splitting.

use zhuyin_core::LexiconEntry;

/// U+3000 IDEOGRAPHIC SPACE.
const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Separator between the phrase and its phonetic string.
const FIELD_SEPARATOR: &str = "  ";

/// What a single line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
  Entry(LexiconEntry),
  /// Nothing left after stripping.
  Blank,
  /// No two-space separator.
  Malformed,
}

/// Parse one line (without its trailing `\n`).
pub fn parse_line(line: &str) -> LineOutcome {
  let cleaned: String = line.chars().filter(|&c| c != FULL_WIDTH_SPACE).collect();
  let cleaned = cleaned.trim();
  if cleaned.is_empty() {
    return LineOutcome::Blank;
  }

  let mut fields = cleaned.split(FIELD_SEPARATOR);
  let phrase = fields.next().unwrap_or_default();
  let rest: Vec<&str> = fields.collect();
  if rest.is_empty() {
    return LineOutcome::Malformed;
  }

  // Extra double spaces inside the phonetic part collapse to single ones.
  LineOutcome::Entry(LexiconEntry::new(phrase, rest.join(" ")))
}

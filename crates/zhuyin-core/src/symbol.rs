//! Zhuyin symbol → bit-field code table.
//!
//! Each category owns a disjoint bit range, so the codes of one syllable's
//! symbols can be combined with plain addition:
//!
//! | category | bits    | values                  |
//! |----------|---------|-------------------------|
//! | initial  | 9..=14  | multiples of 512        |
//! | medial   | 7..=8   | 128, 256, 384           |
//! | final    | 3..=6   | multiples of 8, 8..=104 |
//! | tone     | 0..=2   | 0..=4                   |
//!
//! The numbers are a compatibility contract with the input-method engine that
//! reads the generated store.

use std::{collections::HashMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

// ─── Categories ──────────────────────────────────────────────────────────────

/// Position of a symbol inside a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
  /// Consonant onset (聲母).
  Initial,
  /// Glide between initial and final (介音).
  Medial,
  /// Rhyme (韻母).
  Final,
  /// Tone mark (聲調).
  Tone,
}

/// One row of the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
  pub symbol:   char,
  pub code:     u32,
  pub category: SymbolCategory,
}

const fn sym(symbol: char, code: u32, category: SymbolCategory) -> Symbol {
  Symbol { symbol, code, category }
}

use SymbolCategory::{Final, Initial, Medial, Tone};

// ─── Table ───────────────────────────────────────────────────────────────────

/// Every supported symbol, grouped by category.
#[rustfmt::skip]
pub static SYMBOLS: [Symbol; 42] = [
  sym('ㄅ', 512, Initial),  sym('ㄆ', 1024, Initial), sym('ㄇ', 1536, Initial),
  sym('ㄈ', 2048, Initial), sym('ㄉ', 2560, Initial), sym('ㄊ', 3072, Initial),
  sym('ㄋ', 3584, Initial), sym('ㄌ', 4096, Initial), sym('ㄍ', 4608, Initial),
  sym('ㄎ', 5120, Initial), sym('ㄏ', 5632, Initial), sym('ㄐ', 6144, Initial),
  sym('ㄑ', 6656, Initial), sym('ㄒ', 7168, Initial), sym('ㄓ', 7680, Initial),
  sym('ㄔ', 8192, Initial), sym('ㄕ', 8704, Initial), sym('ㄖ', 9216, Initial),
  sym('ㄗ', 9728, Initial), sym('ㄘ', 10240, Initial), sym('ㄙ', 10752, Initial),

  sym('ㄧ', 128, Medial), sym('ㄨ', 256, Medial), sym('ㄩ', 384, Medial),

  sym('ㄚ', 8, Final),  sym('ㄛ', 16, Final), sym('ㄜ', 24, Final),
  sym('ㄝ', 32, Final), sym('ㄞ', 40, Final), sym('ㄟ', 48, Final),
  sym('ㄠ', 56, Final), sym('ㄡ', 64, Final), sym('ㄢ', 72, Final),
  sym('ㄣ', 80, Final), sym('ㄤ', 88, Final), sym('ㄥ', 96, Final),
  sym('ㄦ', 104, Final),

  // ˉ marks the first tone (or no tone) and carries no bits.
  sym('ˉ', 0, Tone), sym('˙', 1, Tone), sym('ˊ', 2, Tone),
  sym('ˇ', 3, Tone), sym('ˋ', 4, Tone),
];

static BY_SYMBOL: LazyLock<HashMap<char, Symbol>> =
  LazyLock::new(|| SYMBOLS.iter().map(|s| (s.symbol, *s)).collect());

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// Code for `symbol`; anything outside the alphabet contributes `0`.
pub fn lookup(symbol: char) -> u32 {
  BY_SYMBOL.get(&symbol).map_or(0, |s| s.code)
}

/// Category of `symbol`, or `None` if it is not part of the alphabet.
pub fn category(symbol: char) -> Option<SymbolCategory> {
  BY_SYMBOL.get(&symbol).map(|s| s.category)
}

//! Core types for converting a Zhuyin lexicon into user-phrase rows.
//!
//! This crate has no I/O. The lexicon codec (`zhuyin-lexicon`) produces
//! [`LexiconEntry`] values, the [`Encoder`] turns them into [`EncodedRow`]s,
//! and a [`PhraseStore`] backend (`zhuyin-store-sqlite`) persists them.

pub mod encode;
pub mod entry;
pub mod error;
pub mod row;
pub mod store;
pub mod symbol;

pub use encode::{Encoder, encode_phonetic, pack_syllable};
pub use entry::LexiconEntry;
pub use error::{Error, Result};
pub use row::{EncodedRow, PHONE_SLOTS, RowDefaults};
pub use store::{DuplicatePolicy, ImportReport, PhraseStore, RejectedRow};
pub use symbol::{SymbolCategory, lookup};

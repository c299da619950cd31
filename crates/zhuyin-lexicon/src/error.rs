//! Error types for the lexicon reader.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read {path}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("UTF-16 input has an odd number of bytes ({0})")]
  OddLength(usize),

  /// `offset` is the byte offset of the offending code unit.
  #[error("unpaired UTF-16 surrogate 0x{unit:04X} at byte {offset}")]
  UnpairedSurrogate { unit: u16, offset: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

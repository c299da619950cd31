//! Error types for `zhuyin-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown duplicate policy: {0:?} (expected \"abort\" or \"skip\")")]
  UnknownDuplicatePolicy(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

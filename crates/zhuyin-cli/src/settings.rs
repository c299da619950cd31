//! Import settings, layered from an optional TOML file and `ZHUYIN_*`
//! environment variables.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;
use zhuyin_core::{DuplicatePolicy, RowDefaults};

/// Shape of `zhuyin-import.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
  pub time:         i64,
  pub user_freq:    i64,
  pub max_freq:     i64,
  pub orig_freq:    i64,
  pub on_duplicate: DuplicatePolicy,
}

impl Default for ImportConfig {
  fn default() -> Self {
    let d = RowDefaults::default();
    Self {
      time:         d.time,
      user_freq:    d.user_freq,
      max_freq:     d.max_freq,
      orig_freq:    d.orig_freq,
      on_duplicate: DuplicatePolicy::default(),
    }
  }
}

impl ImportConfig {
  /// Read `path` if it exists, then apply `ZHUYIN_*` overrides.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("ZHUYIN"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise ImportConfig")
  }

  pub fn row_defaults(&self) -> RowDefaults {
    RowDefaults {
      time:      self.time,
      user_freq: self.user_freq,
      max_freq:  self.max_freq,
      orig_freq: self.orig_freq,
    }
  }
}

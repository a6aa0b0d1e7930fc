// crates/ryonkt-core/src/errors.rs
use thiserror::Error;

use crate::domain::WorkId;
use crate::ports::StoreError;

/// Error genérico del núcleo de ryonkt.
///
/// Las capas superiores (CLI, render, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("store error: {0}")]
  Store(#[from] StoreError),

  #[error("corrupt content under key `{key}`: {source}")]
  CorruptContent {
    key: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("serialize error: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("work {0} not found")]
  NotFound(WorkId),

  #[error("no free work id left")]
  IdsExhausted,
}

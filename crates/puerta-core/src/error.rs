//! Error types for `puerta-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Registration found an existing identity with the same username or
  /// email. The message is suitable for direct display to the end user.
  #[error("{0}")]
  DuplicateIdentity(String),

  /// Login found no identity matching the supplied identifier + password.
  #[error("invalid username/email or password")]
  InvalidCredentials,

  /// The storage substrate failed to read or write.
  #[error("storage unavailable: {0}")]
  StorageUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A persisted entry was not well-formed JSON. Propagated to the caller
  /// rather than silently dropping the stored data.
  #[error("storage corrupt: {0}")]
  StorageCorrupt(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

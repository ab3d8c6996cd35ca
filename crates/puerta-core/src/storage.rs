//! The `Storage` capability trait and the persisted key layout.
//!
//! The trait is implemented by storage backends (e.g. `puerta-store-sqlite`).
//! The auth service depends on this abstraction, not on any concrete
//! backend, so tests can substitute a plain in-memory double.

use std::future::Future;

/// Key under which the identity collection is persisted, as a JSON array of
/// identity records.
pub const USERS_KEY: &str = "puertacaribe_users";

/// Key under which the active session is persisted, as a JSON object.
/// Absent when no session exists.
pub const SESSION_KEY: &str = "puertacaribe_session";

/// Abstraction over a single-origin key-value substrate — the browser
/// local-storage analogue.
///
/// Values are opaque serialised text. The substrate provides no
/// transactional isolation; callers must serialise their own
/// read-modify-write sequences.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait Storage: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the value stored under `key`. Returns `None` when absent.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Write `value` under `key`, replacing any previous value in full.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Delete the value under `key`. Deleting an absent key is a no-op.
  fn remove<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

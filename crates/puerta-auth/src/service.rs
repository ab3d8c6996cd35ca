//! [`AuthService`] — registration, login, logout, and session queries.

use std::time::Duration;

use chrono::Utc;
use puerta_core::{
  Error, Result,
  identity::{Credentials, Identity, IdentityProfile, NewIdentity},
  session::Session,
  storage::{SESSION_KEY, Storage, USERS_KEY},
};
use tokio::sync::Mutex;

use crate::header::HeaderView;

/// The session & identity store.
///
/// Register and login suspend for a configurable simulated latency before
/// touching storage, standing in for a network round-trip. The
/// read-modify-write on the identity collection is serialised behind a
/// mutex, so two interleaved registrations cannot both pass the duplicate
/// check.
///
/// Passwords are persisted verbatim, in plain text. This is a mock
/// credential store; do not point it at real secrets.
pub struct AuthService<S: Storage> {
  storage:    S,
  latency:    Duration,
  write_lock: Mutex<()>,
}

impl<S: Storage> AuthService<S> {
  /// A service with no simulated latency.
  pub fn new(storage: S) -> Self {
    Self::with_latency(storage, Duration::ZERO)
  }

  /// A service that suspends for `latency` before each register/login.
  pub fn with_latency(storage: S, latency: Duration) -> Self {
    Self {
      storage,
      latency,
      write_lock: Mutex::new(()),
    }
  }

  // ── Operations ──────────────────────────────────────────────────────────

  /// Register `candidate` and sign it in, replacing any prior session.
  ///
  /// Fails with [`Error::DuplicateIdentity`] when an identity with the same
  /// username or email already exists (exact, case-sensitive match); in that
  /// case nothing is written.
  pub async fn register(&self, candidate: NewIdentity) -> Result<IdentityProfile> {
    tokio::time::sleep(self.latency).await;

    // Hold the lock across check-then-append so a concurrent registration
    // cannot slip a colliding identity in between.
    let _guard = self.write_lock.lock().await;

    let mut identities = self.load_identities().await?;
    let collision = identities
      .iter()
      .any(|i| i.username == candidate.username || i.email == candidate.email);
    if collision {
      tracing::warn!(
        username = %candidate.username,
        "registration rejected: duplicate identity"
      );
      return Err(Error::DuplicateIdentity(
        "an account with that username or email already exists".into(),
      ));
    }

    let created_at = Utc::now();
    // Ids derive from the creation timestamp, bumped past the newest
    // existing id so two registrations inside the same millisecond stay
    // distinct. Ids are strictly increasing within one store.
    let id = match identities.last() {
      Some(last) => created_at.timestamp_millis().max(last.id + 1),
      None => created_at.timestamp_millis(),
    };
    let identity = Identity {
      id,
      username: candidate.username,
      email: candidate.email,
      password: candidate.password,
      first_name: candidate.first_name,
      last_name: candidate.last_name,
      created_at,
    };

    identities.push(identity.clone());
    self.persist_identities(&identities).await?;
    self.set_session(&identity).await?;

    tracing::info!(username = %identity.username, id = identity.id, "identity registered");
    Ok(IdentityProfile::from(&identity))
  }

  /// Sign in with a username or email plus password, replacing any prior
  /// session.
  ///
  /// Fails with [`Error::InvalidCredentials`] when no identity matches; no
  /// state changes, and any number of further attempts is permitted.
  pub async fn login(&self, credentials: Credentials) -> Result<IdentityProfile> {
    tokio::time::sleep(self.latency).await;

    let identities = self.load_identities().await?;
    let found = identities.iter().find(|i| {
      (i.username == credentials.identifier || i.email == credentials.identifier)
        && i.password == credentials.password
    });

    let Some(identity) = found else {
      tracing::warn!(
        identifier = %credentials.identifier,
        "login rejected: invalid credentials"
      );
      return Err(Error::InvalidCredentials);
    };

    self.set_session(identity).await?;

    tracing::info!(username = %identity.username, "login succeeded");
    Ok(IdentityProfile::from(identity))
  }

  /// Clear the active session. A no-op success when no session exists.
  pub async fn logout(&self) -> Result<()> {
    self.storage.remove(SESSION_KEY).await.map_err(storage_err)?;
    tracing::info!("session cleared");
    Ok(())
  }

  /// The current session, or `None` when signed out. Absence is never an
  /// error.
  pub async fn session(&self) -> Result<Option<Session>> {
    let raw = self.storage.get(SESSION_KEY).await.map_err(storage_err)?;
    match raw {
      Some(json) => Ok(Some(serde_json::from_str(&json)?)),
      None => Ok(None),
    }
  }

  pub async fn is_authenticated(&self) -> Result<bool> {
    Ok(self.session().await?.is_some())
  }

  /// The header configuration for the current session state. Re-invoking
  /// with an unchanged session yields the same view.
  pub async fn header_view(&self) -> Result<HeaderView> {
    Ok(HeaderView::for_session(self.session().await?.as_ref()))
  }

  // ── Internals ───────────────────────────────────────────────────────────

  async fn load_identities(&self) -> Result<Vec<Identity>> {
    let raw = self.storage.get(USERS_KEY).await.map_err(storage_err)?;
    match raw {
      Some(json) => Ok(serde_json::from_str(&json)?),
      None => Ok(Vec::new()),
    }
  }

  async fn persist_identities(&self, identities: &[Identity]) -> Result<()> {
    let json = serde_json::to_string(identities)?;
    self.storage.set(USERS_KEY, json).await.map_err(storage_err)
  }

  /// Snapshot `identity` into the session slot, overwriting any prior
  /// session in full (never merged).
  async fn set_session(&self, identity: &Identity) -> Result<Session> {
    let session = Session::for_identity(identity, Utc::now());
    let json = serde_json::to_string(&session)?;
    self
      .storage
      .set(SESSION_KEY, json)
      .await
      .map_err(storage_err)?;
    Ok(session)
  }
}

fn storage_err<E>(err: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::StorageUnavailable(Box::new(err))
}

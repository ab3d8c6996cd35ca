//! Identity records — registered accounts of the Puerta Caribe site.
//!
//! Identities are created only by registration and are never updated or
//! deleted. They persist for the lifetime of the storage substrate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The password is stored verbatim, in plain text. This is a mock credential
/// store; do not point it at real credentials.
///
/// Serialised with camelCase field names, matching the persisted JSON layout
/// of browser-local-storage records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
  /// Milliseconds since the Unix epoch at creation time. Not guaranteed
  /// unique for two registrations within the same millisecond.
  pub id:         i64,
  pub username:   String,
  pub email:      String,
  /// Plain text — see the type-level warning.
  pub password:   String,
  pub first_name: String,
  pub last_name:  String,
  /// Set once at creation; immutable thereafter.
  pub created_at: DateTime<Utc>,
}

/// Input to registration.
///
/// All fields are required non-empty; validating that is the presentation
/// layer's job, the store does not re-validate.
#[derive(Debug, Clone)]
pub struct NewIdentity {
  pub username:   String,
  pub email:      String,
  pub password:   String,
  pub first_name: String,
  pub last_name:  String,
}

/// An identity with the password stripped — the success value of register
/// and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProfile {
  pub id:         i64,
  pub username:   String,
  pub email:      String,
  pub first_name: String,
  pub last_name:  String,
  pub created_at: DateTime<Utc>,
}

impl From<&Identity> for IdentityProfile {
  fn from(identity: &Identity) -> Self {
    Self {
      id:         identity.id,
      username:   identity.username.clone(),
      email:      identity.email.clone(),
      first_name: identity.first_name.clone(),
      last_name:  identity.last_name.clone(),
      created_at: identity.created_at,
    }
  }
}

/// Login input. The identifier is matched against both username and email;
/// all comparisons are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct Credentials {
  pub identifier: String,
  pub password:   String,
}

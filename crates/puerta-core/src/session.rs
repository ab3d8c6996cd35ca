//! Session records — the denormalised snapshot of the signed-in identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// The currently authenticated identity. At most one session exists per
/// storage substrate.
///
/// The fields are copied from the identity at login time — a snapshot, not a
/// live reference. A session never expires; it is destroyed only by logout
/// or replaced wholesale by the next successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
  pub user_id:      i64,
  pub username:     String,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub logged_in_at: DateTime<Utc>,
}

impl Session {
  /// Build the snapshot for `identity`, stamped with `logged_in_at`.
  pub fn for_identity(identity: &Identity, logged_in_at: DateTime<Utc>) -> Self {
    Self {
      user_id: identity.id,
      username: identity.username.clone(),
      first_name: identity.first_name.clone(),
      last_name: identity.last_name.clone(),
      email: identity.email.clone(),
      logged_in_at,
    }
  }
}

//! [`HeaderView`] — the data-level projection of the page-header UI state.
//!
//! The store exposes only the decision — which name to display and whether
//! the logout affordance shows — and leaves rendering to presentation code.

use puerta_core::session::Session;

/// Fixed label shown in place of a name when no session exists.
pub const SIGN_IN_LABEL: &str = "Iniciar Sesión";

/// One of the two header configurations, selected from session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
  /// A session exists: show the display name and the logout affordance.
  /// Activating logout clears the session; the presentation layer then
  /// returns to the landing page.
  SignedIn { display_name: String },
  /// No session: show the fixed sign-in label; no logout affordance.
  SignedOut,
}

impl HeaderView {
  /// Select the configuration for `session`. Deterministic, and idempotent
  /// with respect to repeated invocation on unchanged state.
  pub fn for_session(session: Option<&Session>) -> Self {
    match session {
      Some(s) => {
        let display_name = if s.first_name.is_empty() {
          s.username.clone()
        } else {
          s.first_name.clone()
        };
        Self::SignedIn { display_name }
      }
      None => Self::SignedOut,
    }
  }

  /// The text shown in the header's account slot.
  pub fn display_name(&self) -> &str {
    match self {
      Self::SignedIn { display_name } => display_name,
      Self::SignedOut => SIGN_IN_LABEL,
    }
  }

  /// Whether the logout affordance is visible.
  pub fn shows_logout(&self) -> bool {
    matches!(self, Self::SignedIn { .. })
  }
}

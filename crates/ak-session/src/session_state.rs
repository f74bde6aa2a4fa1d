use ak_core::Identity;

/// Current state of the client session
///
/// Exactly one variant holds at any time. The identity and the token
/// live inside `Authenticated`, so a half-authenticated session is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Bootstrap has not run yet; consumers should hold rendering
    /// instead of flashing a signed-out view
    Initializing,

    /// No usable identity
    Unauthenticated,

    /// Signed in, with the token the identity was derived from
    Authenticated { identity: Identity, token: String },
}

impl SessionState {
    pub fn is_initializing(&self) -> bool {
        matches!(self, SessionState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated { identity, .. } => Some(identity),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}

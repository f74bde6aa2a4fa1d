use crate::{Result as SessionResult, SessionError, SessionState};

use std::sync::Arc;

use ak_core::{Identity, ProfileUpdate};
use ak_store::TokenStore;
use ak_token::TokenDecoder;
use log::{info, warn};
use parking_lot::Mutex;

/// Callback invoked with a snapshot of the state after each transition
pub type Subscriber = Arc<dyn Fn(&SessionState) + Send + Sync>;

/// Owns the signed-in/signed-out state for one process
///
/// All transitions run to completion before anything else observes the
/// store: the persisted token is written (or cleared) first, then the
/// in-memory state swaps, then subscribers run synchronously with a
/// snapshot. Subscribers are called outside the state lock, so they may
/// read the store freely.
///
/// Construct one store per application and share it behind an `Arc`.
pub struct SessionStore {
    decoder: TokenDecoder,
    tokens: Arc<dyn TokenStore>,
    inner: Mutex<Inner>,
    subscribers: Mutex<Vec<Subscriber>>,
}

struct Inner {
    state: SessionState,
    generation: u64,
    bootstrapped: bool,
}

impl SessionStore {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            decoder: TokenDecoder::new(),
            tokens,
            inner: Mutex::new(Inner {
                state: SessionState::Initializing,
                generation: 0,
                bootstrapped: false,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Restore the session from persisted storage
    ///
    /// Runs once per store, synchronously and without the network. A
    /// missing, expired, or malformed token leaves the session signed
    /// out; unusable tokens are purged so the next launch starts clean.
    /// Calling this a second time is a warned no-op.
    pub fn bootstrap(&self) -> SessionState {
        let next = {
            let mut inner = self.inner.lock();
            if inner.bootstrapped {
                warn!("bootstrap called more than once; keeping current state");
                return inner.state.clone();
            }

            let next = self.derive_from_persisted();
            inner.state = next.clone();
            inner.generation += 1;
            inner.bootstrapped = true;
            next
        };

        self.notify(&next);
        next
    }

    /// Re-derive the session from whatever is persisted right now
    ///
    /// Picks up a token written by another process and collapses the
    /// session when the persisted token has expired or vanished. No-op
    /// (and no notification) when nothing changed.
    pub fn refresh(&self) -> SessionState {
        let next = self.derive_from_persisted();
        self.commit(next.clone());
        next
    }

    /// Validate and adopt a freshly issued token
    ///
    /// The token is persisted before the in-memory transition, so the
    /// new state can always be re-derived from storage. On any error the
    /// previous state is untouched.
    #[track_caller]
    pub fn login(&self, token: &str) -> SessionResult<Identity> {
        let now = chrono::Utc::now().timestamp();
        let claims = self
            .decoder
            .validate(token, now)
            .map_err(|e| SessionError::invalid_token(e))?;

        self.tokens
            .set(token)
            .map_err(|e| SessionError::store(e))?;

        let identity = claims.to_identity();
        info!("Signed in as user {}", identity.id);

        self.commit(SessionState::Authenticated {
            identity: identity.clone(),
            token: token.to_string(),
        });

        Ok(identity)
    }

    /// Complete a login that started when `observed` was the current
    /// generation
    ///
    /// Returns `Ok(None)` without touching any state when another
    /// transition has happened since, so the most recent transition wins
    /// over a stale in-flight response. Read [`Self::generation`] before
    /// issuing the network call and pass it here when the response
    /// arrives.
    #[track_caller]
    pub fn login_if_current(
        &self,
        token: &str,
        observed: u64,
    ) -> SessionResult<Option<Identity>> {
        {
            let inner = self.inner.lock();
            if inner.generation != observed {
                info!(
                    "Discarding stale login response (generation {} -> {})",
                    observed, inner.generation
                );
                return Ok(None);
            }
        }

        self.login(token).map(Some)
    }

    /// End the session locally
    ///
    /// Clears the persisted token and the in-memory identity. Idempotent
    /// from any state; a failure to clear storage is logged, never
    /// surfaced, so teardown always completes.
    pub fn logout(&self) {
        self.clear_persisted();

        if self.commit(SessionState::Unauthenticated) {
            info!("Signed out");
        }
    }

    /// Merge a profile patch into the current identity
    ///
    /// The token is left untouched; the auth service does not reissue
    /// one for a profile edit. Fails when no session is active.
    #[track_caller]
    pub fn update_identity(&self, update: &ProfileUpdate) -> SessionResult<Identity> {
        let (identity, token) = {
            let inner = self.inner.lock();
            match &inner.state {
                SessionState::Authenticated { identity, token } => {
                    (identity.clone(), token.clone())
                }
                _ => return Err(SessionError::not_authenticated()),
            }
        };

        let mut updated = identity;
        updated.merge(update);

        self.commit(SessionState::Authenticated {
            identity: updated.clone(),
            token,
        });

        Ok(updated)
    }

    /// Register a callback for state transitions
    ///
    /// Subscribers run synchronously, in subscription order, with a
    /// snapshot of the new state. Transitions that leave the state
    /// unchanged do not notify.
    pub fn subscribe(&self, subscriber: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.subscribers.lock().push(Arc::new(subscriber));
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.inner.lock().state.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.lock().state.identity().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.lock().state.token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().state.is_authenticated()
    }

    pub fn is_initializing(&self) -> bool {
        self.inner.lock().state.is_initializing()
    }

    /// Monotonic counter, bumped on every completed transition
    pub fn generation(&self) -> u64 {
        self.inner.lock().generation
    }

    /// Decode the persisted token into a session state, purging storage
    /// when the token is present but unusable
    fn derive_from_persisted(&self) -> SessionState {
        let persisted = match self.tokens.get() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read persisted token: {e}");
                None
            }
        };

        let Some(token) = persisted else {
            return SessionState::Unauthenticated;
        };

        let now = chrono::Utc::now().timestamp();
        match self.decoder.validate(&token, now) {
            Ok(claims) => {
                info!("Restored session for user {}", claims.sub);
                SessionState::Authenticated {
                    identity: claims.to_identity(),
                    token,
                }
            }
            Err(e) => {
                info!("Persisted token unusable: {e}");
                self.clear_persisted();
                SessionState::Unauthenticated
            }
        }
    }

    /// Swap in a new state under the lock, then notify with a snapshot
    /// once the lock is released; returns whether anything changed
    fn commit(&self, next: SessionState) -> bool {
        let changed = {
            let mut inner = self.inner.lock();
            if inner.state == next {
                false
            } else {
                inner.state = next.clone();
                inner.generation += 1;
                true
            }
        };

        if changed {
            self.notify(&next);
        }

        changed
    }

    fn notify(&self, state: &SessionState) {
        // Snapshot the list so subscribers can subscribe or transition
        // without deadlocking
        let subscribers: Vec<Subscriber> = self.subscribers.lock().clone();
        for subscriber in &subscribers {
            subscriber(state);
        }
    }

    fn clear_persisted(&self) {
        if let Err(e) = self.tokens.remove() {
            warn!("Could not clear persisted token: {e}");
        }
    }
}

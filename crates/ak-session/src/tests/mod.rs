mod persistence;

use crate::{SessionState, SessionStore};

use std::sync::Arc;

use ak_store::MemoryTokenStore;
use ak_token::Claims;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use parking_lot::Mutex;

pub(crate) fn mint_token(sub: i64, email: &str, expires_in_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub,
        email: email.to_string(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        iat: Some(now),
        exp: Some(now + expires_in_secs),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"session-test-secret"),
    )
    .expect("Failed to encode test token")
}

pub(crate) fn fresh_token() -> String {
    mint_token(7, "user@example.com", 3600)
}

pub(crate) fn memory_session() -> (Arc<MemoryTokenStore>, SessionStore) {
    let tokens = Arc::new(MemoryTokenStore::new());
    let session = SessionStore::new(tokens.clone());
    (tokens, session)
}

/// Collects every state a subscriber sees, in order
pub(crate) struct StateRecorder {
    seen: Arc<Mutex<Vec<SessionState>>>,
}

impl StateRecorder {
    pub(crate) fn install(session: &SessionStore) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let writer = seen.clone();
        session.subscribe(move |state| writer.lock().push(state.clone()));
        Self { seen }
    }

    pub(crate) fn states(&self) -> Vec<SessionState> {
        self.seen.lock().clone()
    }

    pub(crate) fn count(&self) -> usize {
        self.seen.lock().len()
    }
}

use crate::{Result as StoreResult, TokenStore};

use parking_lot::Mutex;

/// In-memory token store for tests and embedded use
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already present
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> StoreResult<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn set(&self, token: &str) -> StoreResult<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> StoreResult<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

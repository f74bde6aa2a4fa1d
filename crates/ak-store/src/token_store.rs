use crate::Result as StoreResult;

/// Single-slot persistence for the bearer token
///
/// A store holds at most one token, keyed by [`crate::TOKEN_KEY`].
/// Implementations must tolerate removal of an absent token; session
/// teardown runs unconditionally.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any
    fn get(&self) -> StoreResult<Option<String>>;

    /// Persist the token, replacing any previous value
    fn set(&self, token: &str) -> StoreResult<()>;

    /// Delete the persisted token; absent is not an error
    fn remove(&self) -> StoreResult<()>;
}

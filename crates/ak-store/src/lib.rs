pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod token_store;

pub use error::{Result, StoreError};
pub use file_store::FileTokenStore;
pub use memory_store::MemoryTokenStore;
pub use token_store::TokenStore;

/// File name of the persisted bearer token
pub const TOKEN_KEY: &str = "authToken";

#[cfg(test)]
mod tests;

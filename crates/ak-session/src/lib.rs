pub mod error;
pub mod session_state;
pub mod store;

pub use error::{Result, SessionError};
pub use session_state::SessionState;
pub use store::SessionStore;

#[cfg(test)]
mod tests;

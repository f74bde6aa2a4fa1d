pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::{GatewayError, Result};

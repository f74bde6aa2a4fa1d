pub mod claims;
pub mod decoder;
pub mod error;

pub use claims::Claims;
pub use decoder::{EXPIRY_BUFFER_SECS, TokenDecoder};
pub use error::{Result, TokenError};

#[cfg(test)]
mod tests;

pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::auth_response::AuthResponse;
pub use models::credentials::Credentials;
pub use models::identity::Identity;
pub use models::profile_update::ProfileUpdate;
pub use validation::CredentialValidator;

#[cfg(test)]
mod tests;

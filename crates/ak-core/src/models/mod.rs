pub mod auth_response;
pub mod credentials;
pub mod identity;
pub mod profile_update;

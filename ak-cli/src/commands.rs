use crate::error::{CliError, Result as CliResult};

use ak_core::{Credentials, ProfileUpdate};
use ak_gateway::AuthClient;
use ak_session::{SessionState, SessionStore};
use ak_token::TokenDecoder;
use clap::Subcommand;
use log::warn;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account (signs in when the service returns a token)
    Signup {
        /// Email address for the new account
        #[arg(long)]
        email: String,

        /// Password for the new account
        #[arg(long)]
        password: String,
    },

    /// Exchange credentials for a persisted session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and discard the stored token
    Logout,

    /// Show the signed-in user
    Whoami {
        /// Print the identity as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the account email and/or password
    UpdateProfile {
        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New password
        #[arg(long)]
        password: Option<String>,
    },
}

/// Create an account, adopting the returned token when the service
/// signs the account in immediately
pub(crate) async fn signup(
    client: &AuthClient,
    session: &SessionStore,
    email: &str,
    password: &str,
) -> CliResult<()> {
    let credentials = Credentials::new(email, password);
    credentials.validate()?;

    let response = client.signup(&credentials).await?;
    println!("{}", response.message);

    if let Some(token) = response.token {
        let identity = session.login(&token)?;
        println!("Signed in as {} (user {})", identity.email, identity.id);
    }

    Ok(())
}

/// Sign in; whichever transition completed most recently wins over a
/// stale response
pub(crate) async fn login(
    client: &AuthClient,
    session: &SessionStore,
    email: &str,
    password: &str,
) -> CliResult<()> {
    let credentials = Credentials::new(email, password);
    credentials.validate()?;

    let observed = session.generation();
    let response = client.login(&credentials).await?;

    let token = response
        .token
        .ok_or_else(|| CliError::usage("The service accepted the login but sent no token"))?;

    match session.login_if_current(&token, observed)? {
        Some(identity) => {
            println!("{}", response.message);
            println!("Signed in as {} (user {})", identity.email, identity.id);
            Ok(())
        }
        None => Err(CliError::usage(
            "Another sign-in finished first; keeping that session",
        )),
    }
}

/// Sign out locally even when the service call fails
pub(crate) async fn logout(client: &AuthClient, session: &SessionStore) -> CliResult<()> {
    if let Err(e) = client.logout().await {
        warn!("Server-side logout failed: {e}");
    }

    session.logout();
    println!("Signed out.");
    Ok(())
}

pub(crate) fn whoami(session: &SessionStore, json: bool) -> CliResult<()> {
    let SessionState::Authenticated { identity, token } = session.state() else {
        return Err(CliError::usage("Not signed in. Run `ak login` first."));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
        return Ok(());
    }

    println!("Signed in as {} (user {})", identity.email, identity.id);
    println!("Account created: {}", identity.created_at);

    if let Ok(claims) = TokenDecoder::new().decode(&token)
        && let Some(exp) = claims.exp
        && let Some(expires) = chrono::DateTime::from_timestamp(exp, 0)
    {
        println!("Token expires: {expires}");
    }

    Ok(())
}

/// Patch the account, folding an email change into the session
pub(crate) async fn update_profile(
    client: &AuthClient,
    session: &SessionStore,
    email: Option<String>,
    password: Option<String>,
) -> CliResult<()> {
    let identity = session
        .identity()
        .ok_or_else(|| CliError::usage("Not signed in. Run `ak login` first."))?;

    let update = ProfileUpdate { email, password }.normalized();
    update.validate()?;

    let response = client.update_profile(identity.id, &update).await?;
    println!("{}", response.message);

    // A password change never alters the identity; an email change does
    if update.email.is_some() {
        let refreshed = session.update_identity(&update)?;
        println!("Email is now {}", refreshed.email);
    }

    Ok(())
}

//! Login, logout and the session guard

use crate::api::GamificationApi;
use crate::config::LoginSettings;
use crate::store::KeyValueStore;
use crate::{ApiError, FarmError, Session};

/// Shown when the service rejects credentials without explaining why
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Log in and store the session.
///
/// The configured bypass credentials log in offline. Anything else is sent
/// to the service; the returned token and the submitted username become the
/// session.
pub async fn login<A>(
    api: &A,
    settings: &LoginSettings,
    store: &mut KeyValueStore,
    username: &str,
    password: &str,
) -> Result<Session, FarmError>
where
    A: GamificationApi + ?Sized,
{
    let session = if username == settings.bypass_username && password == settings.bypass_password
    {
        tracing::info!("Bypass login, skipping the service");
        Session::new(&settings.bypass_display_name, &settings.bypass_token)
    } else {
        let token = api
            .issue_token(username, password)
            .await
            .map_err(auth_failure)?;
        Session::new(username, token)
    };

    store.save_session(&session)?;
    tracing::info!("Logged in as {}", session.username);
    Ok(session)
}

/// Forget the stored session
pub fn logout(store: &mut KeyValueStore) -> Result<(), FarmError> {
    store.clear_session()?;
    tracing::info!("Logged out");
    Ok(())
}

/// The stored session, or [`FarmError::Unauthenticated`]
pub fn require_session(store: &KeyValueStore) -> Result<Session, FarmError> {
    store.session().ok_or(FarmError::Unauthenticated)
}

fn auth_failure(err: ApiError) -> FarmError {
    tracing::warn!("Login failed: {}", err);
    match err {
        ApiError::Status { description, .. } => FarmError::AuthFailure(
            description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
        ),
        other => FarmError::AuthFailure(other.to_string()),
    }
}

//! Integration tests for login, logout and the session guard

mod common;

use fazendinha::auth::{self, INVALID_CREDENTIALS};
use fazendinha::config::LoginSettings;
use fazendinha::store::{DAILY_REWARD_KEY, KeyValueStore};
use fazendinha::{ApiError, FarmError, Session};

use common::{FakeApi, temp_store};

#[tokio::test]
async fn test_bypass_login_never_calls_service() {
    let api = FakeApi::new();
    let (_dir, mut store) = temp_store();

    let session = auth::login(&api, &LoginSettings::default(), &mut store, "test", "test")
        .await
        .unwrap();

    assert_eq!(session, Session::new("Usuário Teste", "fake-test-token"));
    assert_eq!(store.session(), Some(session));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_remote_login_stores_token_and_username() {
    let api = FakeApi::new();
    let (dir, mut store) = temp_store();

    let session = auth::login(&api, &LoginSettings::default(), &mut store, "maria", "s3nha")
        .await
        .unwrap();

    assert_eq!(session, Session::new("maria", "token-for-maria"));
    assert_eq!(
        api.token_requests.lock().unwrap().as_slice(),
        [("maria".to_string(), "s3nha".to_string())]
    );

    // Survives a restart
    let reopened = KeyValueStore::open(dir.path().join("storage.json")).unwrap();
    assert_eq!(reopened.session(), Some(session));
}

#[tokio::test]
async fn test_bypass_username_with_wrong_password_goes_to_service() {
    let api = FakeApi::new();
    let (_dir, mut store) = temp_store();

    auth::login(&api, &LoginSettings::default(), &mut store, "test", "nope")
        .await
        .unwrap();

    assert_eq!(api.calls(), 1);
}

#[tokio::test]
async fn test_rejected_login_shows_server_description() {
    let api = FakeApi {
        token_error: Some(ApiError::Status {
            status: 401,
            message: "invalid_grant".to_string(),
            description: Some("Usuário ou senha incorretos".to_string()),
        }),
        ..FakeApi::default()
    };
    let (_dir, mut store) = temp_store();

    let err = auth::login(&api, &LoginSettings::default(), &mut store, "maria", "x")
        .await
        .unwrap_err();

    assert!(matches!(&err, FarmError::AuthFailure(msg) if msg == "Usuário ou senha incorretos"));
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_rejected_login_without_description() {
    let api = FakeApi {
        token_error: Some(ApiError::Status {
            status: 400,
            message: "bad request".to_string(),
            description: None,
        }),
        ..FakeApi::default()
    };
    let (_dir, mut store) = temp_store();

    let err = auth::login(&api, &LoginSettings::default(), &mut store, "maria", "x")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), INVALID_CREDENTIALS);
}

#[tokio::test]
async fn test_logout_clears_only_the_session() {
    let api = FakeApi::new();
    let (_dir, mut store) = temp_store();
    auth::login(&api, &LoginSettings::default(), &mut store, "maria", "x")
        .await
        .unwrap();
    store.set(DAILY_REWARD_KEY, "2026-10-16").unwrap();

    auth::logout(&mut store).unwrap();

    assert!(matches!(
        auth::require_session(&store),
        Err(FarmError::Unauthenticated)
    ));
    assert_eq!(store.get(DAILY_REWARD_KEY), Some("2026-10-16"));
}

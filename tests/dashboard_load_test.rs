//! Integration tests for loading the dashboard

mod common;

use fazendinha::dashboard::load_dashboard;
use fazendinha::{FarmError, Session};

use common::{FakeApi, session, unauthorized};

#[tokio::test]
async fn test_load_transforms_all_four_responses() {
    let api = FakeApi::new();

    let dashboard = load_dashboard(&api, Some(&session())).await.unwrap();

    assert_eq!(api.calls(), 4);
    assert_eq!(dashboard.profile.name, "Maria");
    assert_eq!(
        dashboard.profile.avatar_url.as_deref(),
        Some("https://img/maria.png")
    );
    assert_eq!(dashboard.status.total_points, 75);

    let ids: Vec<_> = dashboard.missions.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["quiz", "video", "biblio", "empreende", "diario", "estranho"]);
    assert!(dashboard.mission("video").unwrap().completed);
    assert!(!dashboard.mission("quiz").unwrap().completed);

    let positions: Vec<_> = dashboard.ranking.iter().map(|r| r.position).collect();
    assert_eq!(positions, [1, 2, 3]);
    assert_eq!(dashboard.own_ranking().map(|r| r.total_xp), Some(1250));
}

#[tokio::test]
async fn test_missing_session_makes_no_calls() {
    let api = FakeApi::new();

    let result = load_dashboard(&api, None).await;

    assert!(matches!(result, Err(FarmError::Unauthenticated)));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_empty_token_is_unauthenticated() {
    let api = FakeApi::new();

    let result = load_dashboard(&api, Some(&Session::new("maria", ""))).await;

    assert!(matches!(result, Err(FarmError::Unauthenticated)));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_any_failed_request_fails_whole_load() {
    let failing = [
        FakeApi {
            profile_error: Some(unauthorized()),
            ..FakeApi::default()
        },
        FakeApi {
            status_error: Some(unauthorized()),
            ..FakeApi::default()
        },
        FakeApi {
            challenges_error: Some(unauthorized()),
            ..FakeApi::default()
        },
        FakeApi {
            leaderboard_error: Some(unauthorized()),
            ..FakeApi::default()
        },
    ];

    for api in &failing {
        let result = load_dashboard(api, Some(&session())).await;

        let Err(FarmError::AggregateLoadFailure(err)) = result else {
            panic!("expected an aggregate failure");
        };
        assert_eq!(err.status(), Some(401));
        // All four were still requested
        assert_eq!(api.calls(), 4);
    }
}

#[tokio::test]
async fn test_several_failures_produce_one_error() {
    let api = FakeApi {
        status_error: Some(fazendinha::ApiError::Transport("connection reset".to_string())),
        leaderboard_error: Some(unauthorized()),
        ..FakeApi::default()
    };

    let result = load_dashboard(&api, Some(&session())).await;

    let Err(FarmError::AggregateLoadFailure(err)) = result else {
        panic!("expected an aggregate failure");
    };
    assert_eq!(
        err,
        fazendinha::ApiError::Transport("connection reset".to_string())
    );
}

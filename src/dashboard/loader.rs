//! Dashboard loading

use super::Dashboard;
use super::transform::{missions_from, profile_from, ranking_from, status_from};
use crate::api::GamificationApi;
use crate::{ApiError, FarmError, Session};

/// Load the dashboard for `session`.
///
/// Without a valid session nothing is requested. Otherwise the four reads
/// run concurrently and all of them must succeed; the first failure (in
/// profile, status, catalog, leaderboard order) becomes the single error and
/// the other results are dropped.
pub async fn load_dashboard<A>(api: &A, session: Option<&Session>) -> Result<Dashboard, FarmError>
where
    A: GamificationApi + ?Sized,
{
    let session = session
        .filter(|s| s.is_valid())
        .ok_or(FarmError::Unauthenticated)?;

    tracing::debug!("Loading dashboard for {}", session.username);

    let (profile, status, catalog, board) = tokio::join!(
        api.player_profile(session),
        api.player_status(session),
        api.challenges(session),
        api.leaderboard(session),
    );

    let (profile, status, catalog, board) = match all_four(profile, status, catalog, board) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::warn!("Dashboard load failed: {}", err);
            return Err(FarmError::AggregateLoadFailure(err));
        }
    };

    let dashboard = Dashboard {
        profile: profile_from(profile, &session.username),
        status: status_from(&status),
        missions: missions_from(catalog, &status),
        ranking: ranking_from(board),
    };

    tracing::info!(
        "Loaded {} missions and {} ranking entries",
        dashboard.missions.len(),
        dashboard.ranking.len()
    );
    Ok(dashboard)
}

/// Join four results, keeping the first error
fn all_four<A, B, C, D>(
    a: Result<A, ApiError>,
    b: Result<B, ApiError>,
    c: Result<C, ApiError>,
    d: Result<D, ApiError>,
) -> Result<(A, B, C, D), ApiError> {
    Ok((a?, b?, c?, d?))
}

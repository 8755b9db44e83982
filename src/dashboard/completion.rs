//! Optimistic mission completion
//!
//! Completing a mission is a small transaction:
//!
//! 1. [`apply_completion`] marks the mission done and adds its XP, returning
//!    the next dashboard plus a [`CompletionStep`] describing what is left.
//! 2. A [`PendingCompletion`] carries the action to log and a snapshot of
//!    the missions and status from before step 1.
//! 3. If the service confirms, the applied state is final. Otherwise
//!    [`PendingCompletion::restore`] puts the snapshot back.
//!
//! [`complete_mission`] drives the whole sequence. It holds `&mut Dashboard`
//! from apply to confirm-or-restore, so no other change to the dashboard can
//! land in between. Completions run one after another; a second request for
//! the same mission sees it completed and is skipped.

use super::Dashboard;
use crate::api::GamificationApi;
use crate::api::types::ActionLog;
use crate::{ActionId, FarmError, Mission, PlayerStatus, Session};

/// What remains to do after the optimistic apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStep {
    /// Mission unknown or already completed; nothing changed
    Skipped,
    /// Applied locally, but no action exists for this XP value so it can
    /// never be confirmed
    Unmapped { mission_id: String, xp: i64 },
    /// Applied locally, waiting for the service
    Confirm(PendingCompletion),
}

/// Pre-apply copy of everything a completion touches
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    missions: Vec<Mission>,
    status: PlayerStatus,
}

/// An applied completion awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCompletion {
    pub mission_id: String,
    pub xp: i64,
    pub action: ActionId,
    snapshot: Snapshot,
}

impl PendingCompletion {
    /// Request body confirming this completion for the session's player
    pub fn action_log(&self, session: &Session) -> ActionLog {
        ActionLog {
            action_id: self.action,
            user_id: session.username.clone(),
        }
    }

    /// Undo the completion: missions and status go back to exactly what they
    /// were before it was applied
    pub fn restore(self, dashboard: &mut Dashboard) {
        dashboard.missions = self.snapshot.missions;
        dashboard.status = self.snapshot.status;
    }
}

/// Result of a finished completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Mission unknown or already completed
    Skipped,
    /// The service logged the action; the applied state is final
    Confirmed {
        mission_id: String,
        action: ActionId,
        xp: i64,
    },
}

/// Optimistically complete `mission_id` on a copy of `prior`.
///
/// Pure: no I/O, `prior` is untouched.
pub fn apply_completion(prior: &Dashboard, mission_id: &str) -> (Dashboard, CompletionStep) {
    let Some(mission) = prior.mission(mission_id).filter(|m| m.is_open()) else {
        return (prior.clone(), CompletionStep::Skipped);
    };
    let xp = mission.xp;

    let mut next = prior.clone();
    for m in next.missions.iter_mut().filter(|m| m.id == mission_id) {
        m.completed = true;
    }
    next.status.total_points += xp;

    let step = match ActionId::for_xp(xp) {
        Some(action) => CompletionStep::Confirm(PendingCompletion {
            mission_id: mission_id.to_string(),
            xp,
            action,
            snapshot: Snapshot {
                missions: prior.missions.clone(),
                status: prior.status,
            },
        }),
        None => CompletionStep::Unmapped {
            mission_id: mission_id.to_string(),
            xp,
        },
    };

    (next, step)
}

/// Complete a mission: apply locally, confirm with the service, restore on
/// failure.
///
/// Returns [`FarmError::ActionRejected`] after restoring when the service
/// refuses, cannot be reached, or there is no usable session.
///
/// A mission whose XP has no action stays applied and is never sent;
/// this returns [`FarmError::ActionUnmapped`] so the caller can log it.
pub async fn complete_mission<A>(
    api: &A,
    session: Option<&Session>,
    dashboard: &mut Dashboard,
    mission_id: &str,
) -> Result<CompletionOutcome, FarmError>
where
    A: GamificationApi + ?Sized,
{
    let (next, step) = apply_completion(dashboard, mission_id);
    *dashboard = next;

    let pending = match step {
        CompletionStep::Skipped => {
            tracing::debug!("Mission {} is unknown or already completed", mission_id);
            return Ok(CompletionOutcome::Skipped);
        }
        CompletionStep::Unmapped { mission_id, xp } => {
            tracing::warn!("No action configured for {} XP (mission {})", xp, mission_id);
            return Err(FarmError::ActionUnmapped { xp });
        }
        CompletionStep::Confirm(pending) => pending,
    };

    let confirmation = match session.filter(|s| s.is_valid()) {
        Some(session) => api
            .log_action(session, &pending.action_log(session))
            .await
            .map_err(|e| e.to_string()),
        None => Err("missing authentication data".to_string()),
    };

    match confirmation {
        Ok(()) => {
            tracing::info!(
                "Logged action {} for mission {}",
                pending.action,
                pending.mission_id
            );
            Ok(CompletionOutcome::Confirmed {
                mission_id: pending.mission_id,
                action: pending.action,
                xp: pending.xp,
            })
        }
        Err(reason) => {
            tracing::error!(
                "Failed to log action {} for mission {}: {}",
                pending.action,
                pending.mission_id,
                reason
            );
            pending.restore(dashboard);
            Err(FarmError::ActionRejected(reason))
        }
    }
}

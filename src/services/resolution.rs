//! Schedule resolution service.
//!
//! Bridges the storage layer and the pure resolver: loads an immutable
//! snapshot of one user's scheduling data, then computes the firing plan.
//! The snapshot is assembled from read-only repository calls; nothing is
//! written back, and no result is cached — resolution re-runs per request.

use chrono::NaiveDate;

use crate::api::UserId;
use crate::db::repository::{FullRepository, RepositoryError};
use crate::resolver::{self, FiringPlan, ResolutionSnapshot, ResolveError};

/// Error type for the resolution service: either the snapshot could not be
/// loaded, or the resolver rejected it.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Load the resolution snapshot for one user.
///
/// Timetables come with their events and are scoped to the owner; holidays
/// and sounds are system-wide. The local backend serves all three reads from
/// one lock-guarded state, so the snapshot is internally consistent.
pub async fn load_snapshot(
    repo: &dyn FullRepository,
    owner: UserId,
) -> Result<ResolutionSnapshot, RepositoryError> {
    let timetables = repo.list_timetables(owner).await?;
    let holidays = repo.list_holidays().await?;
    let sounds = repo
        .list_sounds()
        .await?
        .into_iter()
        .map(|sound| (sound.id, sound))
        .collect();

    Ok(ResolutionSnapshot {
        timetables,
        holidays,
        sounds,
    })
}

/// Resolve the bell firing plan for one (user, date) pair.
///
/// The user must exist; an unknown owner is a `NotFound` error, not an
/// empty plan. A user with no matching timetables, or a holiday date, gets
/// an empty plan — that outcome is valid, not an error.
pub async fn resolve_schedule(
    repo: &dyn FullRepository,
    owner: UserId,
    date: NaiveDate,
) -> Result<FiringPlan, ResolutionError> {
    repo.get_user(owner).await?;
    let snapshot = load_snapshot(repo, owner).await?;
    let plan = resolver::resolve(&snapshot, date)?;

    log::debug!(
        "resolved {} instructions ({} warnings) for user {} on {}",
        plan.instructions.len(),
        plan.warnings.len(),
        owner,
        date
    );
    Ok(plan)
}

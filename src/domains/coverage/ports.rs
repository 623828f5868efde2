use super::trajectory::{NewTrajectory, Trajectory};
use crate::common::DomainResult;
use async_trait::async_trait;

/// Port for persisting planned trajectories in various backends (memory, file, postgres).
#[async_trait]
pub trait TrajectoryStore: Send + Sync {
    /// Persist the trajectory under a freshly assigned identifier and return the stored record.
    async fn create(&self, trajectory: NewTrajectory) -> DomainResult<Trajectory>;
    /// Fetch a stored trajectory; `Ok(None)` when the identifier is unknown.
    async fn get(&self, id: i64) -> DomainResult<Option<Trajectory>>;
}

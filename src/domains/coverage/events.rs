use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrajectoryEvent {
    TrajectoryCreated {
        trajectory_id: i64,
        waypoint_count: usize,
        ignored_obstacles: usize,
        timestamp: DateTime<Utc>,
    },
    TrajectoryRejected {
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for TrajectoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            TrajectoryEvent::TrajectoryCreated { .. } => "TrajectoryCreated",
            TrajectoryEvent::TrajectoryRejected { .. } => "TrajectoryRejected",
        }
    }

    fn event_version(&self) -> u64 { 1 }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            TrajectoryEvent::TrajectoryCreated { timestamp, .. } => *timestamp,
            TrajectoryEvent::TrajectoryRejected { timestamp, .. } => *timestamp,
        }
    }
}

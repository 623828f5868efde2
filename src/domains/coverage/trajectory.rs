use super::types::{Dimensions, Obstacle, Path};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Incoming geometry for a new trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryCreate {
    pub wall_dimensions: Dimensions,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

/// A planned trajectory that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrajectory {
    pub wall_dimensions: Dimensions,
    pub obstacles: Vec<Obstacle>,
    pub path: Path,
}

impl NewTrajectory {
    pub fn from_request(request: TrajectoryCreate, path: Path) -> Self {
        Self {
            wall_dimensions: request.wall_dimensions,
            obstacles: request.obstacles,
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub id: i64,
    pub wall_dimensions: Dimensions,
    pub obstacles: Vec<Obstacle>,
    pub path: Path,
    pub created_at: DateTime<Utc>,
}

impl Trajectory {
    pub fn from_new(id: i64, new: NewTrajectory) -> Self {
        Self {
            id,
            wall_dimensions: new.wall_dimensions,
            obstacles: new.obstacles,
            path: new.path,
            created_at: Utc::now(),
        }
    }
}

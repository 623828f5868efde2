use super::events::TrajectoryEvent;
use tokio::sync::mpsc;

/// Publishes trajectory lifecycle events to whoever holds the receiving end.
#[derive(Clone)]
pub struct TrajectoryCommandActor {
    event_sender: mpsc::Sender<TrajectoryEvent>,
}

impl TrajectoryCommandActor {
    pub fn new(event_sender: mpsc::Sender<TrajectoryEvent>) -> Self {
        Self { event_sender }
    }

    pub async fn trajectory_created(
        &self,
        trajectory_id: i64,
        waypoint_count: usize,
        ignored_obstacles: usize,
    ) -> Result<(), String> {
        let event = TrajectoryEvent::TrajectoryCreated {
            trajectory_id,
            waypoint_count,
            ignored_obstacles,
            timestamp: chrono::Utc::now(),
        };
        self.publish(event).await
    }

    pub async fn trajectory_rejected(&self, reason: String) -> Result<(), String> {
        let event = TrajectoryEvent::TrajectoryRejected {
            reason,
            timestamp: chrono::Utc::now(),
        };
        self.publish(event).await
    }

    async fn publish(&self, event: TrajectoryEvent) -> Result<(), String> {
        self.event_sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

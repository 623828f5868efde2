use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;
use uuid::Uuid;

use crate::common::{ApplicationError, ApplicationResult, DomainError};
use crate::domains::coverage::{
    validate_request, CoveragePlanner, NewTrajectory, Trajectory, TrajectoryCommandActor,
    TrajectoryCreate, TrajectoryStore,
};
use crate::domains::logger::DynLogger;

/// Validates trajectory requests, plans the coverage path and persists the result.
pub struct TrajectoryService {
    planner: CoveragePlanner,
    store: Arc<dyn TrajectoryStore>,
    logger: DynLogger,
    events: Option<TrajectoryCommandActor>,
    default_tool_width: f64,
}

impl TrajectoryService {
    pub fn new(store: Arc<dyn TrajectoryStore>, logger: DynLogger, default_tool_width: f64) -> Self {
        Self {
            planner: CoveragePlanner::with_logger(logger.clone()),
            store,
            logger,
            events: None,
            default_tool_width,
        }
    }

    /// Publish lifecycle events through `actor`.
    pub fn with_events(mut self, actor: TrajectoryCommandActor) -> Self {
        self.events = Some(actor);
        self
    }

    pub fn default_tool_width(&self) -> f64 {
        self.default_tool_width
    }

    pub async fn create_trajectory(
        &self,
        request: TrajectoryCreate,
        tool_width: Option<f64>,
    ) -> ApplicationResult<Trajectory> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("create_trajectory", %request_id);
        let started = Instant::now();

        let result = self
            .create_inner(request, tool_width.unwrap_or(self.default_tool_width))
            .instrument(span.clone())
            .await;

        span.in_scope(|| {
            tracing::info!(
                elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                ok = result.is_ok(),
                "request finished"
            );
        });
        result
    }

    async fn create_inner(&self, request: TrajectoryCreate, tool_width: f64) -> ApplicationResult<Trajectory> {
        self.logger.info(&format!("Received trajectory request with tool_width: {}", tool_width));

        if let Err(e) = validate_request(&request, tool_width) {
            self.logger.warn(&format!("Rejected trajectory request: {}", e));
            self.publish_rejected(e.to_string()).await;
            return Err(e.into());
        }

        let plan = self
            .planner
            .plan(&request.wall_dimensions, &request.obstacles, tool_width)?;
        let waypoint_count = plan.path.len();

        let stored = self
            .store
            .create(NewTrajectory::from_request(request, plan.path))
            .await
            .map_err(|e| ApplicationError::Store(e.to_string()))?;

        self.logger.info(&format!(
            "Stored trajectory {} with {} waypoints",
            stored.id, waypoint_count
        ));

        if let Some(events) = &self.events {
            if let Err(e) = events
                .trajectory_created(stored.id, waypoint_count, plan.ignored_obstacles)
                .await
            {
                self.logger.warn(&e);
            }
        }

        Ok(stored)
    }

    pub async fn get_trajectory(&self, id: i64) -> ApplicationResult<Trajectory> {
        let span = tracing::info_span!("get_trajectory", trajectory_id = id);
        self.get_inner(id).instrument(span).await
    }

    async fn get_inner(&self, id: i64) -> ApplicationResult<Trajectory> {
        self.logger.info(&format!("Retrieving trajectory {}", id));
        let found = self
            .store
            .get(id)
            .await
            .map_err(|e| ApplicationError::Store(e.to_string()))?;

        match found {
            Some(trajectory) => Ok(trajectory),
            None => {
                self.logger.warn(&format!("Trajectory {} not found", id));
                Err(DomainError::TrajectoryNotFound { id }.into())
            }
        }
    }

    async fn publish_rejected(&self, reason: String) {
        if let Some(events) = &self.events {
            if let Err(e) = events.trajectory_rejected(reason).await {
                self.logger.warn(&e);
            }
        }
    }
}

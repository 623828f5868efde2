use super::sweep::{
    sweep_horizontal, sweep_vertical, ColumnDirection, HorizontalStrip, RowDirection, SweepEnd,
    VerticalStrip,
};
use super::types::{Dimensions, Obstacle, Path, Point};
use super::validation::{validate_pass_count, validate_tool_width};
use crate::common::DomainResult;
use crate::domains::logger::DynLogger;

/// Rectangles swept by the planner. Obstacle zones are visited in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    WholeWall,
    LeftOfObstacle,
    BelowObstacle,
    AboveObstacle,
    RightOfObstacle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoveragePlan {
    pub path: Path,
    pub swept_zones: Vec<Zone>,
    /// Obstacles after the first one; they do not influence the path.
    pub ignored_obstacles: usize,
}

/// Plans lawnmower coverage of a wall around at most one rectangular obstacle.
#[derive(Default)]
pub struct CoveragePlanner {
    logger: Option<DynLogger>,
}

impl CoveragePlanner {
    pub fn new() -> Self {
        Self { logger: None }
    }

    pub fn with_logger(logger: DynLogger) -> Self {
        Self { logger: Some(logger) }
    }

    pub fn plan(
        &self,
        wall: &Dimensions,
        obstacles: &[Obstacle],
        tool_width: f64,
    ) -> DomainResult<CoveragePlan> {
        validate_tool_width(tool_width)?;
        validate_pass_count(wall, tool_width)?;

        let mut position = Point::ORIGIN;
        let mut path: Path = vec![position];
        let mut swept_zones = Vec::new();

        let obstacle = match obstacles.first() {
            Some(obstacle) => obstacle,
            None => {
                let strip = VerticalStrip { start_x: 0.0, end_x: wall.width, height: wall.height };
                let (path, _) = sweep_columns(path, position, strip, tool_width);
                return Ok(CoveragePlan {
                    path,
                    swept_zones: vec![Zone::WholeWall],
                    ignored_obstacles: 0,
                });
            }
        };

        let ignored_obstacles = obstacles.len() - 1;
        if ignored_obstacles > 0 {
            self.warn(&format!(
                "Only the first obstacle is honoured; ignoring {} more",
                ignored_obstacles
            ));
        }

        let b = obstacle.bounds();

        if b.x_min > 0.0 {
            let strip = VerticalStrip { start_x: 0.0, end_x: b.x_min, height: wall.height };
            let (swept, end) = sweep_columns(path, position, strip, tool_width);
            path = swept;
            position = end.position;
            swept_zones.push(Zone::LeftOfObstacle);
        }

        position = Point::new(b.x_min, 0.0);
        path.push(position);
        if b.y_min > 0.0 {
            let strip = HorizontalStrip { start_y: 0.0, end_y: b.y_min, x_min: b.x_min, x_max: b.x_max };
            let (swept, end) = sweep_rows(path, position, strip, tool_width);
            path = swept;
            position = end.position;
            swept_zones.push(Zone::BelowObstacle);
        }

        position = Point::new(position.x, b.y_max);
        path.push(position);
        if b.y_max < wall.height {
            let strip = HorizontalStrip {
                start_y: b.y_max,
                end_y: wall.height,
                x_min: b.x_min,
                x_max: b.x_max,
            };
            let (swept, end) = sweep_rows(path, position, strip, tool_width);
            path = swept;
            position = end.position;
            swept_zones.push(Zone::AboveObstacle);
        }

        position = Point::new(b.x_max, position.y);
        path.push(position);
        if b.x_max < wall.width {
            let strip = VerticalStrip { start_x: b.x_max, end_x: wall.width, height: wall.height };
            let (swept, _) = sweep_columns(path, position, strip, tool_width);
            path = swept;
            swept_zones.push(Zone::RightOfObstacle);
        }

        Ok(CoveragePlan { path, swept_zones, ignored_obstacles })
    }

    fn warn(&self, msg: &str) {
        if let Some(logger) = &self.logger {
            logger.warn(msg);
        }
    }
}

/// Start a column sweep heading away from the wall edge nearest `position`.
fn sweep_columns(path: Path, position: Point, strip: VerticalStrip, tool_width: f64) -> (Path, SweepEnd) {
    let direction = ColumnDirection::from_position(&position, strip.height);
    sweep_vertical(path, strip, direction, tool_width)
}

fn sweep_rows(path: Path, position: Point, strip: HorizontalStrip, tool_width: f64) -> (Path, SweepEnd) {
    let direction = RowDirection::from_position(&position, strip.x_min, strip.x_max);
    sweep_horizontal(path, strip, direction, tool_width)
}

/// Plan a coverage path and return only the waypoints.
pub fn generate_path(
    wall: &Dimensions,
    obstacles: &[Obstacle],
    tool_width: f64,
) -> DomainResult<Path> {
    CoveragePlanner::new()
        .plan(wall, obstacles, tool_width)
        .map(|plan| plan.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DomainError;

    #[test]
    fn rejects_non_positive_tool_width() {
        let wall = Dimensions::new(10.0, 8.0);
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            match generate_path(&wall, &[], width) {
                Err(DomainError::InvalidInput { reason }) => assert!(reason.contains("tool_width")),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn obstacle_touching_left_edge_skips_left_zone() {
        let wall = Dimensions::new(10.0, 8.0);
        let obstacle = Obstacle::new(Point::new(0.0, 3.0), Dimensions::new(2.0, 2.0));
        let plan = CoveragePlanner::new().plan(&wall, &[obstacle], 1.0).unwrap();

        assert_eq!(plan.path[0], Point::ORIGIN);
        assert_eq!(plan.path[1], Point::new(0.0, 0.0));
        assert_eq!(
            plan.swept_zones,
            vec![Zone::BelowObstacle, Zone::AboveObstacle, Zone::RightOfObstacle]
        );
    }

    #[test]
    fn rejects_tool_width_needing_too_many_passes() {
        let wall = Dimensions::new(10.0, 8.0);
        match generate_path(&wall, &[], 1e-12) {
            Err(DomainError::InvalidInput { reason }) => assert!(reason.contains("passes")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn each_zone_starts_where_the_previous_one_ended() {
        let wall = Dimensions::new(10.0, 8.0);
        let obstacle = Obstacle::new(Point::new(3.0, 3.0), Dimensions::new(1.0, 2.0));
        let path = generate_path(&wall, &[obstacle], 1.0).unwrap();

        let left_strip = VerticalStrip { start_x: 0.0, end_x: 3.0, height: 8.0 };
        let (left, end) = sweep_vertical(vec![Point::ORIGIN], left_strip, ColumnDirection::Up, 1.0);
        assert_eq!(&path[..left.len()], left.as_slice());
        assert_eq!(end.position, Point::new(3.0, 8.0));

        // Below zone: transition to the obstacle's bottom-left corner, then rows heading right.
        assert_eq!(path[left.len()], Point::new(3.0, 0.0));
        assert_eq!(path[left.len() + 1], Point::new(4.0, 0.0));
    }

    #[test]
    fn counts_ignored_obstacles() {
        let wall = Dimensions::new(10.0, 8.0);
        let first = Obstacle::new(Point::new(3.0, 3.0), Dimensions::new(1.0, 2.0));
        let second = Obstacle::new(Point::new(6.0, 1.0), Dimensions::new(1.0, 1.0));

        let with_both = CoveragePlanner::new().plan(&wall, &[first, second], 1.0).unwrap();
        let with_first = CoveragePlanner::new().plan(&wall, &[first], 1.0).unwrap();

        assert_eq!(with_both.ignored_obstacles, 1);
        assert_eq!(with_both.path, with_first.path);
    }
}

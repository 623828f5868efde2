use super::trajectory::TrajectoryCreate;
use super::types::{Dimensions, Obstacle};
use crate::common::{DomainError, DomainResult};

/// Most passes a single sweep may make across the wall's longer side.
pub const MAX_PASSES: usize = 1_000_000;

/// Reject geometry the planner cannot sweep sensibly.
pub fn validate_request(request: &TrajectoryCreate, tool_width: f64) -> DomainResult<()> {
    validate_tool_width(tool_width)?;
    validate_dimensions("wall_dimensions", &request.wall_dimensions)?;
    validate_pass_count(&request.wall_dimensions, tool_width)?;

    for (index, obstacle) in request.obstacles.iter().enumerate() {
        validate_obstacle(index, obstacle, &request.wall_dimensions)?;
    }
    Ok(())
}

pub fn validate_tool_width(tool_width: f64) -> DomainResult<()> {
    if !tool_width.is_finite() || tool_width <= 0.0 {
        return Err(DomainError::invalid_input(format!(
            "tool_width must be a positive number, got {}",
            tool_width
        )));
    }
    Ok(())
}

/// The tool must be wide enough that every sweep finishes within [`MAX_PASSES`].
pub fn validate_pass_count(wall: &Dimensions, tool_width: f64) -> DomainResult<()> {
    let extent = wall.width.max(wall.height);
    if extent / tool_width > MAX_PASSES as f64 {
        return Err(DomainError::invalid_input(format!(
            "tool_width {} needs more than {} passes to cover a {} x {} wall",
            tool_width, MAX_PASSES, wall.width, wall.height
        )));
    }
    Ok(())
}

fn validate_dimensions(field: &str, dimensions: &Dimensions) -> DomainResult<()> {
    if !dimensions.width.is_finite() || dimensions.width <= 0.0 {
        return Err(DomainError::invalid_input(format!(
            "{}.width must be a positive number, got {}",
            field, dimensions.width
        )));
    }
    if !dimensions.height.is_finite() || dimensions.height <= 0.0 {
        return Err(DomainError::invalid_input(format!(
            "{}.height must be a positive number, got {}",
            field, dimensions.height
        )));
    }
    Ok(())
}

fn validate_obstacle(index: usize, obstacle: &Obstacle, wall: &Dimensions) -> DomainResult<()> {
    let field = format!("obstacles[{}]", index);
    let corner = &obstacle.bottom_left;
    if !corner.x.is_finite() || !corner.y.is_finite() {
        return Err(DomainError::invalid_input(format!(
            "{}.bottom_left must have finite coordinates",
            field
        )));
    }
    validate_dimensions(&format!("{}.dimensions", field), &obstacle.dimensions)?;

    let b = obstacle.bounds();
    if b.x_min < 0.0 || b.y_min < 0.0 || b.x_max > wall.width || b.y_max > wall.height {
        return Err(DomainError::invalid_input(format!(
            "{} [{}, {}] x [{}, {}] lies outside the {} x {} wall",
            field, b.x_min, b.x_max, b.y_min, b.y_max, wall.width, wall.height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::coverage::types::Point;

    fn request(obstacles: Vec<Obstacle>) -> TrajectoryCreate {
        TrajectoryCreate { wall_dimensions: Dimensions::new(10.0, 8.0), obstacles }
    }

    #[test]
    fn accepts_obstacle_touching_the_wall_edges() {
        let obstacle = Obstacle::new(Point::new(0.0, 0.0), Dimensions::new(10.0, 2.0));
        assert!(validate_request(&request(vec![obstacle]), 0.5).is_ok());
    }

    #[test]
    fn rejects_obstacle_outside_the_wall() {
        let obstacle = Obstacle::new(Point::new(9.0, 3.0), Dimensions::new(2.0, 2.0));
        match validate_request(&request(vec![obstacle]), 0.5) {
            Err(DomainError::InvalidInput { reason }) => assert!(reason.contains("obstacles[0]")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn rejects_degenerate_wall() {
        let req = TrajectoryCreate { wall_dimensions: Dimensions::new(0.0, 8.0), obstacles: vec![] };
        match validate_request(&req, 0.5) {
            Err(DomainError::InvalidInput { reason }) => assert!(reason.contains("wall_dimensions.width")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn rejects_tool_width_needing_too_many_passes() {
        match validate_request(&request(vec![]), 1e-12) {
            Err(DomainError::InvalidInput { reason }) => assert!(reason.contains("passes")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert!(validate_request(&request(vec![]), 20.0 / MAX_PASSES as f64).is_ok());
    }

    #[test]
    fn rejects_zero_tool_width() {
        assert!(validate_request(&request(vec![]), 0.0).is_err());
    }
}

use super::types::{Path, Point};

/// Which wall edge a vertical pass travels towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDirection {
    Up,
    Down,
}

impl ColumnDirection {
    /// Head for the edge farther from `position`: up from the lower half, down otherwise.
    pub fn from_position(position: &Point, wall_height: f64) -> Self {
        if position.y < wall_height / 2.0 {
            ColumnDirection::Up
        } else {
            ColumnDirection::Down
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ColumnDirection::Up => ColumnDirection::Down,
            ColumnDirection::Down => ColumnDirection::Up,
        }
    }

    fn target_y(self, wall_height: f64) -> f64 {
        match self {
            ColumnDirection::Up => wall_height,
            ColumnDirection::Down => 0.0,
        }
    }
}

/// Which obstacle side a horizontal pass travels towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDirection {
    Right,
    Left,
}

impl RowDirection {
    /// Head right when `position` sits left of the span's midpoint, left otherwise.
    pub fn from_position(position: &Point, x_min: f64, x_max: f64) -> Self {
        if position.x < (x_min + x_max) / 2.0 {
            RowDirection::Right
        } else {
            RowDirection::Left
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            RowDirection::Right => RowDirection::Left,
            RowDirection::Left => RowDirection::Right,
        }
    }

    fn target_x(self, x_min: f64, x_max: f64) -> f64 {
        match self {
            RowDirection::Right => x_max,
            RowDirection::Left => x_min,
        }
    }
}

/// Full-height strip `[start_x, end_x] x [0, height]` covered column by column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStrip {
    pub start_x: f64,
    pub end_x: f64,
    pub height: f64,
}

/// Band `[x_min, x_max] x [start_y, end_y]` covered row by row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalStrip {
    pub start_y: f64,
    pub end_y: f64,
    pub x_min: f64,
    pub x_max: f64,
}

/// Where a sweep left the tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEnd {
    pub position: Point,
    pub passes: usize,
}

/// Lawnmower over a vertical strip.
///
/// Each pass emits the far end of the current column, steps `tool_width`
/// along x (clamped to `end_x`) and emits the connector point on the same
/// edge before turning around. A closing point at exactly `end_x` is always
/// appended. The strip must have positive width; callers skip empty zones.
pub fn sweep_vertical(
    mut path: Path,
    strip: VerticalStrip,
    direction: ColumnDirection,
    tool_width: f64,
) -> (Path, SweepEnd) {
    debug_assert!(tool_width > 0.0, "tool width must be positive");

    let mut current_x = strip.start_x;
    let mut direction = direction;
    let mut passes = 0;

    while current_x < strip.end_x {
        let target_y = direction.target_y(strip.height);
        path.push(Point::new(current_x, target_y));

        current_x = (current_x + tool_width).min(strip.end_x);
        path.push(Point::new(current_x, target_y));

        direction = direction.flipped();
        passes += 1;
    }

    let last_y = path.last().map_or(0.0, |p| p.y);
    let end = Point::new(strip.end_x, last_y);
    path.push(end);

    (path, SweepEnd { position: end, passes })
}

/// Lawnmower over a horizontal band, the transpose of [`sweep_vertical`].
pub fn sweep_horizontal(
    mut path: Path,
    strip: HorizontalStrip,
    direction: RowDirection,
    tool_width: f64,
) -> (Path, SweepEnd) {
    debug_assert!(tool_width > 0.0, "tool width must be positive");

    let mut current_y = strip.start_y;
    let mut direction = direction;
    let mut passes = 0;

    while current_y < strip.end_y {
        let target_x = direction.target_x(strip.x_min, strip.x_max);
        path.push(Point::new(target_x, current_y));

        current_y = (current_y + tool_width).min(strip.end_y);
        path.push(Point::new(target_x, current_y));

        direction = direction.flipped();
        passes += 1;
    }

    let last_x = path.last().map_or(0.0, |p| p.x);
    let end = Point::new(last_x, strip.end_y);
    path.push(end);

    (path, SweepEnd { position: end, passes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_sweep_alternates_and_closes_on_boundary() {
        let strip = VerticalStrip { start_x: 0.0, end_x: 4.0, height: 3.0 };
        let (path, end) = sweep_vertical(vec![Point::ORIGIN], strip, ColumnDirection::Up, 2.0);

        assert_eq!(
            path,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 3.0),
                Point::new(2.0, 3.0),
                Point::new(2.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 0.0),
            ]
        );
        assert_eq!(end.passes, 2);
        assert_eq!(end.position, Point::new(4.0, 0.0));
    }

    #[test]
    fn vertical_sweep_clamps_partial_step() {
        let strip = VerticalStrip { start_x: 0.0, end_x: 5.0, height: 1.0 };
        let (path, end) = sweep_vertical(Vec::new(), strip, ColumnDirection::Down, 2.0);

        assert!(path.iter().all(|p| p.x <= 5.0));
        assert_eq!(end.position.x, 5.0);
        assert_eq!(end.passes, 3);
    }

    #[test]
    fn vertical_sweep_does_not_drift_with_fractional_steps() {
        let strip = VerticalStrip { start_x: 0.0, end_x: 1.0, height: 1.0 };
        let (path, end) = sweep_vertical(vec![Point::ORIGIN], strip, ColumnDirection::Up, 0.1);

        assert!(path.iter().all(|p| p.x <= 1.0));
        assert_eq!(end.position.x, 1.0);
    }

    #[test]
    fn horizontal_sweep_runs_between_span_edges() {
        let strip = HorizontalStrip { start_y: 0.0, end_y: 3.0, x_min: 3.0, x_max: 4.0 };
        let (path, end) =
            sweep_horizontal(vec![Point::new(3.0, 0.0)], strip, RowDirection::Right, 2.0);

        assert_eq!(
            path,
            vec![
                Point::new(3.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 2.0),
                Point::new(3.0, 2.0),
                Point::new(3.0, 3.0),
                Point::new(3.0, 3.0),
            ]
        );
        assert_eq!(end.position, Point::new(3.0, 3.0));
    }

    #[test]
    fn horizontal_sweep_clamps_partial_step() {
        let strip = HorizontalStrip { start_y: 5.0, end_y: 8.0, x_min: 3.0, x_max: 4.0 };
        let (path, end) =
            sweep_horizontal(vec![Point::new(3.0, 5.0)], strip, RowDirection::Right, 2.0);

        assert!(path.iter().all(|p| p.y <= 8.0));
        assert_eq!(path[path.len() - 2], Point::new(3.0, 8.0));
        assert_eq!(end.position, Point::new(3.0, 8.0));
        assert_eq!(end.passes, 2);
    }

    #[test]
    fn direction_is_taken_from_position() {
        assert_eq!(ColumnDirection::from_position(&Point::new(0.0, 1.0), 8.0), ColumnDirection::Up);
        assert_eq!(ColumnDirection::from_position(&Point::new(0.0, 4.0), 8.0), ColumnDirection::Down);
        assert_eq!(RowDirection::from_position(&Point::new(3.0, 0.0), 3.0, 4.0), RowDirection::Right);
        assert_eq!(RowDirection::from_position(&Point::new(4.0, 0.0), 3.0, 4.0), RowDirection::Left);
    }
}

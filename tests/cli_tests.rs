use std::sync::Arc;

use clap::Parser;
use tempfile::tempdir;
use wallpath_app::adapters::outbound::{init_noop_logger, InMemoryTrajectoryStore};
use wallpath_app::application::TrajectoryService;
use wallpath_app::cli::{run_batch, Cli};

const REQUEST: &str = r#"{
    "wall_dimensions": {"width": 10.0, "height": 8.0},
    "obstacles": [{"bottom_left": {"x": 3.0, "y": 3.0}, "dimensions": {"width": 1.0, "height": 2.0}}]
}"#;

fn service() -> TrajectoryService {
    TrajectoryService::new(Arc::new(InMemoryTrajectoryStore::new()), init_noop_logger(), 0.1)
}

#[tokio::test]
async fn test_get_after_request_file_sees_the_new_trajectory() {
    let dir = tempdir().unwrap();
    let request_path = dir.path().join("request.json");
    std::fs::write(&request_path, REQUEST).unwrap();

    let cli = Cli::try_parse_from([
        "wallpath-app",
        "--tool-width",
        "5",
        request_path.to_str().unwrap(),
        "--get",
        "1",
    ])
    .unwrap();
    assert_eq!(cli.tool_width, Some(5.0));
    assert_eq!(cli.get, Some(1));
    assert_eq!(cli.requests, vec![request_path.clone()]);

    let output = run_batch(&service(), &cli).await.unwrap();

    assert_eq!(output.len(), 2);
    assert_eq!(output[0].id, 1);
    assert_eq!(output[1].id, 1);
    assert_eq!(output[1].path, output[0].path);
}

#[tokio::test]
async fn test_get_of_missing_id_fails_the_run() {
    let cli = Cli::try_parse_from(["wallpath-app", "--get", "7"]).unwrap();
    let err = run_batch(&service(), &cli).await.unwrap_err();
    assert!(err.to_string().contains("Trajectory not found: 7"));
}

#[test]
fn test_rejects_non_numeric_tool_width() {
    assert!(Cli::try_parse_from(["wallpath-app", "--tool-width", "wide", "r.json"]).is_err());
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use crate::application::TrajectoryService;
use crate::domains::coverage::{Trajectory, TrajectoryCreate};

#[derive(Parser, Debug)]
#[command(name = "wallpath-app")]
#[command(about = "Plan wall coverage trajectories and store them")]
pub struct Cli {
    /// Tool width for the requests in this run (defaults to the configured width)
    #[arg(long)]
    pub tool_width: Option<f64>,

    /// Print the stored trajectory with this id, after any requests are created
    #[arg(long)]
    pub get: Option<i64>,

    /// Serve the HTTP API instead of processing request files
    #[arg(long)]
    pub serve: bool,

    /// JSON request files, each holding wall dimensions and obstacles
    pub requests: Vec<PathBuf>,
}

/// Create a trajectory for every request file, then look up `--get`.
///
/// A request that fails to plan or store is logged and skipped; an unreadable
/// file or a missing `--get` id aborts the run. Returns the records to print,
/// in order.
pub async fn run_batch(service: &TrajectoryService, cli: &Cli) -> Result<Vec<Trajectory>> {
    let mut output = Vec::new();

    for path in &cli.requests {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading request file {}", path.display()))?;
        let request: TrajectoryCreate = serde_json::from_str(&content)
            .with_context(|| format!("parsing request file {}", path.display()))?;

        match service.create_trajectory(request, cli.tool_width).await {
            Ok(trajectory) => output.push(trajectory),
            Err(e) => error!("Failed to create trajectory from {}: {}", path.display(), e),
        }
    }

    if let Some(id) = cli.get {
        output.push(service.get_trajectory(id).await?);
    }

    Ok(output)
}

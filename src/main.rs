use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wallpath_app::adapters::inbound::serve;
use wallpath_app::adapters::outbound::{
    init_buffered_logger, init_combined_logger, FileTrajectoryStore, InMemoryTrajectoryStore,
    PostgresTrajectoryStore,
};
use wallpath_app::application::TrajectoryService;
use wallpath_app::cli::{run_batch, Cli};
use wallpath_app::common::DomainEvent;
use wallpath_app::config::StoreBackend;
use wallpath_app::domains::coverage::{TrajectoryCommandActor, TrajectoryEvent, TrajectoryStore};
use wallpath_app::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().await?;
    info!(backend = ?config.store.backend, "Configuration loaded");

    let (logger, log_drain) = init_buffered_logger(
        init_combined_logger(config.logging.domain_log_path.as_deref()),
        config.logging.buffer_capacity,
    );

    let store: Arc<dyn TrajectoryStore> = match config.store.backend {
        StoreBackend::Memory => Arc::new(InMemoryTrajectoryStore::new()),
        StoreBackend::File => Arc::new(FileTrajectoryStore::new(&config.store.file_path)),
        StoreBackend::Postgres => Arc::new(PostgresTrajectoryStore::new(config.postgres.clone()).await?),
    };

    let (event_sender, mut event_receiver) = mpsc::channel::<TrajectoryEvent>(100);
    let events = tokio::spawn(async move {
        while let Some(event) = event_receiver.recv().await {
            info!(event_type = event.event_type(), "{:?}", event);
        }
    });

    let service = Arc::new(
        TrajectoryService::new(store, logger, config.planner.default_tool_width)
            .with_events(TrajectoryCommandActor::new(event_sender)),
    );

    let result: Result<(), Box<dyn Error>> = if cli.serve {
        serve(service.clone(), &config.http.bind).await.map_err(Into::into)
    } else {
        print_batch(&service, &cli).await
    };

    // Closing the service ends both background tasks once their queues are drained.
    drop(service);
    events.await?;
    log_drain.await?;
    result
}

async fn print_batch(service: &TrajectoryService, cli: &Cli) -> Result<(), Box<dyn Error>> {
    for trajectory in run_batch(service, cli).await? {
        println!("{}", serde_json::to_string_pretty(&trajectory)?);
    }
    Ok(())
}

use crate::common::{DomainError, DomainResult};
use crate::config::PostgresConfig;
use crate::domains::coverage::{Dimensions, NewTrajectory, Obstacle, Path, Trajectory, TrajectoryStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::{Config, Pool, PoolConfig, Runtime};
use tokio_postgres::types::Json;
use tokio_postgres::{NoTls, Row};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS trajectories (
        id BIGSERIAL PRIMARY KEY,
        wall_dimensions JSONB NOT NULL,
        obstacles JSONB NOT NULL,
        path JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );
"#;

pub struct PostgresTrajectoryStore {
    pool: Pool,
}

impl PostgresTrajectoryStore {
    pub async fn new(config: PostgresConfig) -> DomainResult<Self> {
        let mut pg_config = Config::new();
        pg_config.host = Some(config.host);
        pg_config.port = Some(config.port);
        pg_config.dbname = Some(config.database);
        pg_config.user = Some(config.username);
        pg_config.password = Some(config.password);
        pg_config.pool = Some(PoolConfig::new(config.max_connections as usize));

        let pool = pg_config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| infra("Failed to create PostgreSQL pool", e))?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and make sure the schema exists.
    pub async fn from_pool(pool: Pool) -> DomainResult<Self> {
        let store = Self { pool };
        store.initialize_schema().await?;
        Ok(store)
    }

    async fn initialize_schema(&self) -> DomainResult<()> {
        let client = self.client().await?;
        client
            .batch_execute(SCHEMA)
            .await
            .map_err(|e| infra("Failed to initialize database schema", e))
    }

    async fn client(&self) -> DomainResult<deadpool_postgres::Client> {
        self.pool
            .get()
            .await
            .map_err(|e| infra("Failed to get database connection", e))
    }
}

fn infra(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::InfrastructureError(format!("{}: {}", context, e))
}

fn trajectory_from_row(row: &Row) -> Trajectory {
    let Json(wall_dimensions): Json<Dimensions> = row.get(1);
    let Json(obstacles): Json<Vec<Obstacle>> = row.get(2);
    let Json(path): Json<Path> = row.get(3);
    let created_at: DateTime<Utc> = row.get(4);

    Trajectory {
        id: row.get(0),
        wall_dimensions,
        obstacles,
        path,
        created_at,
    }
}

#[async_trait]
impl TrajectoryStore for PostgresTrajectoryStore {
    async fn create(&self, trajectory: NewTrajectory) -> DomainResult<Trajectory> {
        let client = self.client().await?;

        let stmt = client
            .prepare(
                "INSERT INTO trajectories (wall_dimensions, obstacles, path, created_at)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, wall_dimensions, obstacles, path, created_at",
            )
            .await
            .map_err(|e| infra("Failed to prepare statement", e))?;

        let row = client
            .query_one(
                &stmt,
                &[
                    &Json(&trajectory.wall_dimensions),
                    &Json(&trajectory.obstacles),
                    &Json(&trajectory.path),
                    &Utc::now(),
                ],
            )
            .await
            .map_err(|e| infra("Failed to save trajectory", e))?;

        Ok(trajectory_from_row(&row))
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Trajectory>> {
        let client = self.client().await?;

        let row = client
            .query_opt(
                "SELECT id, wall_dimensions, obstacles, path, created_at
                 FROM trajectories
                 WHERE id = $1",
                &[&id],
            )
            .await
            .map_err(|e| infra("Failed to load trajectory", e))?;

        Ok(row.as_ref().map(trajectory_from_row))
    }
}

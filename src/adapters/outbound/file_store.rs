use crate::common::{DomainError, DomainResult};
use crate::domains::coverage::{NewTrajectory, Trajectory, TrajectoryStore};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

/// File-based TrajectoryStore
///
/// Trajectories are kept in JSON Lines format (one record per line) in a
/// single file. Identifiers are line numbers starting at 1, so the file must
/// only ever be appended to. Writers inside one process are serialized by a
/// mutex; sharing the file between processes is not supported.
pub struct FileTrajectoryStore {
    file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTrajectoryStore {
    pub fn new<P: Into<PathBuf>>(file_path: P) -> Self {
        Self {
            file_path: file_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn ensure_parent_dir(&self) -> DomainResult<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    DomainError::InfrastructureError(format!(
                        "Failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }

    async fn read_all(&self) -> DomainResult<Vec<Trajectory>> {
        if !self.file_path.exists() {
            return Ok(vec![]);
        }

        let file = File::open(&self.file_path).await.map_err(|e| {
            DomainError::InfrastructureError(format!(
                "Failed to open trajectory file {}: {}",
                self.file_path.display(),
                e
            ))
        })?;

        let mut lines = BufReader::new(file).lines();
        let mut trajectories = Vec::new();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| DomainError::InfrastructureError(format!("Failed to read line: {}", e)))?
        {
            if line.trim().is_empty() {
                continue;
            }
            trajectories.push(serde_json::from_str::<Trajectory>(&line)?);
        }
        Ok(trajectories)
    }
}

#[async_trait]
impl TrajectoryStore for FileTrajectoryStore {
    async fn create(&self, trajectory: NewTrajectory) -> DomainResult<Trajectory> {
        let _guard = self.write_lock.lock().await;
        self.ensure_parent_dir().await?;

        let next_id = self.read_all().await?.len() as i64 + 1;
        let stored = Trajectory::from_new(next_id, trajectory);
        let json_line = serde_json::to_string(&stored)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .await
            .map_err(|e| {
                DomainError::InfrastructureError(format!(
                    "Failed to open trajectory file {}: {}",
                    self.file_path.display(),
                    e
                ))
            })?;

        file.write_all(format!("{}\n", json_line).as_bytes())
            .await
            .map_err(|e| DomainError::InfrastructureError(format!("Failed to write trajectory: {}", e)))?;
        file.flush()
            .await
            .map_err(|e| DomainError::InfrastructureError(format!("Failed to flush file: {}", e)))?;

        Ok(stored)
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Trajectory>> {
        Ok(self.read_all().await?.into_iter().find(|t| t.id == id))
    }
}

use crate::common::DomainResult;
use crate::domains::coverage::{NewTrajectory, Trajectory, TrajectoryStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory trajectory store for testing and development
#[derive(Debug, Default)]
pub struct InMemoryTrajectoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    trajectories: HashMap<i64, Trajectory>,
}

impl InMemoryTrajectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.trajectories.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TrajectoryStore for InMemoryTrajectoryStore {
    async fn create(&self, trajectory: NewTrajectory) -> DomainResult<Trajectory> {
        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let stored = Trajectory::from_new(inner.next_id, trajectory);
        inner.trajectories.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Trajectory>> {
        let inner = self.inner.read().await;
        Ok(inner.trajectories.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::coverage::{Dimensions, Point};

    fn sample() -> NewTrajectory {
        NewTrajectory {
            wall_dimensions: Dimensions::new(10.0, 8.0),
            obstacles: vec![],
            path: vec![Point::ORIGIN, Point::new(0.0, 8.0)],
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = InMemoryTrajectoryStore::new();
        let first = store.create(sample()).await.unwrap();
        let second = store.create(sample()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let store = InMemoryTrajectoryStore::new();
        assert!(store.get(42).await.unwrap().is_none());
    }
}

//! # Mock Data
//!
//! In-memory store seeded from a static JSON array of vlogs, for running the API without Redis.
//!
//! Point `MOCK_DATA` at a file such as the one written by the `tester` crate. Changes live only as
//! long as the process; the file is never written back.
use std::{path::Path, sync::RwLock};

use async_trait::async_trait;
use catalog::{NewVlog, ReactionKind, Vlog};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::AppError,
    store::{VlogStore, newest_first},
};

#[derive(Default)]
pub struct MockStore {
    vlogs: RwLock<Vec<Vlog>>,
}

impl MockStore {
    pub fn new(vlogs: Vec<Vlog>) -> Self {
        Self {
            vlogs: RwLock::new(vlogs),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let data = std::fs::read(path)?;
        let vlogs: Vec<Vlog> = serde_json::from_slice(&data)?;

        info!("Loaded {} mock vlogs from {}", vlogs.len(), path.display());

        Ok(Self::new(vlogs))
    }
}

#[async_trait]
impl VlogStore for MockStore {
    async fn list(&self) -> Result<Vec<Vlog>, AppError> {
        let mut vlogs = self.vlogs.read().unwrap_or_else(|e| e.into_inner()).clone();
        newest_first(&mut vlogs);

        Ok(vlogs)
    }

    async fn create(&self, new_vlog: NewVlog) -> Result<Vlog, AppError> {
        let vlog = new_vlog.into_vlog(Uuid::new_v4().simple().to_string(), Utc::now());

        self.vlogs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(vlog.clone());

        Ok(vlog)
    }

    async fn apply_delta(
        &self,
        id: &str,
        kind: ReactionKind,
        delta: i64,
    ) -> Result<Option<Vlog>, AppError> {
        let mut vlogs = self.vlogs.write().unwrap_or_else(|e| e.into_inner());

        let Some(vlog) = vlogs.iter_mut().find(|vlog| vlog.id == id) else {
            return Ok(None);
        };

        // HINCRBY refuses this too
        let counter = vlog.counter_mut(kind);
        *counter = counter
            .checked_add(delta)
            .ok_or_else(|| AppError::CounterOverflow(id.to_string()))?;

        Ok(Some(vlog.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_from_file_reads_mock_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 1, "title": "Old", "description": "d", "videoUrl": "u", "category": "Tech",
                  "creatorName": "A", "likes": 3, "dislikes": 1, "createdAt": "2020-01-01T00:00:00Z"}},
                {{"_id": "b", "title": "New", "description": "d", "videoUrl": "u", "category": "Tech",
                  "creatorName": "B", "uploadDate": "2024-01-01T00:00:00Z"}}
            ]"#
        )
        .unwrap();

        let store = MockStore::from_file(file.path()).unwrap();
        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|vlog| vlog.title)
            .collect();

        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            MockStore::from_file(file.path()),
            Err(AppError::MockData(_))
        ));
    }

    #[tokio::test]
    async fn test_counter_overflow_is_error() {
        let vlog = Vlog {
            id: "max".to_string(),
            title: "Viral".to_string(),
            description: "d".to_string(),
            video_url: "u".to_string(),
            category: "Tech".to_string(),
            creator_name: "A".to_string(),
            likes: i64::MAX,
            dislikes: i64::MIN,
            created_at: Utc::now(),
        };
        let store = MockStore::new(vec![vlog]);

        assert!(matches!(
            store.apply_delta("max", ReactionKind::Like, 1).await,
            Err(AppError::CounterOverflow(id)) if id == "max"
        ));
        assert!(matches!(
            store.apply_delta("max", ReactionKind::Dislike, -1).await,
            Err(AppError::CounterOverflow(_))
        ));

        let unchanged = store.apply_delta("max", ReactionKind::Like, -1).await.unwrap().unwrap();
        assert_eq!(unchanged.likes, i64::MAX - 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = MockStore::default();

        assert!(
            store
                .apply_delta("missing", ReactionKind::Like, 1)
                .await
                .unwrap()
                .is_none()
        );
    }
}

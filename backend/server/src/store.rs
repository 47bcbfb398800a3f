//! # Vlog Store
//!
//! The single collection behind every route. Each route maps onto exactly one call here.
//!
//! Two backends:
//! - [`RedisStore`](crate::database::RedisStore): live store, atomic increments
//! - [`MockStore`](crate::mock::MockStore): static JSON mock file held in memory
use async_trait::async_trait;
use catalog::{NewVlog, ReactionKind, Vlog};

use crate::error::AppError;

#[async_trait]
pub trait VlogStore: Send + Sync {
    /// All vlogs, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Vlog>, AppError>;

    /// Stores a new vlog with a fresh id and zeroed counters.
    async fn create(&self, new_vlog: NewVlog) -> Result<Vlog, AppError>;

    /// Adds `delta` to one counter and returns the updated vlog, or `None` for an unknown id.
    ///
    /// No bounds check: counters may go negative.
    async fn apply_delta(
        &self,
        id: &str,
        kind: ReactionKind,
        delta: i64,
    ) -> Result<Option<Vlog>, AppError>;
}

pub fn newest_first(vlogs: &mut [Vlog]) {
    vlogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

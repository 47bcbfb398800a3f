//! # Redis
//!
//! Live document store for vlogs.
//!
//! Core purpose is to store every vlog and apply atomic increments/decrements to its like and
//! dislike counters.
//!
//! ## Implementation
//!
//! - One hash per vlog at `vlog:{id}`: title, description, videoUrl, category, creatorName,
//!   likes, dislikes, createdAt (RFC 3339)
//! - One sorted set `vlogs` of ids scored by `createdAt` in milliseconds, read in reverse for
//!   newest first
//! - Creation writes the hash and the index entry in one `MULTI`
//! - Counter updates run a small Lua script: `EXISTS` then `HINCRBY`. Redis runs scripts
//!   atomically, so an unknown id never gets a stray hash and concurrent presses never lose
//!   an update
//!
//! ## Notes
//! - The server trusts the client's `active` flag. Sending `active=true` twice adds 2
//! - Nothing stops a counter from going below zero
use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use catalog::{NewVlog, ReactionKind, Vlog};
use chrono::{DateTime, Utc};
use redis::{
    AsyncCommands, Client, Script,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use uuid::Uuid;

use crate::{error::AppError, store::VlogStore};

pub const VLOG_INDEX: &str = "vlogs";
pub const VLOG_PREFIX: &str = "vlog:";

pub const VLOG_TITLE: &str = "title";
pub const VLOG_DESCRIPTION: &str = "description";
pub const VLOG_VIDEO_URL: &str = "videoUrl";
pub const VLOG_CATEGORY: &str = "category";
pub const VLOG_CREATOR: &str = "creatorName";
pub const VLOG_LIKES: &str = "likes";
pub const VLOG_DISLIKES: &str = "dislikes";
pub const VLOG_CREATED_AT: &str = "createdAt";

const INCREMENT_IF_EXISTS: &str = r"
if redis.call('EXISTS', KEYS[1]) == 1 then
    return redis.call('HINCRBY', KEYS[1], ARGV[1], ARGV[2])
end
return false
";

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, AppError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url)?;
    let connection_manager = client.get_connection_manager_with_config(config).await?;

    Ok(connection_manager)
}

pub struct RedisStore {
    connection: ConnectionManager,
    increment: Script,
}

impl RedisStore {
    pub fn new(connection: ConnectionManager) -> Self {
        Self {
            connection,
            increment: Script::new(INCREMENT_IF_EXISTS),
        }
    }

    async fn fetch(&self, id: &str) -> Result<Option<Vlog>, AppError> {
        let mut con = self.connection.clone();
        let hash: HashMap<String, String> = con.hgetall(vlog_key(id)).await?;

        if hash.is_empty() {
            return Ok(None);
        }

        vlog_from_hash(id.to_string(), hash).map(Some)
    }
}

#[async_trait]
impl VlogStore for RedisStore {
    async fn list(&self) -> Result<Vec<Vlog>, AppError> {
        let mut con = self.connection.clone();
        let ids: Vec<String> = con.zrevrange(VLOG_INDEX, 0, -1).await?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut pipe = redis::pipe();
        for id in &ids {
            pipe.hgetall(vlog_key(id));
        }
        let hashes: Vec<HashMap<String, String>> = pipe.query_async(&mut con).await?;

        // index entries can outlive a hash deleted by hand
        ids.into_iter()
            .zip(hashes)
            .filter(|(_, hash)| !hash.is_empty())
            .map(|(id, hash)| vlog_from_hash(id, hash))
            .collect()
    }

    async fn create(&self, new_vlog: NewVlog) -> Result<Vlog, AppError> {
        let vlog = new_vlog.into_vlog(Uuid::new_v4().simple().to_string(), Utc::now());

        let mut con = self.connection.clone();
        redis::pipe()
            .atomic()
            .hset_multiple(vlog_key(&vlog.id), &vlog_to_hash(&vlog))
            .ignore()
            .zadd(VLOG_INDEX, &vlog.id, vlog.created_at.timestamp_millis())
            .ignore()
            .query_async::<()>(&mut con)
            .await?;

        Ok(vlog)
    }

    async fn apply_delta(
        &self,
        id: &str,
        kind: ReactionKind,
        delta: i64,
    ) -> Result<Option<Vlog>, AppError> {
        let mut con = self.connection.clone();
        let updated: Option<i64> = self
            .increment
            .key(vlog_key(id))
            .arg(kind.field())
            .arg(delta)
            .invoke_async(&mut con)
            .await?;

        match updated {
            Some(_) => self.fetch(id).await,
            None => Ok(None),
        }
    }
}

pub fn vlog_key(id: &str) -> String {
    format!("{VLOG_PREFIX}{id}")
}

pub fn vlog_to_hash(vlog: &Vlog) -> Vec<(&'static str, String)> {
    vec![
        (VLOG_TITLE, vlog.title.clone()),
        (VLOG_DESCRIPTION, vlog.description.clone()),
        (VLOG_VIDEO_URL, vlog.video_url.clone()),
        (VLOG_CATEGORY, vlog.category.clone()),
        (VLOG_CREATOR, vlog.creator_name.clone()),
        (VLOG_LIKES, vlog.likes.to_string()),
        (VLOG_DISLIKES, vlog.dislikes.to_string()),
        (VLOG_CREATED_AT, vlog.created_at.to_rfc3339()),
    ]
}

pub fn vlog_from_hash(id: String, mut hash: HashMap<String, String>) -> Result<Vlog, AppError> {
    let corrupt = || AppError::CorruptRecord(id.clone());

    let mut take = |field: &str| hash.remove(field).ok_or_else(corrupt);

    let title = take(VLOG_TITLE)?;
    let description = take(VLOG_DESCRIPTION)?;
    let video_url = take(VLOG_VIDEO_URL)?;
    let category = take(VLOG_CATEGORY)?;
    let creator_name = take(VLOG_CREATOR)?;
    let likes: i64 = take(VLOG_LIKES)?.parse().map_err(|_| corrupt())?;
    let dislikes: i64 = take(VLOG_DISLIKES)?.parse().map_err(|_| corrupt())?;
    let created_at = DateTime::parse_from_rfc3339(&take(VLOG_CREATED_AT)?)
        .map_err(|_| corrupt())?
        .with_timezone(&Utc);

    Ok(Vlog {
        id,
        title,
        description,
        video_url,
        category,
        creator_name,
        likes,
        dislikes,
        created_at,
    })
}

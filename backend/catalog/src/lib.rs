//! # Catalog
//!
//! Types shared between the backend and the client.
//!
//! ## Payloads
//!
//! All payloads are JSON.
//!
//! - Listing: array of [`Vlog`], newest first
//! - Creating: [`NewVlog`], answered with the stored [`Vlog`]
//! - Reacting: [`Interaction`] posted to `/vlogs/{id}/like` or `/vlogs/{id}/dislike`
//!
//! ## Ids
//!
//! Stored entries are keyed by a string `_id`. Mock data files generated by other tools often carry a
//! numeric `id` instead, or both keys at once, so reading accepts either and prefers `_id`.
//!
//! ## Lenient reads
//!
//! A single odd record must not sink a whole listing, so reading a [`Vlog`] also:
//! - prefers `uploadDate` over `createdAt`, falling back to the time of reading
//! - takes missing or `null` counters as 0
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod validation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawVlog")]
pub struct Vlog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub category: String,
    pub creator_name: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

impl Vlog {
    pub fn counter(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Like => self.likes,
            ReactionKind::Dislike => self.dislikes,
        }
    }

    pub fn counter_mut(&mut self, kind: ReactionKind) -> &mut i64 {
        match kind {
            ReactionKind::Like => &mut self.likes,
            ReactionKind::Dislike => &mut self.dislikes,
        }
    }
}

/// Submission from the add-vlog form. Missing fields read as empty strings so that the
/// server can answer with a single "All fields are required" instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewVlog {
    pub creator_name: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<DateTime<Utc>>,
}

impl NewVlog {
    pub fn trimmed(self) -> Self {
        Self {
            creator_name: self.creator_name.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            video_url: self.video_url.trim().to_string(),
            category: self.category.trim().to_string(),
            upload_date: self.upload_date,
        }
    }

    pub fn has_missing_fields(&self) -> bool {
        [
            &self.creator_name,
            &self.title,
            &self.description,
            &self.video_url,
            &self.category,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }

    /// Counters always start at zero, whatever the submitter sent.
    pub fn into_vlog(self, id: String, now: DateTime<Utc>) -> Vlog {
        Vlog {
            id,
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            category: self.category,
            creator_name: self.creator_name,
            likes: 0,
            dislikes: 0,
            created_at: self.upload_date.unwrap_or(now),
        }
    }
}

/// Body of a like/dislike notification. `active` is true when the reaction was added,
/// false when it was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Last path segment of the counter endpoint.
    pub fn path(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }

    /// Name of the stored counter field.
    pub fn field(self) -> &'static str {
        match self {
            ReactionKind::Like => "likes",
            ReactionKind::Dislike => "dislikes",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing field `_id`")]
    MissingId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(id) => id,
            RawId::Number(id) => id.to_string(),
        }
    }
}

/// Every shape of vlog record seen in the wild.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVlog {
    #[serde(rename = "_id")]
    underscore_id: Option<RawId>,
    id: Option<RawId>,
    title: String,
    description: String,
    video_url: String,
    category: String,
    creator_name: String,
    likes: Option<i64>,
    dislikes: Option<i64>,
    upload_date: Option<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawVlog> for Vlog {
    type Error = RecordError;

    fn try_from(raw: RawVlog) -> Result<Self, Self::Error> {
        let id = raw.underscore_id.or(raw.id).ok_or(RecordError::MissingId)?;

        Ok(Vlog {
            id: id.into(),
            title: raw.title,
            description: raw.description,
            video_url: raw.video_url,
            category: raw.category,
            creator_name: raw.creator_name,
            likes: raw.likes.unwrap_or_default(),
            dislikes: raw.dislikes.unwrap_or_default(),
            created_at: raw.upload_date.or(raw.created_at).unwrap_or_else(Utc::now),
        })
    }
}

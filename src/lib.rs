//! # VlogSphere Client
//!
//! Client side of the VlogSphere video catalog: fetch the listing, filter it, render it, and let
//! the user like or dislike entries with their choices remembered locally.
//!
//! ## Payloads
//!
//! JSON over the backend REST API (see the `server` crate).
//!
//! ### Listing
//! - `GET /vlogs` returns every vlog, newest first
//! - Filtering by title search and category happens here, not on the server
//!
//! ### Reacting
//! - `POST /vlogs/{id}/like` or `/dislike` with `{"active": bool}`
//! - `active` says whether that reaction is now on (+1) or off (-1)
//!
//! ### Adding
//! - `POST /vlogs` with the add-vlog form, validated locally first
//!
//!
//!
//! ## Reactions
//!
//! - The user's reaction per vlog lives only on this installation, see [`interactions`]
//! - A press is a pure transition, see [`reaction`]
//! - The page applies it optimistically and persists it before telling the server, see [`page`]
//! - Failed notifications are logged and dropped, see [`sync`]
//!
//! Nothing reconciles local and remote counts. Lost notifications, or the same user on two
//! installations, drift the server counters for good.
//!
//!
//!
//! ## Usage
//!
//! ```sh
//! vlogsphere list --search sunset --category Travel
//! vlogsphere like 65f0c2a1
//! vlogsphere add --creator Maya --title "Hiking the ridge" \
//!     --description "Three days on the trail" \
//!     --video-url https://www.youtube.com/embed/abc --category Travel
//! ```
//!
//! `--api-url` / `VLOGSPHERE_API` and `--state-file` / `VLOGSPHERE_STATE` pick the backend and
//! where reactions are kept.
pub mod api;
pub mod error;
pub mod interactions;
pub mod page;
pub mod reaction;
pub mod render;
pub mod storage;
pub mod sync;

#[cfg(test)]
mod testing;

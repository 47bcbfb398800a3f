//! # Page
//!
//! Everything the home page needs, owned in one place instead of page-wide globals: the loaded
//! vlogs, the user's interactions, the notifier and the current search/category filter.
//!
//! ## Pressing like/dislike
//!
//! Local first, remote eventually, remote failure ignored:
//! 1. Run the toggle engine on the stored reaction
//! 2. Apply the deltas to the displayed counters
//! 3. Record and persist the new reaction
//! 4. Notify the server for every counter that moved
//!
//! Steps 1-3 are committed before the server hears anything and are never rolled back.
use catalog::Vlog;
use tracing::warn;

use crate::{
    error::ClientError,
    interactions::InteractionStore,
    reaction::{Action, ReactionState, Transition, toggle},
    storage::LocalStorage,
    sync::Notifier,
};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub search: String,
    pub category: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl Filter {
    pub fn matches(&self, vlog: &Vlog) -> bool {
        let term = self.search.trim().to_lowercase();

        let matches_search = term.is_empty() || vlog.title.to_lowercase().contains(&term);
        let matches_category = self.category == ALL_CATEGORIES || vlog.category == self.category;

        matches_search && matches_category
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressOutcome {
    /// The vlog as now displayed, counters already adjusted.
    pub vlog: Vlog,
    pub transition: Transition,
    /// False when any notification failed. Local state is kept either way.
    pub synced: bool,
}

pub struct Page<S, N> {
    vlogs: Vec<Vlog>,
    interactions: InteractionStore<S>,
    notifier: N,
    filter: Filter,
}

impl<S: LocalStorage, N: Notifier> Page<S, N> {
    pub fn new(interactions: InteractionStore<S>, notifier: N) -> Self {
        Self {
            vlogs: Vec::new(),
            interactions,
            notifier,
            filter: Filter::default(),
        }
    }

    pub fn load(&mut self, vlogs: Vec<Vlog>) {
        self.vlogs = vlogs;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn visible(&self) -> impl Iterator<Item = &Vlog> {
        self.vlogs.iter().filter(|vlog| self.filter.matches(vlog))
    }

    pub fn vlog(&self, vlog_id: &str) -> Option<&Vlog> {
        self.vlogs.iter().find(|vlog| vlog.id == vlog_id)
    }

    pub fn reaction(&self, vlog_id: &str) -> ReactionState {
        self.interactions.get(vlog_id)
    }

    pub async fn press(
        &mut self,
        vlog_id: &str,
        action: Action,
    ) -> Result<PressOutcome, ClientError> {
        let vlog = self
            .vlogs
            .iter_mut()
            .find(|vlog| vlog.id == vlog_id)
            .ok_or_else(|| ClientError::UnknownVlog(vlog_id.to_string()))?;

        let transition = toggle(self.interactions.get(vlog_id), action);

        vlog.likes = vlog.likes.saturating_add(transition.like_delta.into());
        vlog.dislikes = vlog.dislikes.saturating_add(transition.dislike_delta.into());
        let vlog = vlog.clone();

        self.interactions.set(vlog_id, transition.next);
        if let Err(e) = self.interactions.persist_all() {
            warn!("Error saving user interactions: {e}");
        }

        let mut synced = true;
        for (kind, active) in transition.notifications() {
            if self.notifier.notify(vlog_id, kind, active).await.is_err() {
                synced = false;
            }
        }

        Ok(PressOutcome {
            vlog,
            transition,
            synced,
        })
    }
}

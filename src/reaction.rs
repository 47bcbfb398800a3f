//! # Reactions
//!
//! One user's like/dislike state toward one vlog, and the pure state machine that moves it.
//!
//! | current  | press   | next     | likes | dislikes |
//! |----------|---------|----------|-------|----------|
//! | None     | like    | Liked    | +1    | 0        |
//! | Liked    | like    | None     | -1    | 0        |
//! | Disliked | like    | Liked    | +1    | -1       |
//! | None     | dislike | Disliked | 0     | +1       |
//! | Disliked | dislike | None     | 0     | -1       |
//! | Liked    | dislike | Disliked | -1    | +1       |
//!
//! Persisted as `null`, `"like"` or `"dislike"`.
use catalog::ReactionKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<ReactionKind>", into = "Option<ReactionKind>")]
pub enum ReactionState {
    #[default]
    None,
    Liked,
    Disliked,
}

impl From<Option<ReactionKind>> for ReactionState {
    fn from(kind: Option<ReactionKind>) -> Self {
        match kind {
            None => ReactionState::None,
            Some(ReactionKind::Like) => ReactionState::Liked,
            Some(ReactionKind::Dislike) => ReactionState::Disliked,
        }
    }
}

impl From<ReactionState> for Option<ReactionKind> {
    fn from(state: ReactionState) -> Self {
        match state {
            ReactionState::None => None,
            ReactionState::Liked => Some(ReactionKind::Like),
            ReactionState::Disliked => Some(ReactionKind::Dislike),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PressLike,
    PressDislike,
}

impl Action {
    pub fn kind(self) -> ReactionKind {
        match self {
            Action::PressLike => ReactionKind::Like,
            Action::PressDislike => ReactionKind::Dislike,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: ReactionState,
    pub like_delta: i8,
    pub dislike_delta: i8,
}

impl Transition {
    fn new(next: ReactionState, like_delta: i8, dislike_delta: i8) -> Self {
        Self {
            next,
            like_delta,
            dislike_delta,
        }
    }

    pub fn delta(&self, kind: ReactionKind) -> i8 {
        match kind {
            ReactionKind::Like => self.like_delta,
            ReactionKind::Dislike => self.dislike_delta,
        }
    }

    /// One `(kind, active)` per counter this transition moves, likes first.
    ///
    /// Switching between Liked and Disliked moves both counters, so the server hears about both.
    pub fn notifications(&self) -> Vec<(ReactionKind, bool)> {
        [ReactionKind::Like, ReactionKind::Dislike]
            .into_iter()
            .filter(|kind| self.delta(*kind) != 0)
            .map(|kind| (kind, self.delta(kind) > 0))
            .collect()
    }
}

pub fn toggle(current: ReactionState, action: Action) -> Transition {
    use ReactionState::{Disliked, Liked, None};

    match (current, action) {
        (None, Action::PressLike) => Transition::new(Liked, 1, 0),
        (Liked, Action::PressLike) => Transition::new(None, -1, 0),
        (Disliked, Action::PressLike) => Transition::new(Liked, 1, -1),
        (None, Action::PressDislike) => Transition::new(Disliked, 0, 1),
        (Disliked, Action::PressDislike) => Transition::new(None, 0, -1),
        (Liked, Action::PressDislike) => Transition::new(Disliked, -1, 1),
    }
}

//! Result types for committed decisions and finished games.

use serde::Serialize;

use crate::game::{Feedback, GameOutcome};

/// What a committed decision changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommitResult {
    /// Whether the decision was correct.
    pub feedback: Feedback,
    /// Score after the commit.
    pub score: usize,
    /// Attempts after the commit.
    pub attempts: usize,
    /// Lives after the commit.
    pub lives: u8,
    /// Set when this commit ended the game.
    pub outcome: Option<GameOutcome>,
}

/// Final tally shown on the terminal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// How the game ended.
    pub outcome: GameOutcome,
    /// Correct judgments.
    pub score: usize,
    /// Judgments a full game asks for (deck length minus one).
    pub rounds: usize,
    /// Judgments actually made.
    pub attempts: usize,
    /// Lives remaining.
    pub lives: u8,
    /// Whether every card in the deck was judged correctly.
    pub perfect: bool,
}

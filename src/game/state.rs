//! Game state types.

use serde::Serialize;

/// A player's judgment about the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// The current artwork predates the reference artwork.
    Before,
    /// The current artwork was made after the reference artwork.
    After,
}

impl Direction {
    /// Returns the direction that is correct for the given years.
    ///
    /// Equal years count as "not after", so `Before` is correct for them.
    #[must_use]
    pub const fn between(previous_year: i32, current_year: i32) -> Self {
        if current_year > previous_year {
            Self::After
        } else {
            Self::Before
        }
    }

    /// Returns the sign of the horizontal offset for this direction.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Before => -1.0,
            Self::After => 1.0,
        }
    }
}

/// Outcome feedback shown while a decision settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feedback {
    /// The judgment was right.
    Correct,
    /// The judgment was wrong.
    Incorrect,
}

impl Feedback {
    /// Returns whether this is [`Feedback::Correct`].
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Returns the vibration pattern for this outcome, in milliseconds.
    ///
    /// Alternating on/off durations: a single short pulse when correct,
    /// short-long-short when incorrect.
    #[must_use]
    pub const fn vibration_pattern(self) -> &'static [u32] {
        match self {
            Self::Correct => &[30],
            Self::Incorrect => &[20, 30, 40],
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameOutcome {
    /// Every card was judged and at least one life remained.
    DeckCompleted,
    /// The last life was lost.
    OutOfLives,
}

/// Coarse game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GamePhase {
    /// Fewer than two artworks are loaded; no decisions are accepted.
    NotReady,
    /// Waiting for the player to judge the current card.
    AwaitingDecision,
    /// Feedback is showing and a commit is pending.
    Settling,
    /// The game is over.
    Finished(GameOutcome),
}

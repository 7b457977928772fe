use tracing::{debug, info};

use crate::result::CommitResult;

use super::{Direction, Feedback, Game};

/// Why a call was ignored.
///
/// Ignored calls are not failures: input arrives from several sources and
/// repeats are expected while feedback is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoredReason {
    /// Fewer than two cards are in the deck.
    NotReady,
    /// The game is over.
    Finished,
    /// A previous decision has not been committed yet.
    FeedbackPending,
    /// The ticket belongs to an earlier game or was already committed.
    StaleTicket,
}

/// A staged decision waiting for its settle delay to elapse.
///
/// Returned by [`Game::decide`] and consumed by [`Game::commit`]. The ticket
/// carries the epoch of the game that issued it, so a ticket issued before a
/// restart commits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingCommit {
    epoch: u64,
    position: usize,
    direction: Direction,
    feedback: Feedback,
}

impl PendingCommit {
    /// Returns the epoch of the game that issued this ticket.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns the position the decision was made at.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the chosen direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the feedback to show while settling.
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

impl Game {
    /// Checks whether a decision would be accepted right now.
    ///
    /// # Errors
    ///
    /// Returns the reason a decision would be ignored.
    pub fn can_decide(&self) -> Result<(), IgnoredReason> {
        if self.finished {
            return Err(IgnoredReason::Finished);
        }
        if !self.is_ready() {
            return Err(IgnoredReason::NotReady);
        }
        if self.feedback.is_some() {
            return Err(IgnoredReason::FeedbackPending);
        }
        Ok(())
    }

    /// Judges the current card against the reference card.
    ///
    /// The outcome is shown immediately ([`Game::feedback`] and
    /// [`Game::is_revealed`]) but score, lives and position only change when
    /// the returned ticket is passed to [`Game::commit`].
    ///
    /// Returns `None` without changing anything if the game is finished, not
    /// ready, or already settling a decision.
    pub fn decide(&mut self, direction: Direction) -> Option<PendingCommit> {
        if let Err(reason) = self.can_decide() {
            debug!(?direction, ?reason, "decision ignored");
            return None;
        }

        let (Some(previous), Some(current)) = (self.previous(), self.current()) else {
            debug!(?direction, position = self.position, "decision ignored: no card pair");
            return None;
        };

        let expected = Direction::between(previous.year, current.year);
        let feedback = if direction == expected {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };

        debug!(
            ?direction,
            previous = previous.year,
            current = current.year,
            ?feedback,
            position = self.position,
            "decision staged"
        );

        self.feedback = Some(feedback);
        self.revealed = true;

        Some(PendingCommit {
            epoch: self.epoch,
            position: self.position,
            direction,
            feedback,
        })
    }

    /// Applies a staged decision.
    ///
    /// Counts the attempt, then adds a point or takes a life. The game ends
    /// when no lives remain or the last card has been judged; otherwise the
    /// next card becomes current.
    ///
    /// Returns `None` for tickets from before the last restart or tickets
    /// that were already committed.
    pub fn commit(&mut self, ticket: PendingCommit) -> Option<CommitResult> {
        if ticket.epoch != self.epoch
            || ticket.position != self.position
            || self.feedback != Some(ticket.feedback)
        {
            debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                reason = ?IgnoredReason::StaleTicket,
                "commit ignored"
            );
            return None;
        }

        self.feedback = None;
        self.attempts += 1;
        if ticket.feedback.is_correct() {
            self.score += 1;
        } else {
            self.lives = self.lives.saturating_sub(1);
        }

        let out_of_lives = self.lives == 0;
        let end_of_deck = self.position >= self.deck.len() - 1;

        let outcome = if out_of_lives || end_of_deck {
            self.finished = true;
            self.out_of_lives = out_of_lives;
            let outcome = self.outcome();
            info!(
                ?outcome,
                score = self.score,
                rounds = self.rounds(),
                "game finished"
            );
            outcome
        } else {
            self.position += 1;
            self.revealed = false;
            None
        };

        debug!(
            score = self.score,
            attempts = self.attempts,
            lives = self.lives,
            position = self.position,
            "decision committed"
        );

        Some(CommitResult {
            feedback: ticket.feedback,
            score: self.score,
            attempts: self.attempts,
            lives: self.lives,
            outcome,
        })
    }

    /// Decides and commits in one step, skipping the settle delay.
    pub fn decide_now(&mut self, direction: Direction) -> Option<CommitResult> {
        let ticket = self.decide(direction)?;
        self.commit(ticket)
    }
}

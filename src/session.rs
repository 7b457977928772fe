//! Clock-driven game session.
//!
//! [`Session`] runs the whole input pipeline on top of a [`Game`]:
//! input, swipe animation, decision, settle delay, commit. It never reads
//! the clock itself; every call takes the caller's `now`, and the caller
//! calls [`Session::tick`] from its event loop until it returns `None`.

use core::time::Duration;
use std::time::Instant;

use tracing::debug;

use crate::catalog::{Catalog, CatalogSource};
use crate::game::{Direction, Game, PendingCommit};
use crate::gesture::{CardPose, Key, Release, SwipeAnimation, SwipeMapper};
use crate::haptics::{Haptics, NoHaptics, pulse};
use crate::options::GameOptions;
use crate::result::CommitResult;

/// Player input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// A key press.
    Key(Key),
    /// A tap on the left (`Before`) or right (`After`) edge of the card.
    Tap(Direction),
    /// A drag released at horizontal displacement `dx`.
    DragEnd {
        /// Displacement from the drag start.
        dx: f32,
    },
    /// The restart button.
    Restart,
}

/// Something the front end should react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A drag was released short of the threshold; the card returns to
    /// neutral.
    SnappedBack,
    /// A swipe animation started toward a decision.
    Swiping(Direction),
    /// A decision was made; feedback is showing until the commit.
    Staged(PendingCommit),
    /// A decision took effect.
    Committed(CommitResult),
    /// The game started over.
    Restarted,
}

/// A game together with its pending animation and scheduled commit.
#[derive(Debug)]
pub struct Session<H = NoHaptics> {
    game: Game,
    mapper: SwipeMapper,
    haptics: H,
    source: CatalogSource,
    notice: Option<&'static str>,
    swipe: Option<(SwipeAnimation, Instant)>,
    scheduled: Option<(Instant, PendingCommit)>,
}

impl Session<NoHaptics> {
    /// Creates a session over `catalog` without haptics.
    #[must_use]
    pub fn new(catalog: Catalog, options: GameOptions, seed: u64) -> Self {
        Self::with_haptics(catalog, options, seed, NoHaptics)
    }
}

impl<H: Haptics> Session<H> {
    /// Creates a session over `catalog` that pulses `haptics` on decisions.
    #[must_use]
    pub fn with_haptics(catalog: Catalog, options: GameOptions, seed: u64, haptics: H) -> Self {
        let source = catalog.source();
        let notice = catalog.notice();
        Self {
            game: Game::new(options, catalog.into_artworks(), seed),
            mapper: SwipeMapper::new(options.gesture),
            haptics,
            source,
            notice,
            swipe: None,
            scheduled: None,
        }
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns where the loaded artworks came from.
    #[must_use]
    pub const fn source(&self) -> CatalogSource {
        self.source
    }

    /// Returns the informational catalog message, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Replaces the loaded artworks and starts over.
    ///
    /// A catalog that fell back to the built-in list only updates the
    /// notice; the game in progress carries on.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.notice = catalog.notice();
        if catalog.fallback_reason().is_some() {
            return;
        }
        self.source = catalog.source();
        self.cancel_pending();
        self.game.load_catalog(catalog);
    }

    /// Starts over with a fresh shuffle, dropping any animation or
    /// scheduled commit.
    pub fn restart(&mut self) {
        self.cancel_pending();
        self.game.restart();
    }

    fn cancel_pending(&mut self) {
        if let Some((_, ticket)) = self.scheduled.take() {
            debug!(epoch = ticket.epoch(), "scheduled commit superseded");
        }
        self.swipe = None;
    }

    /// Returns whether input would be acted on right now.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.swipe.is_none() && self.game.can_decide().is_ok()
    }

    /// Handles player input.
    ///
    /// Returns `None` if the input was ignored.
    pub fn handle(&mut self, input: Input, now: Instant) -> Option<SessionEvent> {
        if input == Input::Restart {
            self.restart();
            return Some(SessionEvent::Restarted);
        }

        if !self.accepts_input() {
            debug!(?input, reason = ?self.game.can_decide().err(), "input ignored");
            return None;
        }

        let direction = match input {
            Input::Key(key) => key.direction(),
            Input::Tap(direction) => direction,
            Input::DragEnd { dx } => match self.mapper.release(dx) {
                Release::Commit(direction) => direction,
                Release::SnapBack => return Some(SessionEvent::SnappedBack),
            },
            Input::Restart => return None,
        };

        let animation = SwipeAnimation::new(direction, &self.game.options().gesture);
        self.swipe = Some((animation, now));
        Some(SessionEvent::Swiping(direction))
    }

    /// Advances animations and timers to `now`.
    ///
    /// Returns at most one event per call.
    pub fn tick(&mut self, now: Instant) -> Option<SessionEvent> {
        if let Some((animation, started)) = self.swipe {
            if !animation.is_done(elapsed_ms(started, now)) {
                return None;
            }
            self.swipe = None;
            let ticket = self.game.decide(animation.direction())?;
            pulse(&mut self.haptics, ticket.feedback());
            let due = now + Duration::from_millis(self.game.options().settle_delay_ms);
            self.scheduled = Some((due, ticket));
            return Some(SessionEvent::Staged(ticket));
        }

        let (due, ticket) = self.scheduled?;
        if now < due {
            return None;
        }
        self.scheduled = None;
        self.game.commit(ticket).map(SessionEvent::Committed)
    }

    /// Returns when the next [`Session::tick`] can produce an event.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if let Some((animation, started)) = self.swipe {
            return Some(started + Duration::from_millis(animation.duration_ms()));
        }
        self.scheduled.map(|(due, _)| due)
    }

    /// Returns the card pose at `now`.
    ///
    /// While a drag is in progress the front end should use
    /// [`SwipeMapper::pose`] with the live drag offset instead.
    #[must_use]
    pub fn pose(&self, now: Instant) -> CardPose {
        let offset = self
            .swipe
            .map_or(0.0, |(animation, started)| {
                animation.offset_at(elapsed_ms(started, now))
            });
        self.mapper.pose(offset)
    }

    /// Returns the drag mapper for live drag rendering.
    #[must_use]
    pub const fn mapper(&self) -> &SwipeMapper {
        &self.mapper
    }
}

fn elapsed_ms(started: Instant, now: Instant) -> u64 {
    now.saturating_duration_since(started).as_millis() as u64
}

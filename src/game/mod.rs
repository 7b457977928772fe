//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::artwork::{Artwork, MIN_ARTWORKS};
use crate::catalog::Catalog;
use crate::deck::Deck;
use crate::options::{GameOptions, MAX_LIVES};
use crate::result::GameSummary;

mod decide;
pub mod state;

pub use decide::{IgnoredReason, PendingCommit};
pub use state::{Direction, Feedback, GameOutcome, GamePhase};

/// A chronology card game: judge whether each artwork came before or after
/// the one preceding it in a shuffled deck.
///
/// The game owns the loaded artworks, the current deck and all counters.
/// Decisions go through [`Game::decide`] and take effect on
/// [`Game::commit`], which the front end calls once its feedback has
/// settled.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    /// Artworks decks are drawn from.
    artworks: Vec<Artwork>,
    deck: Deck,
    /// Index of the card under judgment; the reference card sits just before it.
    position: usize,
    score: usize,
    attempts: usize,
    lives: u8,
    finished: bool,
    out_of_lives: bool,
    feedback: Option<Feedback>,
    revealed: bool,
    /// Bumped on every reset so stale commits can be told apart.
    epoch: u64,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game over `artworks` with the given seed.
    ///
    /// With fewer than two artworks the game stays [`GamePhase::NotReady`]
    /// until [`Game::reset`] supplies more.
    ///
    /// # Example
    ///
    /// ```
    /// use artswipe::{Game, GameOptions, catalog::builtin_artworks};
    ///
    /// let game = Game::new(GameOptions::default(), builtin_artworks(), 42);
    /// assert_eq!(game.lives(), 3);
    /// assert_eq!(game.position(), 1);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, artworks: Vec<Artwork>, seed: u64) -> Self {
        let mut game = Self::empty(options, seed);
        game.reset(artworks);
        game
    }

    /// Creates a new game over the artworks of `catalog`.
    #[must_use]
    pub fn from_catalog(options: GameOptions, catalog: &Catalog, seed: u64) -> Self {
        Self::new(options, catalog.artworks().to_vec(), seed)
    }

    /// Creates a game that plays `deck` in the given order.
    ///
    /// Restarting shuffles the same cards.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Vec<Artwork>, seed: u64) -> Self {
        let mut game = Self::empty(options, seed);
        game.artworks.clone_from(&deck);
        game.begin(Deck::ordered(deck));
        game
    }

    fn empty(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            artworks: Vec::new(),
            deck: Deck::default(),
            position: 1,
            score: 0,
            attempts: 0,
            lives: options.lives.clamp(1, MAX_LIVES),
            finished: false,
            out_of_lives: false,
            feedback: None,
            revealed: false,
            epoch: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the loaded artworks and starts over with a fresh shuffle.
    pub fn reset(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
        self.restart();
    }

    /// Replaces the loaded artworks with those of `catalog` and starts over.
    ///
    /// A catalog that fell back to the built-in list leaves the game in
    /// progress untouched. Returns whether the game was reset.
    pub fn load_catalog(&mut self, catalog: Catalog) -> bool {
        if let Some(reason) = catalog.fallback_reason() {
            debug!(%reason, epoch = self.epoch, "keeping current artworks");
            return false;
        }
        self.reset(catalog.into_artworks());
        true
    }

    /// Starts over with a fresh shuffle of the loaded artworks.
    ///
    /// Any pending commit is invalidated.
    pub fn restart(&mut self) {
        let deck = Deck::shuffled(&self.artworks, &mut self.rng);
        self.begin(deck);
    }

    fn begin(&mut self, deck: Deck) {
        self.deck = deck;
        self.position = 1;
        self.score = 0;
        self.attempts = 0;
        self.lives = self.starting_lives();
        self.finished = false;
        self.out_of_lives = false;
        self.feedback = None;
        self.revealed = false;
        self.epoch = self.epoch.wrapping_add(1);

        debug!(
            epoch = self.epoch,
            cards = self.deck.len(),
            ready = self.is_ready(),
            "game reset"
        );
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the loaded artworks.
    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Returns the current deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whether the deck is large enough to play.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.deck.len() >= MIN_ARTWORKS
    }

    /// Returns the index of the card under judgment.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of correct judgments.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the number of committed judgments.
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns the lives a game starts with: the configured value, kept
    /// within `1..=MAX_LIVES`.
    #[must_use]
    pub fn starting_lives(&self) -> u8 {
        self.options.lives.clamp(1, MAX_LIVES)
    }

    /// Returns the remaining lives.
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns whether the game ended by losing the last life.
    #[must_use]
    pub const fn is_out_of_lives(&self) -> bool {
        self.out_of_lives
    }

    /// Returns the feedback currently showing, if a commit is pending.
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Returns whether the years of the current pair are revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns the reset counter.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns the card under judgment.
    #[must_use]
    pub fn current(&self) -> Option<&Artwork> {
        self.deck.get(self.position)
    }

    /// Returns the reference card.
    #[must_use]
    pub fn previous(&self) -> Option<&Artwork> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.deck.get(index))
    }

    /// Returns the card after the current one, for image prefetching.
    #[must_use]
    pub fn upcoming(&self) -> Option<&Artwork> {
        self.deck.get(self.position + 1)
    }

    /// Returns the number of judgments a full game asks for.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.deck.rounds()
    }

    /// Returns the progress counter shown next to the score.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.position.min(self.rounds())
    }

    /// Returns how the game ended, if it has.
    #[must_use]
    pub const fn outcome(&self) -> Option<GameOutcome> {
        if !self.finished {
            None
        } else if self.out_of_lives {
            Some(GameOutcome::OutOfLives)
        } else {
            Some(GameOutcome::DeckCompleted)
        }
    }

    /// Returns whether the game finished with every card judged correctly.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.finished && !self.out_of_lives && self.score == self.rounds()
    }

    /// Returns the coarse game phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if let Some(outcome) = self.outcome() {
            GamePhase::Finished(outcome)
        } else if !self.is_ready() {
            GamePhase::NotReady
        } else if self.feedback.is_some() {
            GamePhase::Settling
        } else {
            GamePhase::AwaitingDecision
        }
    }

    /// Returns the year label for the current pair while it is revealed,
    /// formatted as `"<previous year> → <current year>"`.
    #[must_use]
    pub fn reveal_label(&self) -> Option<String> {
        if !self.revealed {
            return None;
        }
        let previous = self.previous()?;
        let current = self.current()?;
        Some(format!("{} → {}", previous.year, current.year))
    }

    /// Returns the final tally once the game is over.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        let outcome = self.outcome()?;
        Some(GameSummary {
            outcome,
            score: self.score,
            rounds: self.rounds(),
            attempts: self.attempts,
            lives: self.lives,
            perfect: self.is_perfect(),
        })
    }
}

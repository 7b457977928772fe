//! Shuffled artwork decks.

use alloc::vec::Vec;
use core::ops::Index;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::artwork::Artwork;

/// An ordered sequence of artworks for one session.
///
/// A deck never changes once built; restarting a game builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Artwork>,
}

impl Deck {
    /// Builds a uniformly shuffled deck from `artworks`.
    pub fn shuffled<R: Rng + ?Sized>(artworks: &[Artwork], rng: &mut R) -> Self {
        let mut cards = artworks.to_vec();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that keeps the given order.
    #[must_use]
    pub const fn ordered(cards: Vec<Artwork>) -> Self {
        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of judgments a full game asks for.
    ///
    /// Every card except the first is compared against its predecessor.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    /// Returns the card at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Artwork> {
        self.cards.get(position)
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Artwork] {
        &self.cards
    }
}

impl Index<usize> for Deck {
    type Output = Artwork;

    fn index(&self, position: usize) -> &Self::Output {
        &self.cards[position]
    }
}

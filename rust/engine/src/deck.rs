use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A seeded, single-hand deck. The card order is derived solely from the
/// seed, so a recorded seed replays the exact same hand. Cards leave the
/// deck by advancing a cursor and are never reinserted.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Builds a freshly shuffled deck from `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards, position: 0 }
    }

    /// Removes and returns the next card, or `None` once all 52 are gone.
    /// A hand draws at most 12 cards (4 hole + 3 burns + 5 board), so an
    /// exhausted deck indicates a dealing bug upstream.
    pub fn deal(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Discards the next card face down before a board street.
    pub fn burn(&mut self) {
        let _ = self.deal();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

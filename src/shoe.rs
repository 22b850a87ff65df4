//! The dealing shoe.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::TableOptions;
use crate::round2;

/// A single card drawn from the shoe.
///
/// Reports whether the shoe reshuffled before the card came off the top, so
/// callers can surface the reshuffle without inspecting the shoe directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The card drawn.
    pub card: Card,
    /// Whether the shoe was reshuffled immediately before this draw.
    pub reshuffled: bool,
}

/// A multi-deck dealing shoe.
///
/// The shoe shuffles by repeated riffles: each pass cuts the stack at a
/// randomized point and interleaves the two piles with a bias toward the
/// larger one. After shuffling, the top card is burned. A cut point drawn
/// uniformly from 60% to 85% decides how deep the shoe is dealt; once the
/// remaining cards fall to or below the portion behind the cut point, the
/// next [`draw`](Self::draw) rebuilds and reshuffles the shoe first.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    decks: usize,
    passes: u32,
    shuffle_point: f64,
    reshuffles: u32,
}

impl Shoe {
    /// Creates a new shuffled shoe with the given seed.
    ///
    /// The same options and seed always produce the same card order.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            decks: options.decks(),
            passes: options.shuffle_passes(),
            shuffle_point: 0.0,
            reshuffles: 0,
        };
        shoe.rebuild();
        shoe
    }

    /// Draws the top card of the shoe.
    ///
    /// If the shoe has been dealt past its cut point, it is rebuilt and
    /// reshuffled before the card is drawn, and the returned [`Draw`] says
    /// so.
    pub fn draw(&mut self) -> Draw {
        let mut reshuffled = false;
        loop {
            if !self.cut_reached() {
                if let Some(card) = self.cards.pop() {
                    return Draw { card, reshuffled };
                }
            }
            self.rebuild();
            self.reshuffles += 1;
            reshuffled = true;
        }
    }

    /// Replaces the shoe contents with a fixed sequence of cards.
    ///
    /// Cards are drawn in the order given. Automatic reshuffling is held off
    /// until the stacked cards run out, after which the shoe rebuilds itself
    /// as usual. Intended for tests and demonstrations.
    pub fn stack(&mut self, cards: &[Card]) {
        self.cards.clear();
        self.cards.extend(cards.iter().rev().copied());
        self.shuffle_point = 1.0;
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the current cut point as a fraction of the shoe dealt before
    /// reshuffling, between 0.60 and 0.85.
    #[must_use]
    pub const fn shuffle_point(&self) -> f64 {
        self.shuffle_point
    }

    /// Returns how many times the shoe has reshuffled itself mid-play.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Returns whether the shoe has been dealt to or past its cut point.
    #[expect(clippy::cast_precision_loss)]
    fn cut_reached(&self) -> bool {
        let capacity = (self.decks * DECK_SIZE) as f64;
        self.cards.len() as f64 <= capacity * (1.0 - self.shuffle_point)
    }

    /// Rebuilds the shoe: fresh decks, a new cut point, the configured
    /// number of riffle passes, then one burned card.
    fn rebuild(&mut self) {
        self.shuffle_point = round2(self.rng.random_range(0.60..=0.85));
        let mut cards = Vec::with_capacity(self.decks * DECK_SIZE);
        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        for _ in 0..self.passes {
            self.riffle(&mut cards);
        }
        let _ = cards.pop();
        self.cards = cards;
    }

    /// Performs one riffle pass: cut the stack, then interleave the two
    /// piles, favoring whichever pile is currently larger.
    fn riffle(&mut self, cards: &mut Vec<Card>) {
        let divisor = (2 + self.rng.random_range(-1..=3_i32)) as usize;
        let cut = cards.len() / divisor;
        let (left, right) = cards.split_at(cut);
        let mut merged = Vec::with_capacity(cards.len());
        let (mut li, mut ri) = (0, 0);
        while li < left.len() && ri < right.len() {
            let ahead_left = left.len() - li;
            let ahead_right = right.len() - ri;
            let chance_left = if ahead_left > ahead_right {
                0.6
            } else if ahead_right > ahead_left {
                0.4
            } else {
                0.5
            };
            if self.rng.random_bool(chance_left) {
                merged.push(left[li]);
                li += 1;
            } else {
                merged.push(right[ri]);
                ri += 1;
            }
        }
        merged.extend_from_slice(&left[li..]);
        merged.extend_from_slice(&right[ri..]);
        *cards = merged;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn shoe(seed: u64) -> Shoe {
        Shoe::new(TableOptions::new(), seed)
    }

    #[test]
    fn fresh_shoe_holds_six_decks_minus_burn() {
        assert_eq!(shoe(1).remaining(), 6 * DECK_SIZE - 1);
    }

    #[test]
    fn fresh_shoe_is_six_full_decks_short_one_card() {
        let shoe = shoe(7);
        let mut counts: HashMap<Card, u32> = HashMap::new();
        for &card in shoe.cards.iter() {
            *counts.entry(card).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), DECK_SIZE);
        let fives = counts.values().filter(|&&n| n == 5).count();
        let sixes = counts.values().filter(|&&n| n == 6).count();
        assert_eq!(fives, 1);
        assert_eq!(sixes, DECK_SIZE - 1);
    }

    #[test]
    fn same_seed_deals_identically() {
        let mut a = shoe(42);
        let mut b = shoe(42);
        assert_eq!(a.shuffle_point(), b.shuffle_point());
        for _ in 0..30 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn shuffle_point_is_in_range_and_rounded() {
        for seed in 0..25 {
            let sp = shoe(seed).shuffle_point();
            assert!((0.60..=0.85).contains(&sp), "cut point {sp} out of range");
            let cents = sp * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9, "cut point {sp} not rounded");
        }
    }

    #[test]
    #[expect(clippy::cast_precision_loss)]
    fn reshuffles_once_cut_point_is_reached() {
        let mut shoe = shoe(3);
        let threshold = (6 * DECK_SIZE) as f64 * (1.0 - shoe.shuffle_point());
        let mut draws = 0;
        loop {
            let before = shoe.remaining();
            let draw = shoe.draw();
            if draw.reshuffled {
                assert!(before as f64 <= threshold + 1e-9);
                break;
            }
            draws += 1;
            assert!(draws < 6 * DECK_SIZE, "shoe never reshuffled");
        }
        assert_eq!(shoe.reshuffles(), 1);
        assert_eq!(shoe.remaining(), 6 * DECK_SIZE - 2);
    }

    #[test]
    fn stacked_cards_come_out_in_order() {
        let mut shoe = shoe(9);
        let rigged = [
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Clubs, Rank::Two),
        ];
        shoe.stack(&rigged);
        for &expected in &rigged {
            let draw = shoe.draw();
            assert_eq!(draw.card, expected);
            assert!(!draw.reshuffled);
        }
        let refill = shoe.draw();
        assert!(refill.reshuffled);
        assert_eq!(shoe.remaining(), 6 * DECK_SIZE - 2);
        assert_eq!(shoe.reshuffles(), 1);
    }
}

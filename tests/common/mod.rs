//! Helpers shared by the integration tests.

use bjcore::{Card, Round, TableOptions};
use rand::RngCore;

/// A random source that always yields zero, so the shoe draws its cards
/// front to back.
pub struct FrontRng;

impl RngCore for FrontRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

pub fn cards(symbols: &[&str]) -> Vec<Card> {
    symbols.iter().map(|s| s.parse().unwrap()).collect()
}

/// A table with `hands` hands whose shoe hands out `draws` in order.
///
/// Deal order is every player hand, the dealer, every player hand again,
/// then the dealer's hole card.
pub fn staged_round(hands: usize, draws: &[&str]) -> Round<FrontRng> {
    let options = TableOptions::default().with_hands(hands);
    let mut round = Round::with_rng(options, FrontRng).unwrap();
    round.shoe_mut().replace_cards(cards(draws));
    round
}

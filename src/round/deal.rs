use rand::RngCore;
use tracing::debug;

use crate::hand::Hand;

use super::{Round, RoundState, Seat};

impl<R: RngCore> Round<R> {
    /// Starts a new round, discarding the previous one.
    ///
    /// Every player hand gets one card, then the dealer, then a second pass.
    /// The dealer's second card is the peek: a dealer blackjack ends the round
    /// before the player acts. A blackjack in the first player hand finishes
    /// that hand (and any blackjacks after it) straight away.
    pub fn deal(&mut self) {
        self.player_hands.clear();
        self.player_hands.resize_with(self.num_hands, Hand::new);
        self.dealer_hand.clear();
        self.current_hand_index = 0;
        self.state = RoundState::Ongoing;
        debug!(hands = self.num_hands, shoe = self.shoe.len(), "dealing round");

        for pass in 0..2 {
            for index in 0..self.player_hands.len() {
                self.draw(Seat::Player(index), false);
            }
            self.draw(Seat::Dealer, pass == 1);
        }

        if self.is_round_ongoing() && self.player_hands.first().is_some_and(Hand::is_blackjack) {
            self.resolve_hand();
        }
    }
}

use rand::RngCore;
use tracing::{debug, trace};

use crate::hand::Hand;

use super::{Round, RoundState, Seat};

/// The dealer draws on anything below this and stands on all 17s.
const DEALER_STANDS_ON: u8 = 17;

impl<R: RngCore> Round<R> {
    /// Finishes the current hand and moves the round forward.
    ///
    /// After the last hand the dealer plays out and the round ends. A dealer
    /// blackjack ends the round at once and leaves the index on the last
    /// hand. Otherwise play moves to the next hand, skipping over any hands
    /// that are already blackjack.
    pub(super) fn resolve_hand(&mut self) {
        loop {
            let last = self.player_hands.len().saturating_sub(1);

            if self.current_hand_index >= last {
                self.finish_round();
                return;
            }

            if self.dealer_hand.is_blackjack() {
                debug!(
                    skipped = last - self.current_hand_index,
                    "dealer blackjack, round over"
                );
                self.current_hand_index = last;
                self.state = RoundState::Over;
                return;
            }

            self.current_hand_index += 1;
            if !self
                .player_hands
                .get(self.current_hand_index)
                .is_some_and(Hand::is_blackjack)
            {
                return;
            }
            trace!(index = self.current_hand_index, "blackjack, moving on");
        }
    }

    /// Ends the round and plays the dealer's hand if anything is left to beat.
    fn finish_round(&mut self) {
        self.state = RoundState::Over;

        if self.dealer_hand.is_blackjack() {
            debug!("dealer blackjack, round over");
            return;
        }

        if self.player_hands.iter().all(Hand::is_bust) {
            debug!("all hands bust, dealer stands");
            return;
        }

        let drawn = self.dealer_play();
        debug!(
            drawn,
            dealer = self.dealer_hand.score_only(),
            "round over"
        );
    }

    /// Draws for the dealer until the total reaches 17, soft or hard.
    ///
    /// Returns the number of cards drawn.
    fn dealer_play(&mut self) -> usize {
        let mut drawn = 0;
        while self.dealer_hand.score_only() < DEALER_STANDS_ON {
            if self.draw(Seat::Dealer, false).is_none() {
                break;
            }
            drawn += 1;
        }
        drawn
    }
}

use rand::RngCore;
use tracing::debug;

use crate::card::Card;
use crate::hand::Hand;

use super::{Round, Seat};

impl<R: RngCore> Round<R> {
    /// The hand being played, if a round is ongoing.
    fn active_hand(&self) -> Option<&Hand> {
        if self.is_round_ongoing() {
            self.player_hands.get(self.current_hand_index)
        } else {
            None
        }
    }

    /// Returns whether [`Round::split`] would split the current hand.
    pub fn can_split(&self) -> bool {
        self.active_hand().is_some_and(Hand::is_splittable)
    }

    /// Returns whether [`Round::double_down`] would double the current hand.
    pub fn can_double_down(&self) -> bool {
        self.active_hand().is_some_and(|hand| hand.len() == 2)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that busts or reaches 21 finishes on its own. Returns the card
    /// drawn, or `None` if no round is ongoing or the hand cannot take a card.
    pub fn hit(&mut self) -> Option<Card> {
        let hand = self.active_hand()?;
        if hand.is_empty() || hand.score_only() > 21 {
            return None;
        }

        self.draw(Seat::Player(self.current_hand_index), true)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Returns whether anything happened, which is only the case while a
    /// round is ongoing.
    pub fn stand(&mut self) -> bool {
        if !self.is_round_ongoing() {
            return false;
        }

        self.resolve_hand();
        true
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The pair is replaced in place by two hands holding one card each and
    /// the original bet multiplier, so the index still names the first of
    /// them. Each new hand then gets one more card. Returns whether the hand
    /// was split.
    pub fn split(&mut self) -> bool {
        let index = self.current_hand_index;
        let (first, second, multiplier) = match self.active_hand() {
            Some(hand) if hand.is_splittable() => match hand.cards() {
                [first, second] => (*first, *second, hand.bet_multiplier()),
                _ => return false,
            },
            _ => return false,
        };

        self.player_hands.remove(index);
        self.player_hands
            .insert(index, Hand::with_card(multiplier, second));
        self.player_hands
            .insert(index, Hand::with_card(multiplier, first));

        self.draw(Seat::Player(index), false);
        self.draw(Seat::Player(index + 1), false);
        debug!(index, hands = self.player_hands.len(), "split");

        if self.player_hands.get(index).is_some_and(Hand::is_blackjack) {
            self.resolve_hand();
        }

        true
    }

    /// Player action: Double down (double the bet, take one card, then stand).
    ///
    /// Returns the card drawn, or `None` if the current hand does not have
    /// exactly two cards.
    pub fn double_down(&mut self) -> Option<Card> {
        if !self.can_double_down() {
            return None;
        }

        let index = self.current_hand_index;
        if let Some(hand) = self.player_hands.get_mut(index) {
            hand.double_bet();
        }

        // The hand is finished exactly once below, whatever the card.
        let card = self.draw(Seat::Player(index), false);
        debug!(index, card = ?card, "double down");
        self.resolve_hand();

        card
    }
}

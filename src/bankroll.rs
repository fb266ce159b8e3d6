//! Player funds, bets and payouts.

use alloc::vec::Vec;

use rand::RngCore;
use tracing::debug;

use crate::card::Card;
use crate::error::{BetError, SettleError};
use crate::options::RoundingMode;
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::round::{Round, RoundState};

/// Blackjack pays 3 to 2.
const BLACKJACK_PAYS: f64 = 1.5;

/// Stake of the round most recently dealt through a [`Bankroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundStake {
    /// No round has been paid for.
    Idle,
    /// Stake per hand debited when the round was dealt.
    Paid(usize),
    /// The paid round has been settled.
    Settled,
}

/// The player's funds and the standing bet.
///
/// The bet is the stake per hand. It stays in place from round to round until
/// it is changed, and funds are only debited when a bet is paid: once per
/// hand when dealing and once more for every split or double down. The stake
/// debited at the deal is what the round is settled against, so changing the
/// bet mid-round only affects the next deal.
///
/// ```
/// use bjcore::{Bankroll, HandOutcome};
///
/// let mut bankroll = Bankroll::new(100);
/// bankroll.set_bet(10).unwrap();
/// bankroll.pay_bet(1).unwrap();
/// assert_eq!(bankroll.funds(), 90);
///
/// assert_eq!(bankroll.receive_bet(HandOutcome::Win, 1), 20);
/// assert_eq!(bankroll.funds(), 110);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bankroll {
    /// Available funds.
    funds: usize,
    /// Stake per hand, `None` until a bet is placed.
    current_bet: Option<usize>,
    /// Stake locked in by the last deal.
    round_stake: RoundStake,
    /// Rounding mode for blackjack payouts.
    rounding_blackjack: RoundingMode,
}

impl Bankroll {
    /// Creates a bankroll with the given funds and no bet.
    #[must_use]
    pub const fn new(funds: usize) -> Self {
        Self {
            funds,
            current_bet: None,
            round_stake: RoundStake::Idle,
            rounding_blackjack: RoundingMode::Down,
        }
    }

    /// Sets the rounding mode used when a 3:2 payout is not a whole unit.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Returns the available funds.
    #[must_use]
    pub const fn funds(&self) -> usize {
        self.funds
    }

    /// Replaces the available funds.
    pub const fn set_funds(&mut self, funds: usize) {
        self.funds = funds;
    }

    /// Returns the stake per hand, if a bet has been placed.
    #[must_use]
    pub const fn current_bet(&self) -> Option<usize> {
        self.current_bet
    }

    /// Places the stake per hand. Nothing is debited until the bet is paid.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] if `bet` is zero.
    pub const fn set_bet(&mut self, bet: usize) -> Result<(), BetError> {
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }

        self.current_bet = Some(bet);
        Ok(())
    }

    fn cost(&self, units: usize) -> Result<usize, BetError> {
        let bet = self.current_bet.ok_or(BetError::NoBet)?;
        Self::cost_of(bet, units)
    }

    fn cost_of(bet: usize, units: usize) -> Result<usize, BetError> {
        bet.checked_mul(units).ok_or(BetError::InsufficientFunds)
    }

    fn debit(&mut self, cost: usize) -> Result<usize, BetError> {
        if cost > self.funds {
            return Err(BetError::InsufficientFunds);
        }

        self.funds -= cost;
        Ok(cost)
    }

    /// Returns the stake per hand locked in by the last deal, until the round
    /// is settled.
    #[must_use]
    pub const fn round_bet(&self) -> Option<usize> {
        match self.round_stake {
            RoundStake::Paid(bet) => Some(bet),
            RoundStake::Idle | RoundStake::Settled => None,
        }
    }

    /// Returns whether the funds cover `units` times the bet.
    #[must_use]
    pub fn can_pay_bet(&self, units: usize) -> bool {
        self.cost(units).is_ok_and(|cost| cost <= self.funds)
    }

    /// Debits `units` times the bet and returns the amount debited.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NoBet`] if no bet has been placed, or
    /// [`BetError::InsufficientFunds`] if the funds do not cover it.
    pub fn pay_bet(&mut self, units: usize) -> Result<usize, BetError> {
        let cost = self.cost(units)?;
        self.debit(cost)
    }

    /// Amount returned for a hand worth `multiplier` bets with `outcome`,
    /// stake included.
    ///
    /// A win returns twice the stake, a blackjack two and a half times, a
    /// push the stake itself and a loss nothing.
    #[must_use]
    pub fn payout(&self, outcome: HandOutcome, multiplier: u32) -> usize {
        let stake = self.current_bet.unwrap_or(0) * multiplier as usize;
        self.payout_for(outcome, stake)
    }

    fn payout_for(&self, outcome: HandOutcome, stake: usize) -> usize {
        match outcome {
            HandOutcome::Win => stake * 2,
            HandOutcome::Blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (stake as f64) * BLACKJACK_PAYS;
                stake + self.rounding_blackjack.apply(winnings)
            }
            HandOutcome::Push => stake,
            HandOutcome::Lose => 0,
        }
    }

    /// Credits the payout for a single hand and returns the amount credited.
    pub fn receive_bet(&mut self, outcome: HandOutcome, multiplier: u32) -> usize {
        let payout = self.payout(outcome, multiplier);
        self.funds += payout;
        payout
    }

    /// Pays one bet per hand and deals a new round.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotEligible`] while a round is ongoing, or the
    /// error from [`Bankroll::pay_bet`]. Nothing is dealt on error.
    pub fn deal<R: RngCore>(&mut self, round: &mut Round<R>) -> Result<(), BetError> {
        if round.is_round_ongoing() {
            return Err(BetError::NotEligible);
        }

        let bet = self.current_bet.ok_or(BetError::NoBet)?;
        let paid = self.pay_bet(round.num_hands())?;
        self.round_stake = RoundStake::Paid(bet);
        debug!(paid, funds = self.funds, "bets paid");
        round.deal();
        Ok(())
    }

    /// Pays for the extra hand at the round's stake and splits the current
    /// hand.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotEligible`] if the current hand cannot be split
    /// or the round was not dealt through this bankroll, or
    /// [`BetError::InsufficientFunds`]. Nothing changes on error.
    pub fn split<R: RngCore>(&mut self, round: &mut Round<R>) -> Result<(), BetError> {
        let units = Self::current_units(round, Round::<R>::can_split)?;
        self.pay_round_bet(units)?;
        round.split();
        Ok(())
    }

    /// Pays for the doubled stake at the round's stake and doubles down on
    /// the current hand.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotEligible`] if the current hand cannot double
    /// down or the round was not dealt through this bankroll, or
    /// [`BetError::InsufficientFunds`]. Nothing changes on error.
    pub fn double_down<R: RngCore>(&mut self, round: &mut Round<R>) -> Result<Card, BetError> {
        let units = Self::current_units(round, Round::<R>::can_double_down)?;
        self.pay_round_bet(units)?;
        round.double_down().ok_or(BetError::NotEligible)
    }

    fn pay_round_bet(&mut self, units: usize) -> Result<usize, BetError> {
        let bet = self.round_bet().ok_or(BetError::NotEligible)?;
        let cost = Self::cost_of(bet, units)?;
        self.debit(cost)
    }

    /// Bets riding on the current hand, if `eligible` allows the action.
    fn current_units<R: RngCore>(
        round: &Round<R>,
        eligible: fn(&Round<R>) -> bool,
    ) -> Result<usize, BetError> {
        if !eligible(round) {
            return Err(BetError::NotEligible);
        }

        round
            .current_hand()
            .map(|hand| hand.bet_multiplier() as usize)
            .ok_or(BetError::NotEligible)
    }

    /// Settles a finished round.
    ///
    /// Every player hand is compared with the dealer's hand at the stake paid
    /// when the round was dealt, and favorable results are credited. A round
    /// can only be settled once.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still being played, was never dealt,
    /// was not paid for through [`Bankroll::deal`], or was already settled.
    pub fn settle<R: RngCore>(&mut self, round: &Round<R>) -> Result<RoundResult, SettleError> {
        match round.state() {
            RoundState::Ongoing => return Err(SettleError::RoundInProgress),
            RoundState::NotStarted => return Err(SettleError::NotDealt),
            RoundState::Over => {}
        }
        let bet = match self.round_stake {
            RoundStake::Paid(bet) => bet,
            RoundStake::Idle => return Err(SettleError::NoBet),
            RoundStake::Settled => return Err(SettleError::AlreadySettled),
        };

        let dealer = round.dealer_hand();
        let mut hands = Vec::with_capacity(round.player_hands().len());
        let mut total_payout: usize = 0;
        let mut total_stake: usize = 0;

        for (hand_index, hand) in round.player_hands().iter().enumerate() {
            let reason = hand.result_reason(dealer);
            let outcome = reason.outcome();
            let multiplier = hand.bet_multiplier();
            let stake = bet * multiplier as usize;
            let payout = self.payout_for(outcome, stake);
            if outcome.is_favorable() {
                self.funds += payout;
            }

            total_payout += payout;
            total_stake += stake;

            hands.push(HandResult {
                hand_index,
                outcome,
                reason,
                multiplier,
                stake,
                payout,
                player_value: hand.score_only(),
            });
        }

        self.round_stake = RoundStake::Settled;

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_stake as isize;
        debug!(total_payout, net, funds = self.funds, "round settled");

        Ok(RoundResult {
            hands,
            dealer_value: dealer.score_only(),
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
            total_payout,
            total_stake,
            net,
        })
    }
}

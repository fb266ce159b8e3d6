//! Bankroll and settlement tests.

mod common;

use bjcore::{Bankroll, BetError, HandOutcome, RoundingMode, SettleError};

use common::{cards, staged_round};

fn bankroll_with_bet(funds: usize, bet: usize) -> Bankroll {
    let mut bankroll = Bankroll::new(funds);
    bankroll.set_bet(bet).unwrap();
    bankroll
}

#[test]
fn payouts_per_outcome() {
    let mut bankroll = bankroll_with_bet(100, 10);
    bankroll.pay_bet(1).unwrap();
    assert_eq!(bankroll.funds(), 90);

    assert_eq!(bankroll.payout(HandOutcome::Win, 1), 20);
    assert_eq!(bankroll.payout(HandOutcome::Blackjack, 1), 25);
    assert_eq!(bankroll.payout(HandOutcome::Push, 1), 10);
    assert_eq!(bankroll.payout(HandOutcome::Lose, 1), 0);
    assert_eq!(bankroll.payout(HandOutcome::Win, 2), 40);

    assert_eq!(bankroll.receive_bet(HandOutcome::Win, 1), 20);
    assert_eq!(bankroll.funds(), 110);
    assert_eq!(bankroll.receive_bet(HandOutcome::Lose, 1), 0);
    assert_eq!(bankroll.funds(), 110);
    assert_eq!(bankroll.current_bet(), Some(10));
}

#[test]
fn blackjack_payout_rounding() {
    let down = bankroll_with_bet(100, 5);
    assert_eq!(down.payout(HandOutcome::Blackjack, 1), 12);

    let mut up = Bankroll::new(100).with_rounding_blackjack(RoundingMode::Up);
    up.set_bet(5).unwrap();
    assert_eq!(up.payout(HandOutcome::Blackjack, 1), 13);
}

#[test]
fn bet_errors() {
    let mut bankroll = Bankroll::new(50);
    assert_eq!(bankroll.current_bet(), None);
    assert_eq!(bankroll.pay_bet(1), Err(BetError::NoBet));
    assert!(!bankroll.can_pay_bet(1));
    assert_eq!(bankroll.set_bet(0), Err(BetError::ZeroBet));

    bankroll.set_bet(20).unwrap();
    assert!(bankroll.can_pay_bet(2));
    assert!(!bankroll.can_pay_bet(3));
    assert_eq!(bankroll.pay_bet(3), Err(BetError::InsufficientFunds));
    assert_eq!(bankroll.pay_bet(usize::MAX), Err(BetError::InsufficientFunds));
    assert_eq!(bankroll.funds(), 50);

    bankroll.set_funds(0);
    assert!(!bankroll.can_pay_bet(1));
}

#[test]
fn deal_pays_one_bet_per_hand() {
    let mut round = staged_round(3, &["9H", "5C", "7D", "2S", "8H", "6C", "9D", "5S"]);
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    assert_eq!(bankroll.funds(), 70);
    assert!(round.is_round_ongoing());

    assert_eq!(bankroll.deal(&mut round), Err(BetError::NotEligible));
    assert_eq!(bankroll.funds(), 70);
}

#[test]
fn deal_refused_without_funds() {
    let mut round = staged_round(2, &["9H", "5C", "7D", "2S"]);
    let mut bankroll = bankroll_with_bet(15, 10);

    assert_eq!(bankroll.deal(&mut round), Err(BetError::InsufficientFunds));
    assert!(!round.is_round_ongoing());
    assert!(round.player_hands().is_empty());
    assert_eq!(bankroll.funds(), 15);
}

#[test]
fn split_and_double_are_vetoed_without_funds() {
    let mut round = staged_round(1, &["8H", "5C", "8D", "9S"]);
    let mut bankroll = bankroll_with_bet(10, 10);

    bankroll.deal(&mut round).unwrap();
    assert_eq!(bankroll.funds(), 0);

    assert_eq!(bankroll.split(&mut round), Err(BetError::InsufficientFunds));
    assert_eq!(bankroll.double_down(&mut round), Err(BetError::InsufficientFunds));
    assert_eq!(round.player_hands().len(), 1);
    assert_eq!(round.player_hands()[0].cards(), cards(&["8H", "8D"]));
    assert_eq!(round.player_hands()[0].bet_multiplier(), 1);
}

#[test]
fn split_is_vetoed_when_not_a_pair() {
    let mut round = staged_round(1, &["8H", "5C", "9D", "9S"]);
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    assert_eq!(bankroll.split(&mut round), Err(BetError::NotEligible));
    assert_eq!(bankroll.funds(), 90);
}

#[test]
fn split_round_settles_each_hand() {
    let mut round = staged_round(
        1,
        &[
            "8H",  // player
            "6C",  // dealer up
            "8D",  // player
            "10S", // dealer hole
            "10H", // first split hand
            "2C",  // second split hand
            "9D",  // second split hand hit
            "KD",  // dealer draw, bust
        ],
    );
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    bankroll.split(&mut round).unwrap();
    assert_eq!(bankroll.funds(), 80);

    round.stand();
    round.hit();
    round.stand();
    assert!(!round.is_round_ongoing());

    let result = bankroll.settle(&round).unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.hands.len(), 2);
    assert!(result.hands.iter().all(|h| h.outcome == HandOutcome::Win));
    assert_eq!(result.total_stake, 20);
    assert_eq!(result.total_payout, 40);
    assert_eq!(result.net, 20);
    assert_eq!(bankroll.funds(), 120);
}

#[test]
fn double_down_pays_on_doubled_stake() {
    let mut round = staged_round(1, &["5H", "2S", "6H", "10D", "10H", "6C"]);
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    let card = bankroll.double_down(&mut round).unwrap();
    assert_eq!(card.rank(), 10);
    assert_eq!(bankroll.funds(), 80);
    assert!(!round.is_round_ongoing());

    let result = bankroll.settle(&round).unwrap();
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.hands[0].multiplier, 2);
    assert_eq!(result.hands[0].stake, 20);
    assert_eq!(result.hands[0].payout, 40);
    assert_eq!(bankroll.funds(), 120);
}

#[test]
fn blackjack_and_loss_settle_to_net() {
    let mut round = staged_round(2, &["AH", "10C", "9S", "KH", "7C", "7D", "5H"]);
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    round.stand();

    let result = bankroll.settle(&round).unwrap();
    let outcomes: Vec<_> = result.hands.iter().map(|h| h.outcome).collect();
    assert_eq!(outcomes, [HandOutcome::Blackjack, HandOutcome::Lose]);
    assert_eq!(result.total_payout, 25);
    assert_eq!(result.net, 5);
    assert!(!result.dealer_blackjack);
    assert_eq!(bankroll.funds(), 105);
}

#[test]
fn settle_errors() {
    let mut round = staged_round(1, &["9H", "5C", "7D", "2S"]);
    let mut bankroll = Bankroll::new(100);

    assert_eq!(bankroll.settle(&round), Err(SettleError::NotDealt));

    round.deal();
    assert_eq!(bankroll.settle(&round), Err(SettleError::RoundInProgress));

    round.stand();
    assert_eq!(bankroll.settle(&round), Err(SettleError::NoBet));

    bankroll.set_bet(10).unwrap();
    assert_eq!(bankroll.settle(&round), Err(SettleError::NoBet));
}

#[test]
fn bet_change_mid_round_applies_to_next_deal() {
    let mut round = staged_round(1, &["10H", "6C", "9H", "10S", "KD"]);
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    assert_eq!(bankroll.round_bet(), Some(10));
    bankroll.set_bet(1000).unwrap();
    assert_eq!(bankroll.round_bet(), Some(10));

    round.stand();
    let result = bankroll.settle(&round).unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].stake, 10);
    assert_eq!(result.total_payout, 20);
    assert_eq!(result.net, 10);
    assert_eq!(bankroll.funds(), 110);
    assert_eq!(bankroll.current_bet(), Some(1000));
    assert_eq!(bankroll.round_bet(), None);
}

#[test]
fn split_pays_at_the_dealt_stake() {
    let mut round = staged_round(1, &["8H", "5C", "8D", "9S", "2H", "3C"]);
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    bankroll.set_bet(50).unwrap();
    bankroll.split(&mut round).unwrap();
    assert_eq!(bankroll.funds(), 80);
}

#[test]
fn round_settles_only_once() {
    let mut round = staged_round(1, &["10H", "6C", "9H", "10S", "KD"]);
    let mut bankroll = bankroll_with_bet(100, 10);

    bankroll.deal(&mut round).unwrap();
    round.stand();
    assert_eq!(bankroll.settle(&round).map(|r| r.total_payout), Ok(20));
    assert_eq!(bankroll.settle(&round), Err(SettleError::AlreadySettled));
    assert_eq!(bankroll.funds(), 110);
}

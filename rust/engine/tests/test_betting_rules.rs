use headsup_engine::errors::GameError;
use headsup_engine::game::{Game, STARTING_STACK};
use headsup_engine::player::{Action, PlayerId};

fn game_with_dealer(dealer: PlayerId, seed: u64) -> Game {
    Game::next_hand(
        STARTING_STACK,
        STARTING_STACK,
        dealer.opponent(),
        Some(seed),
    )
    .expect("hand starts")
}

#[test]
fn undersized_raise_increment_is_rejected() {
    // Dealer opens to 40; with the big blind at 20 a re-raise to 50 is a
    // 10-chip increment and must be rejected.
    let mut game = game_with_dealer(PlayerId::User, 31);
    game.apply_action(PlayerId::User, Action::Raise(40))
        .expect("open to 40");
    let err = game
        .apply_action(PlayerId::Bot, Action::Raise(50))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::RaiseBelowMinimum {
            increment: 10,
            minimum: 20
        }
    );
    assert!(err.is_recoverable());
}

#[test]
fn all_in_below_the_increment_is_legal() {
    // Same spot, but the raiser's whole remaining stack is the 50 total:
    // an all-in is legal at any size.
    let mut game = Game::next_hand(STARTING_STACK, 50, PlayerId::Bot, Some(32)).expect("hand");
    assert_eq!(game.dealer(), PlayerId::User);
    game.apply_action(PlayerId::User, Action::Raise(40))
        .expect("open to 40");
    // Bot committed 20 as the big blind; its remaining 30 takes it to 50.
    let snap = game
        .apply_action(PlayerId::Bot, Action::Raise(50))
        .expect("all-in for less than a full raise");
    assert!(snap.players[1].all_in);
    assert_eq!(snap.bet_to_match, 50);
    assert_eq!(snap.to_act, Some(PlayerId::User), "a raise reopens betting");
}

#[test]
fn raise_not_exceeding_the_bet_is_rejected() {
    let mut game = game_with_dealer(PlayerId::User, 33);
    let err = game
        .apply_action(PlayerId::User, Action::Raise(20))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::RaiseTooSmall {
            amount: 20,
            bet_to_match: 20
        }
    );
}

#[test]
fn overdrawn_raise_is_rejected() {
    let mut game = game_with_dealer(PlayerId::User, 34);
    let err = game
        .apply_action(PlayerId::User, Action::Raise(STARTING_STACK + 1))
        .unwrap_err();
    assert!(matches!(err, GameError::InsufficientChips { .. }));
}

#[test]
fn minimum_raise_is_one_big_blind_over_the_bet() {
    let mut game = game_with_dealer(PlayerId::User, 35);
    // 40 is the smallest legal open over the 20 big blind.
    let snap = game
        .apply_action(PlayerId::User, Action::Raise(40))
        .expect("minimum open");
    assert_eq!(snap.bet_to_match, 40);
}

#[test]
fn short_call_is_an_implicit_all_in() {
    let mut game = Game::next_hand(STARTING_STACK, 60, PlayerId::Bot, Some(36)).expect("hand");
    game.apply_action(PlayerId::User, Action::Raise(200))
        .expect("cover the short stack");
    let snap = game
        .apply_action(PlayerId::Bot, Action::CheckOrCall)
        .expect("call for less");
    assert!(snap.players[1].all_in);
    assert!(snap.outcome.is_some(), "no betting remains; board runs out");
}

#[test]
fn rejected_action_leaves_the_pot_untouched() {
    let mut game = game_with_dealer(PlayerId::User, 37);
    let before = game.snapshot();
    let _ = game.apply_action(PlayerId::User, Action::Raise(25)).unwrap_err();
    let after = game.snapshot();
    assert_eq!(before.pot, after.pot);
    assert_eq!(before.bet_to_match, after.bet_to_match);
    assert_eq!(before.to_act, after.to_act);
}

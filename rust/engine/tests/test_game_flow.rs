use headsup_engine::betting::Street;
use headsup_engine::errors::GameError;
use headsup_engine::game::{Game, WinReason, BIG_BLIND, SMALL_BLIND, STARTING_STACK};
use headsup_engine::player::{Action, PlayerId};

/// Builds a hand with a known dealer by asking for the "next" hand after a
/// fictitious one where the opponent held the button.
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
fn blinds_are_posted_and_dealer_acts_first_preflop() {
    let game = game_with_dealer(PlayerId::User, 11);
    let snap = game.snapshot();
    assert_eq!(snap.dealer, PlayerId::User);
    assert_eq!(snap.street, Street::Preflop);
    assert_eq!(snap.pot, SMALL_BLIND + BIG_BLIND);
    assert_eq!(snap.bet_to_match, BIG_BLIND);
    assert_eq!(snap.to_act, Some(PlayerId::User));
    assert_eq!(snap.players[0].stack, STARTING_STACK - SMALL_BLIND);
    assert_eq!(snap.players[1].stack, STARTING_STACK - BIG_BLIND);
}

#[test]
fn non_dealer_acts_first_after_the_flop() {
    let mut game = game_with_dealer(PlayerId::User, 12);
    game.apply_action(PlayerId::User, Action::CheckOrCall)
        .expect("dealer limps");
    let snap = game
        .apply_action(PlayerId::Bot, Action::CheckOrCall)
        .expect("big blind checks");
    assert_eq!(snap.street, Street::Flop);
    assert_eq!(snap.board.len(), 3);
    assert_eq!(snap.to_act, Some(PlayerId::Bot));
    assert_eq!(snap.bet_to_match, 0, "bet to match resets per street");
}

#[test]
fn big_blind_keeps_the_option_after_a_limp() {
    let mut game = game_with_dealer(PlayerId::User, 13);
    let snap = game
        .apply_action(PlayerId::User, Action::CheckOrCall)
        .expect("dealer limps");
    // Commitments are level but the big blind has not spoken.
    assert_eq!(snap.street, Street::Preflop);
    assert_eq!(snap.to_act, Some(PlayerId::Bot));
}

#[test]
fn streets_progress_to_showdown_when_checked_through() {
    let mut game = game_with_dealer(PlayerId::User, 14);
    game.apply_action(PlayerId::User, Action::CheckOrCall).unwrap();
    game.apply_action(PlayerId::Bot, Action::CheckOrCall).unwrap();
    for expected_board in [4usize, 5] {
        game.apply_action(PlayerId::Bot, Action::CheckOrCall).unwrap();
        let snap = game.apply_action(PlayerId::User, Action::CheckOrCall).unwrap();
        assert_eq!(snap.board.len(), expected_board);
    }
    // River checks through to showdown.
    game.apply_action(PlayerId::Bot, Action::CheckOrCall).unwrap();
    let snap = game.apply_action(PlayerId::User, Action::CheckOrCall).unwrap();
    assert_eq!(snap.street, Street::Showdown);
    let outcome = snap.outcome.expect("hand resolved");
    assert_eq!(outcome.reason, WinReason::Showdown);
    assert_eq!(
        outcome.payouts.iter().sum::<u32>(),
        2 * BIG_BLIND,
        "the checked-through pot is exactly the blinds"
    );
}

#[test]
fn fold_short_circuits_without_revealing_cards() {
    let mut game = game_with_dealer(PlayerId::User, 15);
    game.apply_action(PlayerId::User, Action::CheckOrCall).unwrap();
    game.apply_action(PlayerId::Bot, Action::CheckOrCall).unwrap();
    // On the flop the bot checks, the user bets, the bot folds.
    game.apply_action(PlayerId::Bot, Action::CheckOrCall).unwrap();
    game.apply_action(PlayerId::User, Action::Raise(40)).unwrap();
    let snap = game.apply_action(PlayerId::Bot, Action::Fold).unwrap();

    let outcome = snap.outcome.expect("fold ends the hand");
    assert_eq!(outcome.winner, Some(PlayerId::User));
    assert_eq!(outcome.reason, WinReason::Fold);
    assert_eq!(outcome.payouts, [80, 0]);
    assert_eq!(snap.board.len(), 3, "no further board cards are dealt");
    assert!(
        snap.players[1].hole_cards.is_none(),
        "a fold never reveals hidden cards"
    );
    assert_eq!(snap.players[0].stack, STARTING_STACK + 20);
    assert_eq!(snap.players[1].stack, STARTING_STACK - 20);
}

#[test]
fn wrong_turn_is_rejected_and_state_unchanged() {
    let mut game = game_with_dealer(PlayerId::User, 16);
    let before = game.snapshot();
    let err = game
        .apply_action(PlayerId::Bot, Action::CheckOrCall)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::NotPlayersTurn {
            expected: PlayerId::User,
            actual: PlayerId::Bot
        }
    );
    let after = game.snapshot();
    assert_eq!(before.pot, after.pot);
    assert_eq!(before.to_act, after.to_act);
    assert_eq!(before.players[0].stack, after.players[0].stack);
    assert_eq!(before.players[1].stack, after.players[1].stack);
}

#[test]
fn terminal_hand_rejects_further_actions() {
    let mut game = game_with_dealer(PlayerId::User, 17);
    game.apply_action(PlayerId::User, Action::Fold).unwrap();
    let err = game
        .apply_action(PlayerId::Bot, Action::CheckOrCall)
        .unwrap_err();
    assert_eq!(err, GameError::HandAlreadyComplete);
}

#[test]
fn both_all_in_runs_the_board_out() {
    let mut game = game_with_dealer(PlayerId::User, 18);
    game.apply_action(PlayerId::User, Action::Raise(STARTING_STACK))
        .expect("open shove");
    let snap = game
        .apply_action(PlayerId::Bot, Action::CheckOrCall)
        .expect("call all-in");
    assert_eq!(snap.street, Street::Showdown);
    assert_eq!(snap.board.len(), 5, "board runs out with no more betting");
    let outcome = snap.outcome.expect("showdown resolved");
    assert_eq!(outcome.payouts.iter().sum::<u32>(), 2 * STARTING_STACK);
    assert_eq!(
        snap.players[0].stack + snap.players[1].stack,
        2 * STARTING_STACK
    );
    assert!(
        snap.players[1].hole_cards.is_some(),
        "showdown reveals the bot's hand"
    );
}

#[test]
fn next_hand_flips_the_dealer_and_carries_stacks() {
    let mut game = game_with_dealer(PlayerId::User, 19);
    let snap = game.apply_action(PlayerId::User, Action::Fold).unwrap();
    let user = snap.players[0].stack;
    let bot = snap.players[1].stack;

    let next = Game::next_hand(user, bot, snap.dealer, Some(20)).expect("next hand");
    let snap = next.snapshot();
    assert_eq!(snap.dealer, PlayerId::Bot);
    assert_eq!(
        snap.players[0].stack + snap.players[1].stack + snap.pot,
        user + bot
    );
}

#[test]
fn short_big_blind_posts_all_in() {
    // The big blind holds 12 chips against the 20-chip blind: it posts
    // short and is all-in from the first chip.
    let mut game = Game::next_hand(3_000, 12, PlayerId::Bot, Some(23)).expect("hand starts");
    assert_eq!(game.dealer(), PlayerId::User);
    let snap = game.snapshot();
    assert!(snap.players[1].all_in);
    assert_eq!(snap.pot, SMALL_BLIND + 12);
    assert_eq!(snap.to_act, Some(PlayerId::User));

    // Matching the short blind ends the betting and runs the board out.
    let snap = game
        .apply_action(PlayerId::User, Action::CheckOrCall)
        .expect("match the short blind");
    assert!(snap.outcome.is_some());
    assert_eq!(snap.players[0].stack + snap.players[1].stack, 3_012);
}

#[test]
fn busted_stack_cannot_start_a_hand() {
    let err = Game::next_hand(0, 2 * STARTING_STACK, PlayerId::User, Some(21)).unwrap_err();
    assert_eq!(
        err,
        GameError::EmptyStack {
            player: PlayerId::User
        }
    );
}

#[test]
fn create_deals_hole_cards_to_both_seats() {
    let game = Game::create(Some(22)).expect("game starts");
    let snap = game.snapshot();
    assert!(snap.players[0].hole_cards.is_some(), "user sees own cards");
    assert!(
        snap.players[1].hole_cards.is_none(),
        "bot cards stay hidden pre-showdown"
    );
    assert_eq!(snap.pot, SMALL_BLIND + BIG_BLIND);
}

#[test]
fn same_seed_same_script_same_result() {
    let script = [
        (PlayerId::User, Action::CheckOrCall),
        (PlayerId::Bot, Action::Raise(60)),
        (PlayerId::User, Action::CheckOrCall),
        (PlayerId::Bot, Action::CheckOrCall),
        (PlayerId::User, Action::Raise(80)),
        (PlayerId::Bot, Action::CheckOrCall),
    ];
    let mut a = game_with_dealer(PlayerId::User, 99);
    let mut b = game_with_dealer(PlayerId::User, 99);
    for (player, action) in script {
        let sa = a.apply_action(player, action).expect("script legal in a");
        let sb = b.apply_action(player, action).expect("script legal in b");
        assert_eq!(sa.board, sb.board);
        assert_eq!(sa.pot, sb.pot);
        assert_eq!(sa.street, sb.street);
        assert_eq!(sa.to_act, sb.to_act);
    }
}

//! Interactive play against the automated opponent.
//!
//! The human holds the user seat; the bot seat is driven through the
//! engine's `advance_auto` with the configured provider behind the timeout
//! fallback. Input and output streams are injected so tests can script a
//! whole session through a `Cursor`.

use std::io::{BufRead, Write};
use std::sync::Arc;

use headsup_ai::create_provider;
use headsup_ai::policy::FallbackProvider;
use headsup_engine::game::{Game, GameSnapshot, WinReason, BIG_BLIND, SMALL_BLIND};
use headsup_engine::player::{Action, PlayerId};
use headsup_engine::provider::DecisionProvider;

use crate::config;
use crate::error::CliError;
use crate::ui;
use crate::validation::{parse_player_action, ParseResult};

pub fn handle_play_command(
    hands: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = hands.unwrap_or(1);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let provider = FallbackProvider::new(Arc::from(create_provider(&cfg.provider)));

    writeln!(
        out,
        "play: hands={} seed={} opponent={}",
        hands,
        base_seed,
        provider.name()
    )?;
    writeln!(out, "Blinds: SB={} BB={}", SMALL_BLIND, BIG_BLIND)?;

    let first_dealer = if rand::random::<bool>() {
        PlayerId::User
    } else {
        PlayerId::Bot
    };
    let mut game = Game::next_hand(
        cfg.starting_stack,
        cfg.starting_stack,
        first_dealer.opponent(),
        Some(base_seed),
    )?;

    let mut played = 0u32;
    'session: for i in 1..=hands {
        writeln!(out, "Hand {} (dealer: {})", i, game.dealer())?;
        game.advance_auto(&provider)?;

        while game.outcome().is_none() {
            if game.to_act() == Some(PlayerId::User) {
                let snap = game.snapshot();
                render_table(out, &snap)?;
                write!(out, "Enter action (check/call/raise N/allin/fold/q): ")?;
                out.flush()?;

                let Some(line) = read_line(stdin) else {
                    break 'session;
                };
                let action = match parse_player_action(&line) {
                    ParseResult::Action(action) => action,
                    ParseResult::AllIn => all_in_action(&snap),
                    ParseResult::Quit => break 'session,
                    ParseResult::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                        continue;
                    }
                };
                if let Err(e) = game.apply_action(PlayerId::User, action) {
                    ui::write_error(err, &format!("Invalid action: {}", e))?;
                    continue;
                }
            }
            game.advance_auto(&provider)?;
        }

        report_outcome(out, &game.snapshot())?;
        played += 1;

        let snap = game.snapshot();
        let (user, bot) = (snap.players[0].stack, snap.players[1].stack);
        if user == 0 || bot == 0 {
            let busted = if user == 0 { PlayerId::User } else { PlayerId::Bot };
            writeln!(out, "Game over: {} is out of chips.", busted)?;
            break;
        }
        if i < hands {
            game = Game::next_hand(
                user,
                bot,
                snap.dealer,
                Some(base_seed.wrapping_add(u64::from(i))),
            )?;
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    Ok(())
}

/// "allin" as a total: a raise to the whole stack, or a plain call when the
/// stack no longer exceeds the bet to match.
fn all_in_action(snap: &GameSnapshot) -> Action {
    let me = &snap.players[PlayerId::User.index()];
    let target = me.street_committed + me.stack;
    if target > snap.bet_to_match {
        Action::Raise(target)
    } else {
        Action::CheckOrCall
    }
}

fn render_table(out: &mut dyn Write, snap: &GameSnapshot) -> std::io::Result<()> {
    let me = &snap.players[PlayerId::User.index()];
    let bot = &snap.players[PlayerId::Bot.index()];
    writeln!(out, "Street: {:?}  Pot: {}", snap.street, snap.pot)?;
    writeln!(out, "Board: {}", ui::fmt_cards(&snap.board))?;
    if let Some(hole) = me.hole_cards {
        writeln!(out, "Your cards: {}", ui::fmt_cards(&hole))?;
    }
    writeln!(out, "Stacks: you {} / bot {}", me.stack, bot.stack)?;
    let to_call = snap.bet_to_match.saturating_sub(me.street_committed);
    if to_call > 0 {
        writeln!(out, "To call: {}", to_call)?;
    }
    Ok(())
}

fn report_outcome(out: &mut dyn Write, snap: &GameSnapshot) -> std::io::Result<()> {
    let Some(outcome) = snap.outcome else {
        return Ok(());
    };
    if outcome.reason == WinReason::Showdown {
        writeln!(out, "Board: {}", ui::fmt_cards(&snap.board))?;
        if let Some(hole) = snap.players[PlayerId::Bot.index()].hole_cards {
            writeln!(out, "Bot shows: {}", ui::fmt_cards(&hole))?;
        }
    }
    match outcome.winner {
        Some(id) => writeln!(
            out,
            "Winner: {} (+{} chips)",
            id,
            outcome.payouts[id.index()]
        )?,
        None => writeln!(out, "Split pot.")?,
    }
    writeln!(
        out,
        "Stacks: you {} / bot {}",
        snap.players[0].stack, snap.players[1].stack
    )?;
    Ok(())
}

fn read_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

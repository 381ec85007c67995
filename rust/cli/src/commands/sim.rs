//! Bot-vs-bot simulation with optional JSONL hand histories.
//!
//! Both seats are driven by the configured provider, so a seeded run is
//! fully reproducible: hand N plays from `base_seed + N` and the written
//! histories carry every seed for replay.

use std::io::Write;

use headsup_ai::create_provider;
use headsup_engine::game::Game;
use headsup_engine::logger::HandLogger;
use headsup_engine::player::{Action, PlayerId};
use headsup_engine::provider::DecisionProvider;

use crate::config;
use crate::error::CliError;
use crate::ui;

pub fn handle_sim_command(
    hands: u64,
    output: Option<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let provider = create_provider(&cfg.provider);
    let mut logger = match &output {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    writeln!(out, "sim: hands={} seed={}", hands, base_seed)?;

    let mut wins = [0u64; 2];
    let mut splits = 0u64;
    let mut user = cfg.starting_stack;
    let mut bot = cfg.starting_stack;
    let mut last_dealer = PlayerId::Bot;

    for i in 0..hands {
        let mut game = Game::next_hand(user, bot, last_dealer, Some(base_seed.wrapping_add(i)))?;

        while game.outcome().is_none() {
            match game.to_act() {
                Some(PlayerId::Bot) => {
                    game.advance_auto(provider.as_ref())?;
                }
                Some(PlayerId::User) => {
                    let view = game.table_view(PlayerId::User);
                    let action = provider.decide(&view).unwrap_or(Action::CheckOrCall);
                    if game.apply_action(PlayerId::User, action).is_err() {
                        game.apply_action(PlayerId::User, Action::CheckOrCall)?;
                    }
                }
                None => break,
            }
        }

        match game.outcome().map(|o| o.winner) {
            Some(Some(id)) => wins[id.index()] += 1,
            Some(None) => splits += 1,
            None => {}
        }
        if let Some(logger) = &mut logger {
            let id = logger.next_id();
            logger.write(&game.hand_record(id))?;
        }

        let snap = game.snapshot();
        user = snap.players[0].stack;
        bot = snap.players[1].stack;
        last_dealer = snap.dealer;
        if user == 0 || bot == 0 {
            // One seat busted; restart the match with fresh stacks so the
            // requested number of hands still gets simulated.
            user = cfg.starting_stack;
            bot = cfg.starting_stack;
        }
    }

    writeln!(
        out,
        "Simulated {} hands: user {} / bot {} / splits {}",
        hands, wins[0], wins[1], splits
    )?;
    if let Some(path) = output {
        writeln!(out, "Hand histories written to {}", path)?;
    }
    Ok(())
}

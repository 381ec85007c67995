//! Deals one seeded hand face up for inspection: both holes and the full
//! board, in the exact order the engine would deal them.

use std::io::Write;

use headsup_engine::cards::Card;
use headsup_engine::deck::Deck;

use crate::error::CliError;
use crate::ui;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);

    let next = |deck: &mut Deck| -> Result<Card, CliError> {
        deck.deal()
            .ok_or_else(|| CliError::Engine("deck exhausted".to_string()))
    };

    // Two cards each, alternating, then burn-flop, burn-turn, burn-river.
    let mut p1 = Vec::with_capacity(2);
    let mut p2 = Vec::with_capacity(2);
    for _ in 0..2 {
        p1.push(next(&mut deck)?);
        p2.push(next(&mut deck)?);
    }
    let mut board = Vec::with_capacity(5);
    deck.burn();
    for _ in 0..3 {
        board.push(next(&mut deck)?);
    }
    for _ in 0..2 {
        deck.burn();
        board.push(next(&mut deck)?);
    }

    writeln!(out, "seed: {}", seed)?;
    writeln!(out, "Hole P1: {}", ui::fmt_cards(&p1))?;
    writeln!(out, "Hole P2: {}", ui::fmt_cards(&p2))?;
    writeln!(out, "Board: {}", ui::fmt_cards(&board))?;
    Ok(())
}

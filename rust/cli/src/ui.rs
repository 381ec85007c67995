//! Terminal output helpers shared by the command handlers.

use std::io::Write;

use headsup_engine::cards::Card;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Compact card-list notation: `As Kd 7h`, or `--` for an empty board.
pub fn fmt_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "--".to_string();
    }
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

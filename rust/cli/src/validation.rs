//! Parsing of interactive player input into engine actions.

use headsup_engine::player::Action;

/// Outcome of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A complete action ready for the engine.
    Action(Action),
    /// "allin": resolved to a raise once the caller knows the stack.
    AllIn,
    /// User asked to leave (q or quit).
    Quit,
    /// Unusable input, with a message for the prompt.
    Invalid(String),
}

/// Parses input such as `fold`, `check`, `call`, `raise 120`, `allin` or
/// `q` (case-insensitive). Check and call are the same action to the
/// engine; a raise amount is the total bet to move to.
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "call" | "c" => ParseResult::Action(Action::CheckOrCall),
        "allin" | "all-in" => ParseResult::AllIn,
        "raise" | "r" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Raise requires a total amount (e.g., 'raise 120')".to_string(),
                );
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(Action::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <total>, allin, q",
            other
        )),
    }
}

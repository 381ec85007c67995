//! Deterministic rule-based decision provider.
//!
//! The baseline plays a simple, fully reproducible strategy: a preflop
//! strength table over the hole cards, the made-hand category after the
//! flop, and pot odds when facing a bet. It never bluffs and never
//! randomizes, which keeps simulations and fallback behavior repeatable.

use headsup_engine::cards::Card;
use headsup_engine::hand::{best_of, Category};
use headsup_engine::player::Action;
use headsup_engine::provider::{DecisionProvider, ProviderError, TableView};

/// Rule-based provider used as the automated opponent when no learned
/// policy is available, and as the transparent fallback when one fails.
#[derive(Debug, Clone, Default)]
pub struct BaselineProvider;

impl BaselineProvider {
    pub fn new() -> Self {
        Self
    }

    /// Preflop hand strength on a 0-10 scale: 9-10 premium pairs and big
    /// suited aces, 7-8 strong broadways, 5-6 medium pairs and suited
    /// connectors, below that trash.
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank.value();
        let r2 = hole[1].rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;

        if r1 == r2 {
            return match high {
                14 | 13 => 10,
                12 | 11 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        let base = match (high, low) {
            (14, 13) => 9,
            (14, 12) => 7,
            (14, 11) => 6,
            (14, 10) => 5,
            (14, _) => 4,
            (13, 12) => 6,
            (13, 11) | (12, 11) => 5,
            (13, 10) | (12, 10) => 4,
            _ => {
                if high - low <= 2 && high >= 9 {
                    4
                } else if high >= 11 && low >= 9 {
                    3
                } else {
                    2
                }
            }
        };
        if suited {
            (base + 1).min(10)
        } else {
            base
        }
    }

    /// Postflop strength from the made-hand category, nudged up for a top
    /// deciding rank. `None` before the flop.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(&hole);
        cards.extend_from_slice(board);
        let rank = best_of(&cards)?;

        let base = match rank.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        let boost = u8::from(rank.ranks[0] >= 12);
        Some((base + boost).min(10))
    }

    /// Pot odds offered on a call: pot / (pot + call).
    fn pot_odds(pot: u32, call: u32) -> f32 {
        if call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + call) as f32
    }

    fn decide_facing_bet(strength: u8, view: &TableView) -> Action {
        let odds = Self::pot_odds(view.pot, view.to_call);
        match strength {
            9..=10 => {
                // Value raise of half the pot where the stack allows it.
                let target = view.bet_to_match + (view.pot / 2).max(view.big_blind);
                let target = target.min(view.max_raise_to());
                if target > view.bet_to_match {
                    Action::Raise(target)
                } else {
                    Action::CheckOrCall
                }
            }
            7..=8 => Action::CheckOrCall,
            5..=6 => {
                if odds >= 0.3 || view.to_call <= view.pot / 4 {
                    Action::CheckOrCall
                } else {
                    Action::Fold
                }
            }
            3..=4 => {
                if odds >= 0.4 || view.to_call <= view.pot / 6 {
                    Action::CheckOrCall
                } else {
                    Action::Fold
                }
            }
            _ => Action::Fold,
        }
    }

    fn decide_unopened(strength: u8, view: &TableView) -> Action {
        let bet = match strength {
            9..=10 => (view.pot * 2 / 3).max(view.big_blind),
            7..=8 => (view.pot / 2).max(view.big_blind),
            _ => return Action::CheckOrCall,
        };
        let target = (view.bet_to_match + bet).min(view.max_raise_to());
        if target > view.bet_to_match {
            Action::Raise(target)
        } else {
            Action::CheckOrCall
        }
    }
}

impl DecisionProvider for BaselineProvider {
    fn decide(&self, view: &TableView) -> Result<Action, ProviderError> {
        // Without hole cards there is nothing to reason about; take the
        // free option or get out.
        let Some(hole) = view.hole else {
            return Ok(if view.to_call == 0 {
                Action::CheckOrCall
            } else {
                Action::Fold
            });
        };

        let strength = Self::postflop_strength(hole, &view.board)
            .unwrap_or_else(|| Self::preflop_strength(hole));

        if view.to_call == 0 {
            Ok(Self::decide_unopened(strength, view))
        } else {
            Ok(Self::decide_facing_bet(strength, view))
        }
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

use std::cmp::Ordering;

use crate::hand::HandRank;
use crate::player::PlayerId;

/// One pot tier: an amount and the non-folded players eligible to win it.
/// The main pot is the lowest tier; unequal all-in commitments create side
/// tiers above it that only the deeper contributor can win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotTier {
    pub amount: u32,
    pub eligible: Vec<PlayerId>,
}

/// Tracks each player's total contribution across the whole hand and turns
/// the contributions into pot tiers at settlement. Street-level bookkeeping
/// lives in [`crate::betting::BettingRound`]; this ledger only ever grows.
#[derive(Debug, Clone, Default)]
pub struct PotManager {
    contributions: [u32; 2],
}

impl PotManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: PlayerId, amount: u32) {
        self.contributions[id.index()] += amount;
    }

    pub fn contribution(&self, id: PlayerId) -> u32 {
        self.contributions[id.index()]
    }

    pub fn total(&self) -> u32 {
        self.contributions.iter().sum()
    }

    /// Splits the contributions into tiers. Distinct contribution levels are
    /// walked ascending; each tier holds `(level - previous) x contributors
    /// at or above the level`, and is winnable by the non-folded players
    /// among them. Folded chips stay in their tiers but earn nothing.
    /// The tier amounts always sum to the total contributions.
    pub fn tiers(&self, folded: [bool; 2]) -> Vec<PotTier> {
        let mut levels: Vec<u32> = self
            .contributions
            .iter()
            .copied()
            .filter(|&c| c > 0)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut tiers = Vec::new();
        let mut prev = 0u32;
        for level in levels {
            let contributors = self
                .contributions
                .iter()
                .filter(|&&c| c >= level)
                .count() as u32;
            let eligible: Vec<PlayerId> = PlayerId::BOTH
                .into_iter()
                .filter(|id| !folded[id.index()] && self.contribution(*id) >= level)
                .collect();
            tiers.push(PotTier {
                amount: (level - prev) * contributors,
                eligible,
            });
            prev = level;
        }
        tiers
    }

    /// Settles a showdown: each tier goes to its best-ranked eligible hand,
    /// a tied tier splits evenly with the odd chip to the non-dealer (the
    /// player left of the button). Returns per-seat payouts whose sum always
    /// equals the total contributions.
    pub fn settle(
        &self,
        ranks: [HandRank; 2],
        folded: [bool; 2],
        dealer: PlayerId,
    ) -> [u32; 2] {
        let mut payouts = [0u32; 2];
        for tier in self.tiers(folded) {
            match tier.eligible.as_slice() {
                [only] => payouts[only.index()] += tier.amount,
                [a, b] => match ranks[a.index()].cmp(&ranks[b.index()]) {
                    Ordering::Greater => payouts[a.index()] += tier.amount,
                    Ordering::Less => payouts[b.index()] += tier.amount,
                    Ordering::Equal => {
                        let half = tier.amount / 2;
                        let odd = tier.amount - half * 2;
                        payouts[a.index()] += half;
                        payouts[b.index()] += half;
                        payouts[dealer.opponent().index()] += odd;
                    }
                },
                // Both players folding is impossible heads-up: the first
                // fold ends the hand before settlement.
                _ => {}
            }
        }
        payouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{Category, HandRank};

    fn rank(category: Category, first: u8) -> HandRank {
        HandRank {
            category,
            ranks: [first, 0, 0, 0, 0],
        }
    }

    #[test]
    fn equal_contributions_make_one_tier() {
        let mut pots = PotManager::new();
        pots.add(PlayerId::User, 300);
        pots.add(PlayerId::Bot, 300);
        let tiers = pots.tiers([false, false]);
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].amount, 600);
        assert_eq!(tiers[0].eligible.len(), 2);
    }

    #[test]
    fn short_all_in_creates_side_tier() {
        let mut pots = PotManager::new();
        pots.add(PlayerId::User, 100);
        pots.add(PlayerId::Bot, 300);
        let tiers = pots.tiers([false, false]);
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].amount, 200);
        assert_eq!(tiers[0].eligible.len(), 2);
        assert_eq!(tiers[1].amount, 200);
        assert_eq!(tiers[1].eligible, vec![PlayerId::Bot]);
    }

    #[test]
    fn tier_amounts_sum_to_contributions() {
        let cases = [(0u32, 0u32), (20, 20), (100, 300), (9_990, 20), (1, 10_000)];
        for (user, bot) in cases {
            let mut pots = PotManager::new();
            pots.add(PlayerId::User, user);
            pots.add(PlayerId::Bot, bot);
            let sum: u32 = pots.tiers([false, false]).iter().map(|t| t.amount).sum();
            assert_eq!(sum, user + bot);
        }
    }

    #[test]
    fn short_winner_only_collects_the_matched_tier() {
        let mut pots = PotManager::new();
        pots.add(PlayerId::User, 100);
        pots.add(PlayerId::Bot, 300);
        let payouts = pots.settle(
            [
                rank(Category::Flush, 14),
                rank(Category::OnePair, 9),
            ],
            [false, false],
            PlayerId::User,
        );
        // User wins the contested 200; bot reclaims its uncalled 200.
        assert_eq!(payouts, [200, 200]);
        assert_eq!(payouts.iter().sum::<u32>(), pots.total());
    }

    #[test]
    fn tie_splits_with_odd_chip_to_non_dealer() {
        let mut pots = PotManager::new();
        pots.add(PlayerId::User, 101);
        pots.add(PlayerId::Bot, 100);
        let even = rank(Category::Straight, 9);
        let payouts = pots.settle([even, even], [false, false], PlayerId::User);
        // 200 contested splits 100/100; the 1-chip top tier returns to the
        // user uncontested. Total conserved.
        assert_eq!(payouts.iter().sum::<u32>(), 201);
        assert_eq!(payouts, [101, 100]);

        let mut pots = PotManager::new();
        pots.add(PlayerId::User, 100);
        pots.add(PlayerId::Bot, 101);
        let payouts = pots.settle([even, even], [false, false], PlayerId::Bot);
        assert_eq!(payouts, [100, 101]);
    }

    #[test]
    fn tied_side_pot_refunds_the_deep_stack() {
        let mut pots = PotManager::new();
        pots.add(PlayerId::User, 25);
        pots.add(PlayerId::Bot, 26);
        let even = rank(Category::TwoPair, 8);
        let payouts = pots.settle([even, even], [false, false], PlayerId::User);
        // Shared tier of 50 splits evenly; the bot's uncalled chip returns.
        assert_eq!(payouts, [25, 26]);
    }

    #[test]
    fn folded_chips_stay_in_the_pot() {
        let mut pots = PotManager::new();
        pots.add(PlayerId::User, 60);
        pots.add(PlayerId::Bot, 100);
        let tiers = pots.tiers([true, false]);
        // User folded: eligible nowhere, chips still counted.
        assert!(tiers.iter().all(|t| t.eligible == vec![PlayerId::Bot]));
        assert_eq!(tiers.iter().map(|t| t.amount).sum::<u32>(), 160);
    }
}

//! Prize tiers and the ordered rule set that assigns one to a ticket.
//!
//! Rules are checked in [`PrizeTier::PRIORITY`] order and the first hit wins,
//! so a ticket matching both the last three and the first three digits is
//! paid once, as a last-three win.

use lotto_core::{Draw, TicketNumber, TicketStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const JACKPOT_PRIZE: u64 = 6_000_000;
pub const LAST_THREE_PRIZE: u64 = 4_000;
pub const LAST_TWO_PRIZE: u64 = 2_000;
pub const FIRST_THREE_PRIZE: u64 = 4_000;
pub const RUNNING_NUMBER_PRIZE: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeTier {
    Jackpot,
    LastThree,
    LastTwo,
    FirstThree,
    /// One above or one below the winning number.
    RunningNumber,
}

impl PrizeTier {
    pub const PRIORITY: [PrizeTier; 5] = [
        PrizeTier::Jackpot,
        PrizeTier::LastThree,
        PrizeTier::LastTwo,
        PrizeTier::FirstThree,
        PrizeTier::RunningNumber,
    ];

    pub const fn prize(self) -> u64 {
        match self {
            PrizeTier::Jackpot => JACKPOT_PRIZE,
            PrizeTier::LastThree => LAST_THREE_PRIZE,
            PrizeTier::LastTwo => LAST_TWO_PRIZE,
            PrizeTier::FirstThree => FIRST_THREE_PRIZE,
            PrizeTier::RunningNumber => RUNNING_NUMBER_PRIZE,
        }
    }

    pub fn matches(self, ticket: &TicketNumber, draw: &Draw) -> bool {
        match self {
            PrizeTier::Jackpot => ticket == draw.winning_number(),
            PrizeTier::LastThree => ticket.last_three() == draw.last_three(),
            PrizeTier::LastTwo => ticket.last_two() == draw.last_two(),
            PrizeTier::FirstThree => ticket.first_three() == draw.first_three(),
            // numeric adjacency, no wrap between 000000 and 999999
            PrizeTier::RunningNumber => ticket.value().abs_diff(draw.winning_number().value()) == 1,
        }
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PrizeTier::Jackpot => "jackpot",
            PrizeTier::LastThree => "last three digits",
            PrizeTier::LastTwo => "last two digits",
            PrizeTier::FirstThree => "first three digits",
            PrizeTier::RunningNumber => "running number",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub status: TicketStatus,
    pub prize: u64,
    pub tier: Option<PrizeTier>,
}

impl MatchOutcome {
    pub fn won(tier: PrizeTier) -> Self {
        Self {
            status: TicketStatus::Won,
            prize: tier.prize(),
            tier: Some(tier),
        }
    }

    pub fn lost() -> Self {
        Self {
            status: TicketStatus::Lost,
            prize: 0,
            tier: None,
        }
    }

    pub fn is_win(&self) -> bool {
        self.status == TicketStatus::Won
    }
}

/// Evaluates `ticket` against `draw`, returning the highest-priority tier hit.
pub fn match_ticket(ticket: &TicketNumber, draw: &Draw) -> MatchOutcome {
    PrizeTier::PRIORITY
        .iter()
        .copied()
        .find(|tier| tier.matches(ticket, draw))
        .map(MatchOutcome::won)
        .unwrap_or_else(MatchOutcome::lost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn draw(winning: &str) -> Draw {
        let date = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        Draw::new(1, date, TicketNumber::parse(winning).unwrap())
    }

    fn check(ticket: &str, winning: &str) -> MatchOutcome {
        match_ticket(&TicketNumber::parse(ticket).unwrap(), &draw(winning))
    }

    #[test]
    fn test_exact_match_is_jackpot() {
        let outcome = check("123456", "123456");
        assert_eq!(outcome.status, TicketStatus::Won);
        assert_eq!(outcome.prize, 6_000_000);
        assert_eq!(outcome.tier, Some(PrizeTier::Jackpot));
    }

    #[test]
    fn test_last_three() {
        let outcome = check("999456", "123456");
        assert_eq!(outcome.prize, 4_000);
        assert_eq!(outcome.tier, Some(PrizeTier::LastThree));
    }

    #[test]
    fn test_last_two() {
        let outcome = check("000056", "123456");
        assert_eq!(outcome.prize, 2_000);
        assert_eq!(outcome.tier, Some(PrizeTier::LastTwo));
    }

    #[test]
    fn test_first_three() {
        let outcome = check("123000", "123456");
        assert_eq!(outcome.prize, 4_000);
        assert_eq!(outcome.tier, Some(PrizeTier::FirstThree));
    }

    #[test]
    fn test_running_number() {
        // no digit group in common, only adjacency
        let outcome = check("124000", "123999");
        assert_eq!(outcome.tier, Some(PrizeTier::RunningNumber));
        assert_eq!(outcome.prize, 100_000);

        let below = check("123998", "123999");
        // first three "123" match before adjacency is considered
        assert_eq!(below.tier, Some(PrizeTier::FirstThree));

        let across = check("099999", "100000");
        assert_eq!(across.tier, Some(PrizeTier::RunningNumber));
    }

    #[test]
    fn test_first_three_preempts_running_number() {
        let outcome = check("000000", "000001");
        assert_eq!(outcome.status, TicketStatus::Won);
        assert_eq!(outcome.prize, 4_000);
        assert_eq!(outcome.tier, Some(PrizeTier::FirstThree));
    }

    #[test]
    fn test_last_two_preempts_first_three() {
        // "56" and "123" both match; the lower-paying last-two rule runs first
        let outcome = check("123956", "123456");
        assert_eq!(outcome.tier, Some(PrizeTier::LastTwo));
        assert_eq!(outcome.prize, 2_000);
    }

    #[test]
    fn test_adjacent_with_shared_prefix_pays_first_three() {
        let outcome = check("123455", "123456");
        assert_eq!(outcome.tier, Some(PrizeTier::FirstThree));
        assert_eq!(outcome.prize, 4_000);
    }

    #[test]
    fn test_no_wrap_at_boundaries() {
        assert!(!check("999999", "000000").is_win());
        assert_eq!(check("000001", "000000").tier, Some(PrizeTier::FirstThree));
        assert_eq!(check("999998", "999999").tier, Some(PrizeTier::FirstThree));
    }

    #[test]
    fn test_lost() {
        let outcome = check("777777", "123456");
        assert_eq!(outcome, MatchOutcome::lost());
        assert_eq!(outcome.prize, 0);
    }

    /// Plain restatement of the prize table on strings and signed integers.
    fn expected_tier(ticket: u32, winning: u32) -> Option<PrizeTier> {
        let t = format!("{:06}", ticket);
        let w = format!("{:06}", winning);
        if t == w {
            Some(PrizeTier::Jackpot)
        } else if t[3..] == w[3..] {
            Some(PrizeTier::LastThree)
        } else if t[4..] == w[4..] {
            Some(PrizeTier::LastTwo)
        } else if t[..3] == w[..3] {
            Some(PrizeTier::FirstThree)
        } else if (i64::from(ticket) - i64::from(winning)).abs() == 1 {
            Some(PrizeTier::RunningNumber)
        } else {
            None
        }
    }

    #[test]
    fn test_full_range_agrees_with_prize_table() {
        for winning in ["000000", "000001", "450123", "450999", "999999"] {
            let draw = draw(winning);
            let winning_value: u32 = winning.parse().unwrap();
            let mut tally: BTreeMap<Option<PrizeTier>, usize> = BTreeMap::new();

            for value in 0..1_000_000u32 {
                let ticket = TicketNumber::from_value(value).unwrap();
                let outcome = match_ticket(&ticket, &draw);
                let expected = expected_tier(value, winning_value);
                assert_eq!(outcome.tier, expected, "{} against {}", ticket, winning);
                assert_eq!(outcome.prize, expected.map_or(0, PrizeTier::prize));
                assert_eq!(outcome.is_win(), expected.is_some());
                *tally.entry(outcome.tier).or_insert(0) += 1;
            }

            assert_eq!(tally.get(&Some(PrizeTier::Jackpot)), Some(&1));
            assert_eq!(tally.get(&Some(PrizeTier::LastThree)), Some(&999));
            assert_eq!(tally.get(&Some(PrizeTier::LastTwo)), Some(&9_000));
            assert_eq!(tally.get(&Some(PrizeTier::FirstThree)), Some(&990));
            let running = tally.get(&Some(PrizeTier::RunningNumber)).copied().unwrap_or(0);
            match winning {
                // 451000 is the only neighbour outside the "450" prefix
                "450999" => assert_eq!(running, 1),
                _ => assert_eq!(running, 0),
            }
        }
    }
}

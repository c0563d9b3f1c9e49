use crate::matcher::{match_ticket, MatchOutcome, PrizeTier};
use chrono::NaiveDate;
use lotto_core::{Draw, SettlementPolicy, TicketStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of one settlement pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    pub draw_id: u64,
    pub draw_date: NaiveDate,
    pub evaluated: usize,
    pub won: usize,
    pub lost: usize,
    /// Already settled by an earlier draw and left alone.
    pub skipped: usize,
    pub total_prize: u64,
    pub tiers: BTreeMap<PrizeTier, usize>,
}

impl SettlementReport {
    fn new(draw: &Draw) -> Self {
        Self {
            draw_id: draw.id(),
            draw_date: draw.draw_date(),
            evaluated: 0,
            won: 0,
            lost: 0,
            skipped: 0,
            total_prize: 0,
            tiers: BTreeMap::new(),
        }
    }

    fn record(&mut self, outcome: &MatchOutcome) {
        self.evaluated += 1;
        match outcome.tier {
            Some(tier) => {
                self.won += 1;
                self.total_prize += outcome.prize;
                *self.tiers.entry(tier).or_insert(0) += 1;
            }
            None => self.lost += 1,
        }
    }
}

/// Applies `draw` to every ticket scheduled for its date in one pass.
///
/// Under [`SettlementPolicy::PendingOnly`] tickets that are no longer pending
/// are skipped; under [`SettlementPolicy::Overwrite`] they are re-evaluated
/// and their previous result replaced.
pub fn settle(
    tickets: &mut TicketStore,
    draw: &Draw,
    policy: SettlementPolicy,
) -> SettlementReport {
    let mut report = SettlementReport::new(draw);

    tickets.settle_scheduled(draw, |ticket| {
        if policy == SettlementPolicy::PendingOnly && !ticket.is_pending() {
            report.skipped += 1;
            return None;
        }

        let outcome = match_ticket(ticket.number(), draw);
        tracing::debug!(
            "Ticket {} ({}) in draw {}: {} {}",
            ticket.id(),
            ticket.number(),
            draw.id(),
            outcome.status,
            outcome.prize
        );
        report.record(&outcome);
        Some((outcome.status, outcome.prize))
    });

    tracing::info!(
        "Draw {} settled {} tickets for {}: {} won, {} lost, {} skipped, {} paid",
        draw.id(),
        report.evaluated,
        report.draw_date,
        report.won,
        report.lost,
        report.skipped,
        report.total_prize
    );

    report
}

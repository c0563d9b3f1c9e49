pub mod draw;
pub mod session;
pub mod simulate;

pub use draw::{check_number, generate_numbers, show_next_date};
pub use session::run_session;
pub use simulate::run_simulation;

use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{Draw, Ticket, User};
use lotto_engine::{match_ticket, SettlementReport};

/// Tier is recomputed against the draw that settled the ticket.
fn tier_label(ticket: &Ticket, draws: &[Draw]) -> String {
    ticket
        .settled_by()
        .and_then(|id| draws.iter().find(|d| d.id() == id))
        .and_then(|draw| match_ticket(ticket.number(), draw).tier)
        .map(|tier| tier.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn print_tickets(tickets: &[Ticket], users: &[User], draws: &[Draw]) {
    if tickets.is_empty() {
        println!("No tickets found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Owner", "Number", "Draw Date", "Status", "Prize", "Tier"]);

    for ticket in tickets {
        let owner = users
            .iter()
            .find(|u| u.id == ticket.user_id())
            .map(|u| u.username.clone())
            .unwrap_or_else(|| ticket.user_id().to_string());

        table.add_row(vec![
            ticket.id().to_string(),
            owner,
            ticket.number().to_string(),
            ticket.draw_date().to_string(),
            ticket.status().to_string(),
            ticket.prize().to_string(),
            tier_label(ticket, draws),
        ]);
    }

    println!("{}", table);
}

pub fn print_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("No draws yet.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Draw Date", "Winning", "First 3", "Last 3", "Last 2"]);

    for draw in draws {
        table.add_row(vec![
            draw.id().to_string(),
            draw.draw_date().to_string(),
            draw.winning_number().to_string(),
            draw.first_three().to_string(),
            draw.last_three().to_string(),
            draw.last_two().to_string(),
        ]);
    }

    println!("{}", table);
}

pub fn print_report(report: &SettlementReport) {
    println!("Settlement for draw {} ({}):", report.draw_id, report.draw_date);
    println!("  Evaluated: {}", report.evaluated);
    println!("  Won: {}", report.won);
    println!("  Lost: {}", report.lost);
    if report.skipped > 0 {
        println!("  Skipped (already settled): {}", report.skipped);
    }
    println!("  Total paid: {}", report.total_prize);

    for (tier, count) in &report.tiers {
        println!("    {}: {} x {}", tier, count, tier.prize());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lotto_core::{LotteryConfig, Role, SettlementPolicy};
    use lotto_engine::{
        DrawRequest, FixedClock, LotteryService, PurchaseRequest, WinningNumberGenerator,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_tier_label_follows_settling_draw() {
        // both draws pay 4000 for "123456": last three first, then first three
        let service = LotteryService::with_parts(
            LotteryConfig::new(SettlementPolicy::Overwrite),
            WinningNumberGenerator::sequence(vec![999_456, 123_999]),
            Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())),
        );
        let alice = service.register_user("alice", Role::User).await.unwrap().actor();
        let admin = service.register_user("admin", Role::Admin).await.unwrap().actor();
        let ticket = service
            .buy_ticket(&alice, PurchaseRequest::new("123456"))
            .await
            .unwrap();
        assert_eq!(tier_label(&ticket, &[]), "-");

        service.trigger_draw(&admin, DrawRequest::default()).await.unwrap();
        let draws = service.draws().await;
        let ticket = &service.tickets_for(&alice).await.unwrap()[0];
        assert_eq!(tier_label(ticket, &draws), "last three digits");

        let second = service.trigger_draw(&admin, DrawRequest::default()).await.unwrap();
        let draws = service.draws().await;
        let ticket = &service.tickets_for(&alice).await.unwrap()[0];
        assert_eq!(ticket.prize(), 4_000);
        assert_eq!(ticket.settled_by(), Some(second.draw.id()));
        assert_eq!(tier_label(ticket, &draws), "first three digits");
    }
}

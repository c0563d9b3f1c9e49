use anyhow::Result;
use chrono::Utc;
use lotto_core::{Draw, LotteryConfig, TicketNumber};
use lotto_engine::{match_ticket, LotteryService, WinningNumberGenerator};

pub fn show_next_date(config: LotteryConfig) -> Result<()> {
    let service = LotteryService::new(config)?;
    let today = service.today();

    println!("Today: {}", today);
    println!("Next draw: {}", service.next_draw_date()?);
    Ok(())
}

pub fn generate_numbers(config: LotteryConfig, count: usize) -> Result<()> {
    let generator = match config.seed {
        Some(seed) => WinningNumberGenerator::seeded(seed),
        None => WinningNumberGenerator::thread_rng(),
    };

    for _ in 0..count {
        println!("{}", generator.generate()?);
    }
    Ok(())
}

/// Matches one ticket against a winning number without touching any store.
pub fn check_number(ticket: &str, winning: &str) -> Result<()> {
    let ticket = TicketNumber::parse(ticket)?;
    let winning = TicketNumber::parse(winning)?;

    // the matcher ignores the date
    let draw = Draw::new(0, Utc::now().date_naive(), winning);
    let outcome = match_ticket(&ticket, &draw);

    println!("Ticket:  {}", ticket);
    println!("Winning: {}", draw.winning_number());
    match outcome.tier {
        Some(tier) => println!("Result:  won {} ({})", outcome.prize, tier),
        None => println!("Result:  lost"),
    }
    Ok(())
}

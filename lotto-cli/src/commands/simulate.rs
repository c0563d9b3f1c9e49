use super::{print_draws, print_report, print_tickets};
use anyhow::{bail, Result};
use lotto_core::{LotteryConfig, Role};
use lotto_engine::{DrawRequest, LotteryService, PurchaseRequest, WinningNumberGenerator};

/// Registers `players` users, buys `tickets` random tickets each, then runs
/// `draws` draws and prints the settled state.
pub async fn run_simulation(
    config: LotteryConfig,
    players: usize,
    tickets: usize,
    draws: usize,
) -> Result<()> {
    if players == 0 {
        bail!("At least one player is required");
    }

    // ticket picks use their own stream so they never mirror the winning numbers
    let picks = match config.seed {
        Some(seed) => WinningNumberGenerator::seeded(seed.wrapping_add(1)),
        None => WinningNumberGenerator::thread_rng(),
    };
    let service = LotteryService::new(config)?;

    println!("Today: {}", service.today());
    println!("Next draw: {}", service.next_draw_date()?);
    println!();

    let admin = service.register_user("admin", Role::Admin).await?.actor();

    for i in 1..=players {
        let player = service
            .register_user(&format!("player-{}", i), Role::User)
            .await?
            .actor();

        for _ in 0..tickets {
            let number = picks.generate()?;
            service
                .buy_ticket(&player, PurchaseRequest::new(number.as_str()))
                .await?;
        }
    }

    for _ in 0..draws {
        let outcome = service.trigger_draw(&admin, DrawRequest::default()).await?;
        println!("Winning number: {}", outcome.draw.winning_number());
        print_report(&outcome.report);
        println!();
    }

    let users = service.users().await;
    let all_draws = service.draws().await;
    print_draws(&all_draws);
    print_tickets(&service.all_tickets().await, &users, &all_draws);

    Ok(())
}

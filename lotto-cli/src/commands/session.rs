use super::{print_draws, print_report, print_tickets};
use anyhow::Result;
use dialoguer::{Input, Select};
use lotto_core::{Actor, LotteryConfig, Role, TicketNumber};
use lotto_engine::{DrawRequest, LotteryService, PurchaseRequest};

const MENU: [&str; 7] = [
    "Register user",
    "Switch user",
    "Buy ticket",
    "Trigger draw",
    "My tickets",
    "All draws",
    "Quit",
];

/// Interactive in-memory session. State is discarded on exit.
pub async fn run_session(config: LotteryConfig) -> Result<()> {
    let service = LotteryService::new(config)?;
    let mut current: Option<(Actor, String)> = None;

    println!("Lottery session started. Today is {}.", service.today());
    println!("Nothing is saved when the session ends.");

    loop {
        let prompt = match &current {
            Some((actor, name)) => format!("[{} as {}]", name, actor.role),
            None => "[no user]".to_string(),
        };

        let choice = Select::new()
            .with_prompt(prompt)
            .items(&MENU)
            .default(0)
            .interact()?;

        // errors from a single action are reported, the session keeps going
        let result = match choice {
            0 => register(&service, &mut current).await,
            1 => switch_user(&service, &mut current).await,
            2 => buy(&service, &current).await,
            3 => draw(&service, &current).await,
            4 => my_tickets(&service, &current).await,
            5 => {
                print_draws(&service.draws().await);
                Ok(())
            }
            _ => break,
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn require_user(current: &Option<(Actor, String)>) -> Result<Actor> {
    match current {
        Some((actor, _)) => Ok(*actor),
        None => anyhow::bail!("No user selected. Register or switch user first."),
    }
}

async fn register(service: &LotteryService, current: &mut Option<(Actor, String)>) -> Result<()> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let role = match Select::new()
        .with_prompt("Role")
        .items(&["user", "admin"])
        .default(0)
        .interact()?
    {
        1 => Role::Admin,
        _ => Role::User,
    };

    let user = service.register_user(&username, role).await?;
    println!("Registered '{}' (ID: {}) as {}", user.username, user.id, user.role);
    *current = Some((user.actor(), user.username));
    Ok(())
}

async fn switch_user(
    service: &LotteryService,
    current: &mut Option<(Actor, String)>,
) -> Result<()> {
    let users = service.users().await;
    if users.is_empty() {
        println!("No users registered yet.");
        return Ok(());
    }

    let labels: Vec<String> = users
        .iter()
        .map(|u| format!("{} ({})", u.username, u.role))
        .collect();
    let index = Select::new()
        .with_prompt("Act as")
        .items(&labels)
        .default(0)
        .interact()?;

    let user = &users[index];
    *current = Some((service.actor_for(user.id).await?, user.username.clone()));
    Ok(())
}

async fn buy(service: &LotteryService, current: &Option<(Actor, String)>) -> Result<()> {
    let actor = require_user(current)?;
    let number: String = Input::new()
        .with_prompt("Ticket number (6 digits)")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            TicketNumber::parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let ticket = service
        .buy_ticket(&actor, PurchaseRequest::new(number))
        .await?;
    println!(
        "Ticket {} ({}) is in the draw on {}",
        ticket.id(),
        ticket.number(),
        ticket.draw_date()
    );
    Ok(())
}

async fn draw(service: &LotteryService, current: &Option<(Actor, String)>) -> Result<()> {
    let actor = require_user(current)?;
    let outcome = service.trigger_draw(&actor, DrawRequest::default()).await?;

    println!("Winning number: {}", outcome.draw.winning_number());
    print_report(&outcome.report);
    Ok(())
}

async fn my_tickets(service: &LotteryService, current: &Option<(Actor, String)>) -> Result<()> {
    let actor = require_user(current)?;
    let tickets = service.tickets_for(&actor).await?;
    print_tickets(&tickets, &service.users().await, &service.draws().await);
    Ok(())
}

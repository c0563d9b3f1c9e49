use crate::clock::{Clock, FixedClock, SystemClock};
use crate::generator::WinningNumberGenerator;
use crate::period::next_draw_date;
use crate::settlement::{settle, SettlementReport};
use crate::Result;
use chrono::NaiveDate;
use lotto_core::{
    Actor, Draw, LottoError, LotteryConfig, Role, Storage, Tables, Ticket, TicketNumber, User,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of a ticket purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub number: String,
}

impl PurchaseRequest {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

/// Body of a draw trigger. Carries no fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub draw: Draw,
    pub report: SettlementReport,
}

/// Request boundary for the lottery. Every mutating call takes the storage
/// lock once, validates, then writes, so callers never observe half a draw.
pub struct LotteryService {
    storage: Storage,
    generator: WinningNumberGenerator,
    clock: Arc<dyn Clock>,
    config: LotteryConfig,
}

impl LotteryService {
    pub fn new(config: LotteryConfig) -> Result<Self> {
        config.validate()?;

        let generator = match config.seed {
            Some(seed) => WinningNumberGenerator::seeded(seed),
            None => WinningNumberGenerator::thread_rng(),
        };
        let clock: Arc<dyn Clock> = match config.today {
            Some(today) => Arc::new(FixedClock::new(today)),
            None => Arc::new(SystemClock::new(config.timezone)),
        };

        Ok(Self::with_parts(config, generator, clock))
    }

    pub fn with_parts(
        config: LotteryConfig,
        generator: WinningNumberGenerator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage: Storage::new(),
            generator,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn next_draw_date(&self) -> Result<NaiveDate> {
        next_draw_date(self.clock.today())
    }

    pub async fn register_user(&self, username: &str, role: Role) -> Result<User> {
        let mut tables = self.storage.lock().await;
        let user = tables.users.create_user(username, role)?;

        tracing::info!("Registered {} '{}' with ID: {}", user.role, user.username, user.id);
        Ok(user)
    }

    pub async fn actor_for(&self, user_id: u64) -> Result<Actor> {
        let tables = self.storage.lock().await;
        tables
            .users
            .get(user_id)
            .map(User::actor)
            .ok_or_else(|| LottoError::UserNotFound(user_id).into())
    }

    pub async fn users(&self) -> Vec<User> {
        self.storage.lock().await.users.list_users()
    }

    /// Validates the number, then appends a pending ticket for the next draw.
    pub async fn buy_ticket(&self, actor: &Actor, request: PurchaseRequest) -> Result<Ticket> {
        let number = TicketNumber::parse(&request.number).map_err(|e| {
            tracing::warn!("Actor {} rejected purchase: {}", actor.id, e);
            e
        })?;
        let draw_date = self.next_draw_date()?;

        let mut tables = self.storage.lock().await;
        ensure_known(&tables, actor)?;

        let ticket = tables.tickets.insert(actor.id, number, draw_date);

        tracing::info!(
            "Actor {} bought ticket {} ({}) for draw on {}",
            actor.id,
            ticket.id(),
            ticket.number(),
            draw_date
        );
        Ok(ticket)
    }

    /// Draws a winning number for the next draw date and settles that date's
    /// tickets before releasing the lock. Admin only.
    pub async fn trigger_draw(&self, actor: &Actor, _request: DrawRequest) -> Result<DrawOutcome> {
        actor.require(Role::Admin).map_err(|e| {
            tracing::warn!("Actor {} rejected draw trigger: {}", actor.id, e);
            e
        })?;
        let draw_date = self.next_draw_date()?;

        let mut tables = self.storage.lock().await;
        ensure_known(&tables, actor)?;

        // only accepted triggers consume a number from the source
        let winning_number = self.generator.generate()?;
        let draw = tables.draws.insert(draw_date, winning_number);
        tracing::info!(
            "Draw {} for {} produced winning number {}",
            draw.id(),
            draw.draw_date(),
            draw.winning_number()
        );

        let report = settle(&mut tables.tickets, &draw, self.config.settlement_policy);
        Ok(DrawOutcome { draw, report })
    }

    pub async fn tickets_for(&self, actor: &Actor) -> Result<Vec<Ticket>> {
        let tables = self.storage.lock().await;
        ensure_known(&tables, actor)?;
        Ok(tables.tickets.list_by_user(actor.id))
    }

    /// Every draw, oldest first.
    pub async fn draws(&self) -> Vec<Draw> {
        self.storage.lock().await.draws.list_draws()
    }

    pub async fn all_tickets(&self) -> Vec<Ticket> {
        self.storage.lock().await.tickets.list_tickets()
    }
}

fn ensure_known(tables: &Tables, actor: &Actor) -> Result<()> {
    match tables.users.get(actor.id) {
        Some(user) if user.role == actor.role => Ok(()),
        _ => Err(LottoError::UnknownActor(actor.id).into()),
    }
}

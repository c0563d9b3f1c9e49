//! Numbered-ticket lottery engine
//!
//! Tickets are bought for the next twice-monthly draw (the 16th or the 1st).
//! A draw picks a six digit winning number and settles every ticket scheduled
//! for its date against a fixed, ordered prize table.

pub mod clock;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod period;
pub mod service;
pub mod settlement;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DrawError, Result};
pub use generator::{RandomSource, WinningNumberGenerator};
pub use matcher::{match_ticket, MatchOutcome, PrizeTier};
pub use period::next_draw_date;
pub use service::{DrawOutcome, DrawRequest, LotteryService, PurchaseRequest};
pub use settlement::{settle, SettlementReport};

use lotto_core::LotteryConfig;

/// Builds a service from `config`.
pub fn create_service(config: LotteryConfig) -> Result<LotteryService> {
    LotteryService::new(config)
}

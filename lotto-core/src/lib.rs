//! Lotto core - domain types, in-memory storage and configuration
//!
//! Tickets, draws and users live in process memory, owned by a single
//! [`Storage`] handle that serializes every read and write.

pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use config::{DrawTimezone, LotteryConfig, SettlementPolicy};
pub use error::{LottoError, Result};
pub use storage::{DrawStore, Storage, Tables, TicketStore, UserStore};
pub use types::{Actor, Draw, Role, Ticket, TicketNumber, TicketStatus, User};

pub mod draw_store;
pub mod ticket_store;
pub mod user_store;

pub use draw_store::DrawStore;
pub use ticket_store::TicketStore;
pub use user_store::UserStore;

use tokio::sync::{Mutex, MutexGuard};

/// Monotonic identifier source. Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// The three collections, always locked together so a draw and its
/// settlement pass happen under one exclusive writer.
#[derive(Debug, Default)]
pub struct Tables {
    pub users: UserStore,
    pub tickets: TicketStore,
    pub draws: DrawStore,
}

pub struct Storage {
    tables: Mutex<Tables>,
}

impl Storage {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().await
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

use crate::storage::IdSequence;
use crate::types::{Draw, TicketNumber};
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct DrawStore {
    draws: Vec<Draw>,
    ids: IdSequence,
}

impl DrawStore {
    pub fn insert(&mut self, draw_date: NaiveDate, winning_number: TicketNumber) -> Draw {
        let draw = Draw::new(self.ids.next_id(), draw_date, winning_number);
        self.draws.push(draw.clone());
        draw
    }

    pub fn get(&self, id: u64) -> Option<&Draw> {
        self.draws.iter().find(|d| d.id() == id)
    }

    /// Draws in creation order.
    pub fn list_draws(&self) -> Vec<Draw> {
        self.draws.clone()
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

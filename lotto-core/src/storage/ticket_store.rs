use crate::storage::IdSequence;
use crate::types::{Draw, Ticket, TicketNumber, TicketStatus};
use chrono::NaiveDate;

/// Tickets in purchase order. Callers only ever see clones; the one way to
/// change a stored ticket is [`TicketStore::settle_scheduled`].
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    ids: IdSequence,
}

impl TicketStore {
    pub fn insert(&mut self, user_id: u64, number: TicketNumber, draw_date: NaiveDate) -> Ticket {
        let ticket = Ticket::new(self.ids.next_id(), user_id, number, draw_date);
        self.tickets.push(ticket.clone());
        ticket
    }

    pub fn get(&self, id: u64) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id() == id)
    }

    pub fn list_by_user(&self, user_id: u64) -> Vec<Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.user_id() == user_id)
            .cloned()
            .collect()
    }

    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    /// Single pass over every ticket scheduled for the draw's date. `decide`
    /// sees each one in purchase order; a returned `(status, prize)` is written
    /// back and stamped with the draw's id, `None` leaves the ticket as it is.
    /// Returns the number of tickets written.
    pub fn settle_scheduled<F>(&mut self, draw: &Draw, mut decide: F) -> usize
    where
        F: FnMut(&Ticket) -> Option<(TicketStatus, u64)>,
    {
        let mut written = 0;
        for ticket in self
            .tickets
            .iter_mut()
            .filter(|t| t.draw_date() == draw.draw_date())
        {
            if let Some((status, prize)) = decide(ticket) {
                ticket.settle(draw.id(), status, prize);
                written += 1;
            }
        }
        written
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn number(raw: &str) -> TicketNumber {
        TicketNumber::parse(raw).unwrap()
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut store = TicketStore::default();
        let a = store.insert(1, number("111111"), date(2024, 5, 16));
        let b = store.insert(2, number("222222"), date(2024, 5, 16));

        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 2);
        assert!(a.is_pending());
        assert_eq!(a.prize(), 0);
        assert_eq!(store.list_by_user(2).len(), 1);
    }

    #[test]
    fn test_settle_scheduled_only_touches_matching_date() {
        let mut store = TicketStore::default();
        store.insert(1, number("111111"), date(2024, 5, 16));
        store.insert(1, number("222222"), date(2024, 6, 1));
        store.insert(2, number("333333"), date(2024, 5, 16));

        let draw = Draw::new(7, date(2024, 5, 16), number("999999"));
        let mut seen = Vec::new();
        let written = store.settle_scheduled(&draw, |t| {
            seen.push(t.id());
            Some((TicketStatus::Lost, 0))
        });

        assert_eq!(written, 2);
        assert_eq!(seen, vec![1, 3]);
        assert_eq!(store.get(1).unwrap().settled_by(), Some(7));
        assert_eq!(store.get(3).unwrap().settled_by(), Some(7));

        let untouched = store.get(2).unwrap();
        assert_eq!(untouched.status(), TicketStatus::Pending);
        assert_eq!(untouched.settled_by(), None);
    }

    #[test]
    fn test_settle_scheduled_skips_none() {
        let mut store = TicketStore::default();
        store.insert(1, number("111111"), date(2024, 5, 16));

        let draw = Draw::new(1, date(2024, 5, 16), number("111111"));
        let written = store.settle_scheduled(&draw, |_| None);
        assert_eq!(written, 0);
        assert!(store.get(1).unwrap().is_pending());
        assert_eq!(store.get(1).unwrap().settled_by(), None);
    }
}

//! Request sequencing
//!
//! Snapshot fetches can complete out of order. Each fetch takes a ticket
//! before it is sent; when the response arrives it is applied only if no
//! newer fetch has been issued since.

/// Ticket for one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic counter of issued requests
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the ticket for a new request
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Whether a response for `ticket` should still be applied
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

//! Request sequencing for stale-response detection.
//!
//! In-flight requests cannot be cancelled. Instead every request carries a
//! [`Ticket`] from its kind's [`RequestSequence`], and a response is applied
//! only if its ticket is still the newest one issued for that kind.

/// Sequence number attached to an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic counter for one kind of request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Creates a counter with nothing issued.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issues the ticket for a new request, superseding all earlier ones.
    pub const fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Supersedes every outstanding ticket without issuing a request.
    pub const fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Whether a response carrying `ticket` may still be applied.
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate_supersedes_outstanding() {
        let mut seq = RequestSequence::new();
        let ticket = seq.issue();
        seq.invalidate();

        assert!(!seq.is_current(ticket));
        let next = seq.issue();
        assert!(seq.is_current(next));
    }
}

/// Identifies one issued fetch. Results carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Monotonic fetch counter; only the latest ticket is current.
#[derive(Debug, Default)]
pub(crate) struct Generations {
    latest: u64,
}

impl Generations {
    pub(crate) fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket {
            generation: self.latest,
        }
    }

    pub(crate) fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.latest
    }
}

//! Save coalescing.
//!
//! At most one save runs at a time. Requests made while a save is in flight
//! are folded into a single follow-up that carries whatever the document
//! looks like when it starts, so the latest content always lands last.

/// Token for the save in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    version: u64,
}

impl SaveTicket {
    /// Document version captured when the save started
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[derive(Debug, Default)]
pub struct SaveCoalescer {
    in_flight: Option<u64>,
    pending: bool,
}

impl SaveCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a save of `version`, or queue a follow-up if one is running
    pub fn begin(&mut self, version: u64) -> Option<SaveTicket> {
        if self.in_flight.is_some() {
            self.pending = true;
            return None;
        }
        self.in_flight = Some(version);
        Some(SaveTicket { version })
    }

    /// Finish the save in flight. Returns whether a queued follow-up should
    /// now run.
    pub fn finish(&mut self, ticket: SaveTicket) -> bool {
        if self.in_flight != Some(ticket.version) {
            tracing::warn!(version = ticket.version, "finished a save that was not in flight");
            return false;
        }
        self.in_flight = None;
        std::mem::take(&mut self.pending)
    }

    /// Forget a queued follow-up; the save in flight still has to finish
    pub fn drop_pending(&mut self) {
        self.pending = false;
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }
}

//! Guards against stale asynchronous loads.
//!
//! Each load is issued a [`LoadTicket`]. Only a completion carrying the most
//! recently issued ticket may replace the document; earlier ones arrived
//! out of order and are dropped.

/// Token for one load request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    sequence: u64,
    document_id: String,
}

impl LoadTicket {
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Default)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding every earlier one
    pub fn begin(&mut self, document_id: impl Into<String>) -> LoadTicket {
        self.latest += 1;
        LoadTicket {
            sequence: self.latest,
            document_id: document_id.into(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.sequence == self.latest
    }

    /// Invalidate any outstanding ticket without starting a load
    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}

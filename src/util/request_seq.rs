//! Sequence numbers for async loads that can overlap.
//!
//! A page bumps the sequence before each request and applies the response
//! only if no newer request started in the meantime.

#[cfg(test)]
#[path = "request_seq_test.rs"]
mod request_seq_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Start a request and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    /// True if `ticket` belongs to the most recent request.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Outcome of a single broadcast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Subscribers whose buffer accepted the event
    pub delivered: usize,
    /// Subscribers that missed the event (buffer full or receiver gone)
    pub dropped: usize,
    /// Subscribers registered when the broadcast ran
    pub total: usize,
}

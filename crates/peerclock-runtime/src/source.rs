//! Collaborator boundaries
//!
//! The transport that delivers time records, the display that shows the
//! clock line and the button that gates emission are all external to the
//! clock. These traits are the seams they plug into; the provided
//! implementations cover the console case and tests.

use peerclock_core::ClockResult;

/// External time source delivering a raw current-time record on demand
pub trait TimeSource {
    /// Fetch the peer's current time as a raw record buffer
    fn fetch_current_time(&mut self) -> ClockResult<Vec<u8>>;
}

/// Time source that always hands over the same record bytes.
/// Useful for demos and tests standing in for a real peer.
#[derive(Clone, Debug)]
pub struct FixedTimeSource {
    record: Vec<u8>,
}

impl FixedTimeSource {
    pub fn new(record: Vec<u8>) -> Self {
        FixedTimeSource { record }
    }
}

impl TimeSource for FixedTimeSource {
    fn fetch_current_time(&mut self) -> ClockResult<Vec<u8>> {
        Ok(self.record.clone())
    }
}

/// Output collaborator receiving one formatted line per consumed tick
pub trait DisplaySink {
    fn emit(&mut self, line: &str);
}

/// Sink that prints the clock line to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DisplaySink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Gate deciding whether the formatted line is emitted this tick.
/// A device build would back this with a button-state read; absence of a
/// gate means "always emit".
pub trait EmitGate {
    fn should_emit(&self) -> bool;
}

/// Gate that always allows emission
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysEmit;

impl EmitGate for AlwaysEmit {
    fn should_emit(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_returns_record() {
        let mut source = FixedTimeSource::new(vec![1, 2, 3, 4]);
        assert_eq!(source.fetch_current_time().unwrap(), vec![1, 2, 3, 4]);
        // Repeated fetches keep working
        assert_eq!(source.fetch_current_time().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_always_emit() {
        assert!(AlwaysEmit.should_emit());
    }
}

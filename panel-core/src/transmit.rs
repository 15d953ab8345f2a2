//! Transmit seam between the protocol core and the serial driver glue.

/// Error type for transmit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitError {
    /// The transport could not queue the frame right now.
    Busy,
    /// Lower-level I/O failure.
    Io,
}

/// Sink for outbound command frames.
///
/// Implementations hand the bytes to the serial transport and return
/// immediately; delivery is never awaited and there is no completion
/// notification. An `Err` means the frame was not queued at all — the
/// caller decides whether that is worth reporting (the request path
/// surfaces it, the receive path has nobody to tell).
pub trait TransmitSink {
    /// Queue a frame for transmission.
    fn send(&mut self, frame: &[u8]) -> Result<(), TransmitError>;
}

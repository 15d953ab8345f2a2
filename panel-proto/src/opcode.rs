//! Opcode bytes of the panel serial protocol.
//!
//! Commands travel host-to-panel as a single opcode byte, optionally
//! followed by a payload (see [`LED_SET`]). Responses travel panel-to-host
//! as the first byte of a 3-byte packet and occupy a disjoint range so the
//! two directions can never be confused on the wire.

// --- Commands (host -> panel) ---

/// Enable button interrupt-on-change reporting.
///
/// Once enabled, the panel pushes a [`BIOC_EVENT`] packet whenever any
/// button changes state instead of waiting to be polled.
pub const BIOC_ON: u8 = 0x14;

/// Disable button interrupt-on-change reporting.
pub const BIOC_OFF: u8 = 0x15;

/// Put the LED display into user mode; the host drives the segments.
pub const LED_USR: u8 = 0x20;

/// Put the LED display into clock mode; the panel drives it internally.
pub const LED_CLK: u8 = 0x21;

/// Set the LED display.
///
/// Followed by five payload bytes: a digit enable mask and four segment
/// pattern bytes (see [`crate::led::LedCommand`]).
pub const LED_SET: u8 = 0x22;

// --- Responses (panel -> host) ---

/// The previous command was accepted.
pub const ACK: u8 = 0xA0;

/// A button changed state; the data bytes carry the face-button and
/// direction nibbles.
pub const BIOC_EVENT: u8 = 0xA1;

/// The panel has reset itself, clearing its display and reporting mode.
pub const RESET: u8 = 0xA6;

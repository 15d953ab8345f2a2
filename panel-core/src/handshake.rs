//! Reset handshake state machine.
//!
//! A panel reset wipes the peripheral's reporting mode and display. The
//! handshake re-arms button event reporting and, once the panel has
//! acknowledged both mode commands, replays the last known display frame:
//!
//! ```text
//! RESET -> send [BIOC_ON]    (AwaitingUserModeAck)
//! ACK   -> send [LED_USR]    (AwaitingLedRestoreAck)
//! ACK   -> send cached frame (Idle)
//! ```
//!
//! The transition function is pure; the controller owns the state and
//! performs the sends. There is no timeout: if an expected ACK never
//! arrives the machine parks in its current state until the next RESET
//! restarts the exchange.

use panel_proto::opcode;

/// Where the handshake currently stands.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetState {
    /// No exchange in progress.
    #[default]
    Idle,
    /// `BIOC_ON` sent, waiting for its acknowledgement.
    AwaitingUserModeAck,
    /// `LED_USR` sent, waiting for its acknowledgement.
    AwaitingLedRestoreAck,
}

/// Frame the controller must send as a transition side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum HandshakeSend {
    /// Single-byte `[BIOC_ON]`.
    EnableEvents,
    /// Single-byte `[LED_USR]`.
    LedUserMode,
    /// The cached 6-byte display frame, verbatim.
    RestoreLeds,
}

/// Advance the handshake by one inbound opcode.
///
/// Acknowledgements are matched by comparing the received opcode against
/// [`opcode::ACK`]; any opcode that is neither a RESET nor the expected ACK
/// leaves the machine exactly where it is, with nothing to send.
pub fn step(state: ResetState, received: u8) -> (ResetState, Option<HandshakeSend>) {
    // A RESET restarts the exchange from any state: whatever we were
    // waiting on, the panel that would have answered is gone.
    if received == opcode::RESET {
        return (
            ResetState::AwaitingUserModeAck,
            Some(HandshakeSend::EnableEvents),
        );
    }
    match state {
        ResetState::AwaitingUserModeAck if received == opcode::ACK => (
            ResetState::AwaitingLedRestoreAck,
            Some(HandshakeSend::LedUserMode),
        ),
        ResetState::AwaitingLedRestoreAck if received == opcode::ACK => {
            (ResetState::Idle, Some(HandshakeSend::RestoreLeds))
        }
        _ => (state, None),
    }
}

//! Ioctl-style request surface for the surrounding driver glue.
//!
//! The glue receives `(code, arg)` pairs from its callers, forwards them to
//! [`PanelController::handle_request`], and translates [`RequestError`]
//! into whatever failure convention its interface uses. Data flowing back
//! to a caller goes through the [`UserAccess`] seam, which stands in for
//! the copy-to-caller primitive of the host environment.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::controller::PanelController;
use crate::transmit::{TransmitError, TransmitSink};

/// Raw request codes, as the driver glue receives them.
pub const REQ_INIT: u32 = 0;
pub const REQ_BUTTONS: u32 = 1;
pub const REQ_SET_LED: u32 = 2;
pub const REQ_LED_ACK: u32 = 3;
pub const REQ_LED_REQUEST: u32 = 4;
pub const REQ_READ_LED: u32 = 5;

/// A decoded request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    /// Send the startup frame (`[BIOC_ON, LED_USR]`).
    Init,
    /// Copy the current button word back to the caller.
    Buttons,
    /// Encode the packed descriptor and drive the display.
    SetLed(u32),
    /// Legacy acknowledgement request; accepted, no effect.
    LedAck,
    /// Legacy readback request; accepted, no effect.
    LedRequest,
    /// Legacy readback request; accepted, no effect.
    ReadLed,
}

impl Request {
    /// Decode a raw `(code, arg)` pair, or `None` for an unknown code.
    #[must_use]
    pub const fn from_raw(code: u32, arg: u32) -> Option<Self> {
        match code {
            REQ_INIT => Some(Self::Init),
            REQ_BUTTONS => Some(Self::Buttons),
            REQ_SET_LED => Some(Self::SetLed(arg)),
            REQ_LED_ACK => Some(Self::LedAck),
            REQ_LED_REQUEST => Some(Self::LedRequest),
            REQ_READ_LED => Some(Self::ReadLed),
            _ => None,
        }
    }
}

/// The caller-supplied destination could not be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CopyError;

/// Destination for data copied back to the requesting caller.
///
/// In a hosted driver this wraps the copy-to-user primitive; in tests it
/// is a plain buffer.
pub trait UserAccess {
    /// Write `bytes` to the caller's destination.
    fn copy_out(&mut self, bytes: &[u8]) -> Result<(), CopyError>;
}

/// Error type for request dispatch.
///
/// All variants are local and non-fatal; internal state is unchanged
/// except where a mutation deliberately precedes the failing step (the LED
/// cache is written before the transmit attempt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestError {
    /// The transmit sink rejected the outbound frame.
    Transmit(TransmitError),
    /// The caller's destination could not be written.
    Copy,
    /// The request code is not recognized.
    Unsupported,
}

impl From<TransmitError> for RequestError {
    fn from(err: TransmitError) -> Self {
        Self::Transmit(err)
    }
}

impl<R: RawMutex, T: TransmitSink> PanelController<R, T> {
    /// Dispatch one raw request from the driver glue.
    pub fn handle_request(
        &self,
        code: u32,
        arg: u32,
        user: &mut dyn UserAccess,
    ) -> Result<(), RequestError> {
        let request = Request::from_raw(code, arg).ok_or(RequestError::Unsupported)?;
        match request {
            Request::Init => Ok(self.initialize()?),
            Request::Buttons => user
                .copy_out(&[self.buttons().raw()])
                .map_err(|_| RequestError::Copy),
            Request::SetLed(descriptor) => Ok(self.set_led(descriptor)?),
            // Kept for interface compatibility; they carry no state.
            Request::LedAck | Request::LedRequest | Request::ReadLed => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::sync::{Arc, Mutex};
    use std::vec;
    use std::vec::Vec;

    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use panel_proto::{opcode, Packet};

    use super::*;

    struct RecordingSink {
        frames: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl TransmitSink for RecordingSink {
        fn send(&mut self, frame: &[u8]) -> Result<(), TransmitError> {
            self.frames.lock().unwrap().push(frame.to_vec());
            Ok(())
        }
    }

    // UserAccess backed by a plain buffer, optionally failing like an
    // unwritable caller destination.
    struct MockUser {
        written: Vec<u8>,
        fail: bool,
    }

    impl MockUser {
        fn new() -> Self {
            Self {
                written: Vec::new(),
                fail: false,
            }
        }
    }

    impl UserAccess for MockUser {
        fn copy_out(&mut self, bytes: &[u8]) -> Result<(), CopyError> {
            if self.fail {
                return Err(CopyError);
            }
            self.written.extend_from_slice(bytes);
            Ok(())
        }
    }

    fn controller() -> (
        PanelController<NoopRawMutex, RecordingSink>,
        Arc<Mutex<Vec<Vec<u8>>>>,
    ) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink {
            frames: frames.clone(),
        };
        (PanelController::new(sink), frames)
    }

    #[test]
    fn test_from_raw_round_trip() {
        assert_eq!(Request::from_raw(REQ_INIT, 0), Some(Request::Init));
        assert_eq!(
            Request::from_raw(REQ_SET_LED, 0xABCD),
            Some(Request::SetLed(0xABCD))
        );
        assert_eq!(Request::from_raw(99, 0), None);
    }

    #[test]
    fn test_unsupported_code() {
        let (controller, frames) = controller();
        let mut user = MockUser::new();
        assert_eq!(
            controller.handle_request(99, 0, &mut user),
            Err(RequestError::Unsupported)
        );
        assert!(frames.lock().unwrap().is_empty());
    }

    #[test]
    fn test_init_request() {
        let (controller, frames) = controller();
        let mut user = MockUser::new();
        controller.handle_request(REQ_INIT, 0, &mut user).unwrap();
        assert_eq!(
            *frames.lock().unwrap(),
            vec![vec![opcode::BIOC_ON, opcode::LED_USR]]
        );
    }

    #[test]
    fn test_buttons_request_copies_word() {
        let (controller, _) = controller();
        controller.handle_packet(Packet::new(opcode::BIOC_EVENT, 0xF0, 0xF0));

        let mut user = MockUser::new();
        controller
            .handle_request(REQ_BUTTONS, 0, &mut user)
            .unwrap();
        assert_eq!(user.written, vec![0xFF]);
    }

    #[test]
    fn test_buttons_request_copy_failure() {
        let (controller, _) = controller();
        let mut user = MockUser::new();
        user.fail = true;
        assert_eq!(
            controller.handle_request(REQ_BUTTONS, 0, &mut user),
            Err(RequestError::Copy)
        );
    }

    #[test]
    fn test_set_led_request() {
        let (controller, frames) = controller();
        let mut user = MockUser::new();
        controller
            .handle_request(REQ_SET_LED, 0x000F_0000, &mut user)
            .unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0][0], opcode::LED_SET);
        assert_eq!(frames[0][1], 0x0F);
    }

    #[test]
    fn test_legacy_requests_are_noops() {
        let (controller, frames) = controller();
        let mut user = MockUser::new();
        for code in [REQ_LED_ACK, REQ_LED_REQUEST, REQ_READ_LED] {
            controller.handle_request(code, 0, &mut user).unwrap();
        }
        assert!(frames.lock().unwrap().is_empty());
        assert!(user.written.is_empty());
    }
}

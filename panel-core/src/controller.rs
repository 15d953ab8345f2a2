//! Shared controller state and inbound packet routing.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use panel_proto::{opcode, Buttons, LedCommand, LedDescriptor, Packet};
use portable_atomic::{AtomicU8, Ordering};

use crate::handshake::{self, HandshakeSend, ResetState};
use crate::transmit::{TransmitError, TransmitSink};

/// State that the receive and request paths both reach through the lock.
///
/// The handshake reads the LED cache that the request path writes, so the
/// three of them live under one mutex; the transmit sink sits alongside
/// because every mutation of this group is immediately followed by a send.
struct Inner<T> {
    reset: ResetState,
    led_cache: LedCommand,
    sink: T,
}

/// The panel driver core: canonical button word, LED cache, reset
/// handshake, and the transmit path that serves all three.
///
/// One instance exists per attached panel, owned by the surrounding driver.
/// All methods take `&self`; the serial receive callback and the request
/// path may run concurrently against the same instance. `R` selects the
/// locking discipline for the deployment (a critical-section mutex on a
/// bare-metal target, a noop mutex in single-threaded tests).
pub struct PanelController<R: RawMutex, T: TransmitSink> {
    buttons: AtomicU8,
    inner: Mutex<R, RefCell<Inner<T>>>,
}

impl<R: RawMutex, T: TransmitSink> PanelController<R, T> {
    /// Create a controller around a transmit sink.
    ///
    /// The button word starts empty and the LED cache starts at
    /// [`LedCommand::BLANK`], which is what a restore replays if the panel
    /// resets before any display request has been made.
    pub fn new(sink: T) -> Self {
        Self {
            buttons: AtomicU8::new(Buttons::NONE.raw()),
            inner: Mutex::new(RefCell::new(Inner {
                reset: ResetState::Idle,
                led_cache: LedCommand::BLANK,
                sink,
            })),
        }
    }

    /// Route one inbound packet.
    ///
    /// Every opcode is fed through the reset handshake; `BIOC_EVENT`
    /// packets additionally update the button word from the low nibbles of
    /// the two data bytes. Unknown opcodes fall through silently so newer
    /// panel firmware cannot break older drivers.
    pub fn handle_packet(&self, packet: Packet) {
        self.inner.lock(|inner| {
            let mut inner = inner.borrow_mut();
            let (next, send) = handshake::step(inner.reset, packet.opcode);
            inner.reset = next;
            if let Some(send) = send {
                // The receive path has no caller to report to. A frame
                // that fails to queue just stalls the handshake until the
                // next RESET restarts it.
                let _ = match send {
                    HandshakeSend::EnableEvents => inner.sink.send(&[opcode::BIOC_ON]),
                    HandshakeSend::LedUserMode => inner.sink.send(&[opcode::LED_USR]),
                    HandshakeSend::RestoreLeds => {
                        let frame = inner.led_cache;
                        inner.sink.send(frame.as_bytes())
                    }
                };
            }
        });

        if packet.opcode == opcode::BIOC_EVENT {
            let decoded = Buttons::decode(packet.data[0] & 0x0F, packet.data[1] & 0x0F);
            self.buttons.store(decoded.raw(), Ordering::Relaxed);
        }
    }

    /// Put the panel into its operating mode: button change reporting on,
    /// display in user mode. Sent as one 2-byte frame at startup.
    pub fn initialize(&self) -> Result<(), TransmitError> {
        self.inner.lock(|inner| {
            inner
                .borrow_mut()
                .sink
                .send(&[opcode::BIOC_ON, opcode::LED_USR])
        })
    }

    /// Snapshot of the most recently reported button state.
    ///
    /// Level semantics: the word reflects the latest `BIOC_EVENT` and any
    /// number of callers may read it without consuming it.
    pub fn buttons(&self) -> Buttons {
        Buttons(self.buttons.load(Ordering::Relaxed))
    }

    /// Encode a display descriptor and send it to the panel.
    ///
    /// The cache is written before the frame is queued: the reset restore
    /// path replays the cache, and it must reflect this request even when
    /// the transport rejects the frame.
    pub fn set_led(&self, descriptor: u32) -> Result<(), TransmitError> {
        let command = LedCommand::encode(LedDescriptor(descriptor));
        self.inner.lock(|inner| {
            let mut inner = inner.borrow_mut();
            inner.led_cache = command;
            inner.sink.send(command.as_bytes())
        })
    }

    /// Current handshake state, for diagnostics.
    pub fn reset_state(&self) -> ResetState {
        self.inner.lock(|inner| inner.borrow().reset)
    }
}

//! Driver core for the serial button/LED panel.
//!
//! This crate holds everything between the serial transport and the
//! surrounding driver glue: routing of inbound 3-byte packets, the canonical
//! button word, the reset handshake that re-arms the panel and restores its
//! display after a self-reset, and the ioctl-style request surface.
//!
//! # Overview
//!
//! - [`transmit`]: the fire-and-forget transmit seam ([`TransmitSink`])
//! - [`handshake`]: the reset handshake state machine ([`ResetState`])
//! - [`controller`]: shared state and packet routing ([`PanelController`])
//! - [`request`]: request codes and dispatch ([`Request`], [`UserAccess`])
//!
//! # Call paths
//!
//! Two independent paths run into the controller: the serial receive
//! callback ([`PanelController::handle_packet`]) and the synchronous
//! request path ([`PanelController::handle_request`] and the typed methods
//! behind it). The controller is therefore built around interior
//! mutability: a `RawMutex`-generic blocking mutex over the handshake
//! state, the LED cache and the transmit sink, plus an atomic snapshot of
//! the button word that the request path can read without taking the lock.
//!
//! Nothing here ever waits for the panel to answer. Every send queues bytes
//! with the transport and returns; acknowledgements arrive later as
//! ordinary inbound packets and drive the handshake forward.
//!
//! # No-std Support
//!
//! `#![no_std]` by default, no heap allocations. The **`std`** feature
//! enables standard library support for host testing and **`defmt`**
//! enables defmt formatting for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod controller;
pub mod handshake;
pub mod request;
pub mod transmit;

// Re-export main types at crate root
pub use controller::PanelController;
pub use handshake::{HandshakeSend, ResetState};
pub use request::{CopyError, Request, RequestError, UserAccess};
pub use transmit::{TransmitError, TransmitSink};

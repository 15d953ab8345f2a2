//! Wire protocol for the serial button/LED panel.
//!
//! The panel is a small peripheral hanging off a serial line: four face
//! buttons (Start/A/B/C), four direction buttons, and a 4-digit 7-segment
//! display. Inbound traffic arrives as fixed 3-byte packets; outbound
//! commands are short opcode-prefixed frames.
//!
//! # Overview
//!
//! - [`opcode`]: command and response opcode bytes
//! - [`packet`]: the 3-byte inbound packet ([`Packet`])
//! - [`buttons`]: canonical button word and event decoding ([`Buttons`])
//! - [`led`]: display descriptor and command encoding ([`LedDescriptor`],
//!   [`LedCommand`])
//!
//! # Example
//!
//! ```
//! use panel_proto::{Buttons, LedCommand, LedDescriptor};
//!
//! // Button event: face nibble is active-low, so 0b1101 means A pressed.
//! let buttons = Buttons::decode(0b1101, 0b1111);
//! assert!(buttons.is_pressed(Buttons::A));
//! assert!(!buttons.is_pressed(Buttons::START));
//!
//! // Show "0123" with all four digits enabled.
//! let command = LedCommand::encode(LedDescriptor(0x000F_0123));
//! assert_eq!(command.as_bytes()[1], 0x0F);
//! ```
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.
//! The **`std`** feature enables standard library support for host
//! testing and **`defmt`** enables defmt formatting for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod buttons;
pub mod led;
pub mod opcode;
pub mod packet;

// Re-export main types at crate root
pub use buttons::Buttons;
pub use led::{LedCommand, LedDescriptor, SEGMENTS, SEG_DP};
pub use packet::{Packet, PACKET_LEN};

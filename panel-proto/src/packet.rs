//! The fixed-size inbound packet.

/// Length of every inbound packet in bytes.
pub const PACKET_LEN: usize = 3;

/// One inbound packet: an opcode and two data bytes.
///
/// Packets arrive atomically from the serial layer and are never retained
/// beyond a single dispatch; the type is `Copy` and carries no framing.
/// The meaning of the data bytes depends on the opcode — for
/// [`BIOC_EVENT`](crate::opcode::BIOC_EVENT) they hold the face-button and
/// direction nibbles, for everything else they are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    pub opcode: u8,
    pub data: [u8; 2],
}

impl Packet {
    /// Build a packet from its three raw bytes.
    #[inline]
    #[must_use]
    pub const fn new(opcode: u8, data1: u8, data2: u8) -> Self {
        Self {
            opcode,
            data: [data1, data2],
        }
    }

    /// Build a packet from an exactly-sized byte array.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: &[u8; PACKET_LEN]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Build a packet from a slice, if it has exactly [`PACKET_LEN`] bytes.
    #[inline]
    #[must_use]
    pub fn try_from_slice(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [opcode, data1, data2] => Some(Self::new(*opcode, *data1, *data2)),
            _ => None,
        }
    }
}

//! Display descriptor and LED command encoding.

use crate::opcode;

/// 7-segment patterns for the hex digits 0-9, A-F, in the panel's wire
/// format. Bit 4 is left clear in every entry; it is the decimal point
/// ([`SEG_DP`]) and is ORed in separately.
pub const SEGMENTS: [u8; 16] = [
    0xE7, 0x06, 0xCB, 0x8F, 0x2E, 0xAD, 0xED, 0x86, // 0-7
    0xEF, 0xAF, 0xEE, 0x6D, 0xE1, 0x4F, 0xE9, 0xE8, // 8-F
];

/// Decimal point bit within a segment byte.
pub const SEG_DP: u8 = 0x10;

/// Packed display descriptor, as handed in by the external request path.
///
/// Field layout:
///
/// | bits  | meaning                                        |
/// |-------|------------------------------------------------|
/// | 0-15  | four hex digits, one nibble each, digit 0 low  |
/// | 16-19 | digit enable mask, one bit per digit           |
/// | 20-23 | reserved, ignored                              |
/// | 24-27 | decimal point mask, one bit per digit          |
///
/// Every u32 is a valid descriptor.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedDescriptor(pub u32);

impl LedDescriptor {
    /// Number of digits on the display.
    pub const DIGITS: usize = 4;

    /// Hex value of digit `index` (0 = rightmost nibble).
    #[inline]
    #[must_use]
    pub const fn digit(self, index: usize) -> u8 {
        ((self.0 >> (index * 4)) & 0xF) as u8
    }

    /// The 4-bit digit enable mask.
    #[inline]
    #[must_use]
    pub const fn enabled_mask(self) -> u8 {
        ((self.0 >> 16) & 0xF) as u8
    }

    /// Whether digit `index` is enabled.
    #[inline]
    #[must_use]
    pub const fn digit_enabled(self, index: usize) -> bool {
        (self.enabled_mask() >> index) & 1 != 0
    }

    /// The 4-bit decimal point mask.
    #[inline]
    #[must_use]
    pub const fn decimal_mask(self) -> u8 {
        ((self.0 >> 24) & 0xF) as u8
    }

    /// Whether the decimal point of digit `index` is on.
    #[inline]
    #[must_use]
    pub const fn decimal_on(self, index: usize) -> bool {
        (self.decimal_mask() >> index) & 1 != 0
    }
}

/// A complete 6-byte display command frame:
/// `[LED_SET, enable-mask, seg0, seg1, seg2, seg3]`.
///
/// Frames are encoded once and replayed verbatim by the reset restore path,
/// so the type is a plain `Copy` byte buffer with no further structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedCommand([u8; 6]);

impl LedCommand {
    /// Length of the frame in bytes.
    pub const LEN: usize = 6;

    /// All digits disabled, nothing lit. The state a freshly reset panel
    /// is restored to before any display request has been made.
    pub const BLANK: Self = Self([opcode::LED_SET, 0x00, 0, 0, 0, 0]);

    /// Encode a descriptor into a display command frame.
    ///
    /// Per digit: the hex nibble is mapped through [`SEGMENTS`], forced to
    /// zero when the digit's enable bit is clear, and gets [`SEG_DP`] ORed
    /// in when its decimal bit is set. A decimal point on a disabled digit
    /// therefore shows alone. The transmitted enable mask is the
    /// descriptor's own enable field, never a constant.
    #[must_use]
    pub fn encode(descriptor: LedDescriptor) -> Self {
        let mut frame = [0u8; Self::LEN];
        frame[0] = opcode::LED_SET;
        frame[1] = descriptor.enabled_mask();
        for index in 0..LedDescriptor::DIGITS {
            let mut segments = if descriptor.digit_enabled(index) {
                SEGMENTS[descriptor.digit(index) as usize]
            } else {
                0
            };
            if descriptor.decimal_on(index) {
                segments |= SEG_DP;
            }
            frame[2 + index] = segments;
        }
        Self(frame)
    }

    /// The raw frame bytes, ready for transmit.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_table_total() {
        // Every hex nibble maps to its table entry, regardless of which
        // digit position carries it.
        for nibble in 0..16u32 {
            for index in 0..4 {
                let descriptor = LedDescriptor((nibble << (index * 4)) | (1 << (16 + index)));
                let command = LedCommand::encode(descriptor);
                assert_eq!(
                    command.as_bytes()[2 + index as usize],
                    SEGMENTS[nibble as usize],
                    "nibble {nibble:#x} at digit {index}"
                );
            }
        }
    }

    #[test]
    fn test_segment_table_has_dp_bit_free() {
        for pattern in SEGMENTS {
            assert_eq!(pattern & SEG_DP, 0);
        }
    }

    #[test]
    fn test_disabled_digit_is_blanked() {
        // Digits 0 and 2 enabled, 1 and 3 not; the disabled positions must
        // come out as exactly zero even though their nibbles are nonzero.
        let command = LedCommand::encode(LedDescriptor(0x0005_8888));
        assert_eq!(command.as_bytes()[1], 0b0101);
        assert_eq!(command.as_bytes()[2], SEGMENTS[8]);
        assert_eq!(command.as_bytes()[3], 0);
        assert_eq!(command.as_bytes()[4], SEGMENTS[8]);
        assert_eq!(command.as_bytes()[5], 0);
    }

    #[test]
    fn test_decimal_adds_dp_to_its_digit_only() {
        // All digits show 0, decimal on digit 1 only.
        let with_dp = LedCommand::encode(LedDescriptor(0x020F_0000));
        let without = LedCommand::encode(LedDescriptor(0x000F_0000));
        assert_eq!(with_dp.as_bytes()[3], SEGMENTS[0] | SEG_DP);
        assert_eq!(with_dp.as_bytes()[3], without.as_bytes()[3] + SEG_DP);
        for index in [2, 4, 5] {
            assert_eq!(with_dp.as_bytes()[index], without.as_bytes()[index]);
        }
    }

    #[test]
    fn test_decimal_alone_on_disabled_digit() {
        // No digits enabled, decimal on digit 3: byte is exactly SEG_DP.
        let command = LedCommand::encode(LedDescriptor(0x0800_0000));
        assert_eq!(command.as_bytes()[1], 0);
        assert_eq!(command.as_bytes()[5], SEG_DP);
        assert_eq!(&command.as_bytes()[2..5], &[0, 0, 0]);
    }

    #[test]
    fn test_enable_mask_comes_from_descriptor() {
        for mask in 0..16u32 {
            let command = LedCommand::encode(LedDescriptor(mask << 16));
            assert_eq!(command.as_bytes()[1], mask as u8);
        }
    }

    #[test]
    fn test_reserved_bits_ignored() {
        let base = LedCommand::encode(LedDescriptor(0x010F_1234));
        let noisy = LedCommand::encode(LedDescriptor(0x01FF_1234));
        assert_eq!(base, noisy);
    }

    #[test]
    fn test_frame_shape() {
        let command = LedCommand::encode(LedDescriptor(0x000F_0123));
        assert_eq!(
            command.as_bytes(),
            &[
                opcode::LED_SET,
                0x0F,
                SEGMENTS[3],
                SEGMENTS[2],
                SEGMENTS[1],
                SEGMENTS[0],
            ]
        );
    }

    #[test]
    fn test_blank_is_encode_of_zero() {
        assert_eq!(LedCommand::encode(LedDescriptor(0)), LedCommand::BLANK);
    }
}

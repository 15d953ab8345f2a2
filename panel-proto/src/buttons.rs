//! Canonical button word and event decoding.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Button state represented as a bitfield.
///
/// The low nibble holds the face buttons (Start/A/B/C), the high nibble the
/// direction buttons (Up/Down/Left/Right). A set bit means pressed. The word
/// is level-triggered: it always reflects the most recent button event and
/// reading it does not consume anything.
///
/// # Example
///
/// ```
/// use panel_proto::Buttons;
///
/// let buttons = Buttons::A | Buttons::UP;
/// assert!(buttons.contains(Buttons::A));
/// assert!(buttons.contains(Buttons::UP));
/// assert!(!buttons.contains(Buttons::START));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u8);

impl Buttons {
    // Button constants as Buttons type for type safety
    pub const START: Self = Self(1 << 0);
    pub const A: Self = Self(1 << 1);
    pub const B: Self = Self(1 << 2);
    pub const C: Self = Self(1 << 3);
    pub const UP: Self = Self(1 << 4);
    pub const DOWN: Self = Self(1 << 5);
    pub const LEFT: Self = Self(1 << 6);
    pub const RIGHT: Self = Self(1 << 7);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Every button pressed.
    pub const ALL: Self = Self(0xFF);

    /// Decode a button event from the two raw packet nibbles.
    ///
    /// Both nibbles arrive active-low (a zero bit means pressed) and the
    /// Down/Left lines reach the connector crossed, so decoding is the
    /// composition of two corrections:
    ///
    /// 1. invert each nibble ([`invert_active_low`]);
    /// 2. swap bits 1 and 2 of the inverted direction nibble when they
    ///    differ ([`correct_down_left_crossover`]).
    ///
    /// The corrected direction nibble lands in the high nibble of the word,
    /// the face nibble in the low nibble.
    #[must_use]
    pub fn decode(face_nibble: u8, dir_nibble: u8) -> Self {
        let face = invert_active_low(face_nibble);
        let dirs = correct_down_left_crossover(invert_active_low(dir_nibble));
        Self((dirs << 4) | face)
    }

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Check if the given button is pressed (alias for contains).
    #[inline]
    #[must_use]
    pub const fn is_pressed(self, button: Buttons) -> bool {
        self.contains(button)
    }

    /// Get the raw u8 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Invert an active-low nibble into pressed-is-one convention.
///
/// The panel drives its button lines low when pressed, so the raw nibble is
/// the complement of what the rest of the system wants.
#[inline]
#[must_use]
pub const fn invert_active_low(nibble: u8) -> u8 {
    !nibble & 0x0F
}

/// Undo the Down/Left wiring crossover in an inverted direction nibble.
///
/// Bits 1 and 2 of the direction nibble reach the connector swapped
/// relative to their documented positions. Swapping is only observable when
/// the two bits differ, so the correction XORs both bits in exactly that
/// case and is the identity otherwise.
#[inline]
#[must_use]
pub const fn correct_down_left_crossover(dirs: u8) -> u8 {
    if ((dirs >> 1) ^ (dirs >> 2)) & 1 != 0 {
        dirs ^ 0b0110
    } else {
        dirs
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Buttons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Buttons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

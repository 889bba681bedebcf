//! Q16.16 signed fixed-point math.
//!
//! Formats:
//! - Q16.16 positions and velocities: multiply pixel values by 65536
//! - integer-percent scaling for friction: raw * pct / 100
//!
//! Conversion to screen coordinates is an arithmetic shift right by the
//! fraction bits, so negative values round toward negative infinity.

use serde::{Deserialize, Serialize};

/// Number of fractional bits in a [`Fix32`].
pub const FRACTION_BITS: u32 = 16;

/// Signed Q16.16 fixed-point value.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Fix32(i32);

impl Fix32 {
    pub const ZERO: Fix32 = Fix32(0);

    #[inline]
    pub const fn from_int(value: i32) -> Fix32 {
        Fix32(value << FRACTION_BITS)
    }

    /// Build from a ratio, truncating toward zero like integer division.
    /// `from_fraction(1, 2)` is 0.5, `from_fraction(1, 10)` is 0.0999..
    #[inline]
    pub const fn from_fraction(numerator: i32, denominator: i32) -> Fix32 {
        Fix32(((numerator as i64 * (1i64 << FRACTION_BITS)) / denominator as i64) as i32)
    }

    #[inline]
    pub const fn from_raw(raw: i32) -> Fix32 {
        Fix32(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Integer part via arithmetic shift. -0.5 becomes -1, not 0.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> FRACTION_BITS
    }

    /// Scale by an integer percentage, truncating toward zero.
    /// Used for the friction rates (85% grounded, 95% airborne).
    #[inline]
    pub const fn scale_by_percent(self, percent: i32) -> Fix32 {
        Fix32(((self.0 as i64 * percent as i64) / 100) as i32)
    }

    #[inline]
    pub const fn abs(self) -> Fix32 {
        Fix32(self.0.abs())
    }

    #[inline]
    pub fn clamp(self, min: Fix32, max: Fix32) -> Fix32 {
        Fix32(self.0.clamp(min.0, max.0))
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::Add for Fix32 {
    type Output = Fix32;

    #[inline]
    fn add(self, rhs: Fix32) -> Fix32 {
        Fix32(self.0 + rhs.0)
    }
}

impl core::ops::Sub for Fix32 {
    type Output = Fix32;

    #[inline]
    fn sub(self, rhs: Fix32) -> Fix32 {
        Fix32(self.0 - rhs.0)
    }
}

impl core::ops::Neg for Fix32 {
    type Output = Fix32;

    #[inline]
    fn neg(self) -> Fix32 {
        Fix32(-self.0)
    }
}

impl core::ops::AddAssign for Fix32 {
    #[inline]
    fn add_assign(&mut self, rhs: Fix32) {
        self.0 += rhs.0;
    }
}

impl core::ops::SubAssign for Fix32 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fix32) {
        self.0 -= rhs.0;
    }
}

/// A pair of fixed-point components, used for position and velocity.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Vec2 {
    pub x: Fix32,
    pub y: Fix32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 {
        x: Fix32::ZERO,
        y: Fix32::ZERO,
    };

    #[inline]
    pub const fn new(x: Fix32, y: Fix32) -> Vec2 {
        Vec2 { x, y }
    }

    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Vec2 {
        Vec2 {
            x: Fix32::from_int(x),
            y: Fix32::from_int(y),
        }
    }
}

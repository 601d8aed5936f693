use std::fmt;
use std::ops::Mul;

use bitflags::bitflags;

use crate::Float;

bitflags! {
    /// Set of basis vectors for a term in the geometric algebra of 3D
    /// Euclidean space.
    ///
    /// Each of the 8 possible sets identifies one basis blade. The two-axis
    /// blades are oriented cyclically (`xy`, `yz`, `zx`); see
    /// [`Axes::sign_of_orientation`].
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Axes: u8 {
        /// Scalar (no axes)
        const SCALAR = 0;

        /// X axis (0)
        const X = 1 << 0;
        /// Y axis (1)
        const Y = 1 << 1;
        /// Z axis (2)
        const Z = 1 << 2;

        /// XY plane
        const XY = Self::X.bits() | Self::Y.bits();
        /// YZ plane
        const YZ = Self::Y.bits() | Self::Z.bits();
        /// ZX plane
        const ZX = Self::Z.bits() | Self::X.bits();

        /// Pseudoscalar (all axes)
        const XYZ = Self::X.bits() | Self::Y.bits() | Self::Z.bits();
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            Self::NAMES.get(self.bits() as usize).copied().unwrap_or("?"),
        )
    }
}

impl Axes {
    /// Human-friendly name of each basis blade, indexed by bits.
    pub const NAMES: &'static [&'static str] = &["", "x", "y", "xy", "z", "zx", "yz", "xyz"];

    /// Returns the grade of the basis blade, which is the number of basis
    /// vectors used to construct it.
    pub const fn grade(self) -> u8 {
        self.bits().count_ones() as _
    }

    /// Returns the sign relating the blade's stored orientation to
    /// ascending-axis order.
    ///
    /// Bivector blades are named in cyclic order (`xy`, `yz`, `zx`), so `zx`
    /// is the one blade whose axes are listed out of ascending order and its
    /// sign is negative. All other blades are positive.
    pub const fn sign_of_orientation(self) -> Float {
        match self.bits() == Self::ZX.bits() {
            true => -1.0,
            false => 1.0,
        }
    }

    /// Returns the sign of the reverse of the basis blade.
    pub const fn sign_of_reverse(self) -> Float {
        // The number of swaps required to reverse a sequence of length n is
        // n*(n+1)/2. See <https://oeis.org/A000217>. This sequence alternates
        // between pairs of even and odd numbers; if its parity is odd, then
        // negate the coefficient.
        match self.bits().count_ones() % 4 {
            0 | 1 => 1.0,
            2 | 3 => -1.0,
            _ => unreachable!(),
        }
    }
}

/// Returns the sign of the geometric product between two basis blades.
impl Mul for Axes {
    type Output = Float;

    fn mul(self, rhs: Self) -> Self::Output {
        // Count the number of swaps needed to sort the combined product. If the
        // number of swaps is odd, negate the result. Every basis vector squares
        // to +1, so common axes cancel with no further sign change.
        let mut neg = false;
        let mut a = self.bits();
        let mut b = rhs.bits();
        while a != 0 && b != 0 {
            let i = b.trailing_zeros() + 1;
            a >>= i;
            b >>= i;
            neg ^= a.count_ones() & 1 != 0;
        }

        // Swap counting assumes ascending-axis order; correct for the cyclic
        // orientation of each operand and of the resulting blade.
        let sign = self.sign_of_orientation()
            * rhs.sign_of_orientation()
            * (self ^ rhs).sign_of_orientation();

        if neg { -sign } else { sign }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade() {
        assert_eq!(Axes::SCALAR.grade(), 0);
        assert_eq!(Axes::X.grade(), 1);
        assert_eq!(Axes::ZX.grade(), 2);
        assert_eq!(Axes::XYZ.grade(), 3);
    }

    #[test]
    fn test_sign_of_geometric_product() {
        // Basis vectors square to +1.
        assert_eq!(Axes::X * Axes::X, 1.0);
        assert_eq!(Axes::Y * Axes::Y, 1.0);
        assert_eq!(Axes::Z * Axes::Z, 1.0);

        // Orthogonal basis vectors anticommute.
        assert_eq!(Axes::X * Axes::Y, 1.0);
        assert_eq!(Axes::Y * Axes::X, -1.0);
        assert_eq!(Axes::Y * Axes::Z, 1.0);
        assert_eq!(Axes::Z * Axes::Y, -1.0);

        // The zx blade is stored in cyclic order, so e₃e₁ is its positive
        // orientation.
        assert_eq!(Axes::Z * Axes::X, 1.0);
        assert_eq!(Axes::X * Axes::Z, -1.0);

        // Bivectors and the pseudoscalar square to -1.
        assert_eq!(Axes::XY * Axes::XY, -1.0);
        assert_eq!(Axes::YZ * Axes::YZ, -1.0);
        assert_eq!(Axes::ZX * Axes::ZX, -1.0);
        assert_eq!(Axes::XYZ * Axes::XYZ, -1.0);

        // Products of distinct bivectors walk the cycle.
        assert_eq!(Axes::XY * Axes::YZ, -1.0); // = -zx
        assert_eq!(Axes::YZ * Axes::XY, 1.0); // = +zx
        assert_eq!(Axes::YZ * Axes::ZX, -1.0); // = -xy
        assert_eq!(Axes::ZX * Axes::YZ, 1.0); // = +xy
    }

    #[test]
    fn test_sign_of_reverse() {
        assert_eq!(Axes::SCALAR.sign_of_reverse(), 1.0);
        assert_eq!(Axes::X.sign_of_reverse(), 1.0);
        assert_eq!(Axes::XY.sign_of_reverse(), -1.0);
        assert_eq!(Axes::XYZ.sign_of_reverse(), -1.0);
    }
}

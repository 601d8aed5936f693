use std::fmt;
use std::ops::{BitXor, Mul, MulAssign, Neg, Shl, Shr};

use crate::approx_cmp::approx_eq;
use crate::{Axes, EPSILON, Float};

/// Term in the geometric algebra of 3D Euclidean space, consisting of a real
/// coefficient and a bitmask representing the basis blade.
///
/// This struct isn't stored anywhere; it's mostly just constructed temporarily
/// for iteration over the terms of a multivector.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Term {
    /// Coefficient.
    pub coef: Float,
    /// Bitset of basis vectors.
    pub axes: Axes,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coef, f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.axes, f)?;
        Ok(())
    }
}

impl approx::AbsDiffEq for Term {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.axes == other.axes && self.coef.abs_diff_eq(&other.coef, epsilon)
    }
}

/// Negation of a term.
impl Neg for Term {
    type Output = Term;

    fn neg(mut self) -> Self::Output {
        self.coef = -self.coef;
        self
    }
}

/// Geometric product of two terms.
impl Mul for Term {
    type Output = Term;

    fn mul(self, rhs: Self) -> Self::Output {
        let sign = self.axes * rhs.axes;

        Term {
            coef: self.coef * rhs.coef * sign,
            axes: self.axes ^ rhs.axes, // Common axes cancel.
        }
    }
}
impl MulAssign for Term {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Outer product of two terms. Returns `None` when exactly zero.
///
/// This keeps the grade-raising part of the geometric product: the blades
/// must share no axes, so the grades of the operands add.
#[allow(clippy::suspicious_arithmetic_impl)]
impl BitXor for Term {
    type Output = Option<Term>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        (self.axes & rhs.axes).is_empty().then(|| self * rhs)
    }
}

/// Left contraction of two terms. Returns `None` when exactly zero.
///
/// This keeps the part of the geometric product whose grade is the right
/// operand's grade minus the left operand's: the right blade must contain the
/// left one.
impl Shl for Term {
    type Output = Option<Term>;

    fn shl(self, rhs: Self) -> Self::Output {
        rhs.axes.contains(self.axes).then(|| self * rhs)
    }
}

/// Right contraction of two terms. Returns `None` when exactly zero.
///
/// Mirror image of the left contraction: the left blade must contain the
/// right one.
impl Shr for Term {
    type Output = Option<Term>;

    fn shr(self, rhs: Self) -> Self::Output {
        self.axes.contains(rhs.axes).then(|| self * rhs)
    }
}

/// Scaling a term by a number.
impl Mul<Float> for Term {
    type Output = Term;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}
impl MulAssign<Float> for Term {
    fn mul_assign(&mut self, rhs: Float) {
        self.coef *= rhs;
    }
}

impl Term {
    /// Constructs a scalar term.
    pub const fn scalar(x: Float) -> Self {
        Term {
            coef: x,
            axes: Axes::SCALAR,
        }
    }
    /// Constructs a unit term.
    pub const fn unit(axes: Axes) -> Self {
        Term { coef: 1.0, axes }
    }

    /// Returns whether the term is approximately zero.
    pub fn is_zero(self) -> bool {
        approx_eq(&self.coef, &0.0)
    }

    /// Returns the grade of the term, which is the number of basis vectors
    /// used to construct its blade.
    pub const fn grade(self) -> u8 {
        self.axes.grade()
    }

    /// Returns the reverse term, which has the axes reversed (which in
    /// practice just means the sign might be flipped).
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.coef *= self.axes.sign_of_reverse();
        self
    }

    /// Returns the scalar-product part of the geometric product of two terms,
    /// or `None` if it is zero. Only terms with identical blades contribute a
    /// grade-0 component.
    #[must_use]
    pub fn scalar_product(lhs: Self, rhs: Self) -> Option<Self> {
        (lhs.axes == rhs.axes).then(|| lhs * rhs)
    }

    /// Returns the grade-lowering (dot) part of the geometric product of two
    /// terms, or `None` if it is zero.
    ///
    /// For blades of grades _r_ and _s_ this keeps the grade-|_r_−_s_|
    /// component, which survives exactly when one blade contains the other.
    /// Scalar operands are included, unlike the inner-product convention that
    /// discards them.
    #[must_use]
    pub fn dot(lhs: Self, rhs: Self) -> Option<Self> {
        (lhs.axes.contains(rhs.axes) || rhs.axes.contains(lhs.axes)).then(|| lhs * rhs)
    }
}

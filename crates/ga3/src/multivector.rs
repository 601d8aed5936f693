use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use itertools::Itertools;

use crate::approx_cmp::{approx_eq, is_approx_nonzero};
use crate::{Axes, Float, Term};

/// Multivector in the geometric algebra of 3D Euclidean space: a linear
/// combination of the 8 basis blades, with one real coefficient per blade.
///
/// Coefficients are stored in the order `[scalar, x, y, z, xy, yz, zx, xyz]`.
/// The bivector blades use the cyclic orientation, so the reversed
/// orientations `yx`, `zy`, and `xz` are derived accessors rather than stored
/// components.
///
/// Every combination of coefficients is a valid multivector; construction and
/// arithmetic never fail. All operations produce new values — there is no
/// in-place mutation API. Updates go through [`Multivector::with`] and
/// friends.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Multivector {
    /// Coefficients of the terms of the multivector, ordered by
    /// `Multivector::TERM_ORDER`.
    coefficients: [Float; 8],
}

impl Multivector {
    /// Order in which the coefficients of the basis blades are stored.
    pub const TERM_ORDER: [Axes; 8] = [
        Axes::SCALAR,
        Axes::X,
        Axes::Y,
        Axes::Z,
        Axes::XY,
        Axes::YZ,
        Axes::ZX,
        Axes::XYZ,
    ];

    /// Zero element.
    pub const ZERO: Self = Self::scalar(0.0);
    /// Unit scalar.
    pub const ONE: Self = Self::scalar(1.0);

    /// Unit vector along the X axis.
    pub const X: Self = Self::vector(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::vector(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::vector(0.0, 0.0, 1.0);

    /// Unit bivector in the XY plane.
    pub const XY: Self = Self::bivector(1.0, 0.0, 0.0);
    /// Unit bivector in the YZ plane.
    pub const YZ: Self = Self::bivector(0.0, 1.0, 0.0);
    /// Unit bivector in the ZX plane.
    pub const ZX: Self = Self::bivector(0.0, 0.0, 1.0);

    /// Unit bivector in the XY plane with reversed orientation; the negation
    /// of [`Multivector::XY`].
    pub const YX: Self = Self::bivector(-1.0, 0.0, 0.0);
    /// Unit bivector in the YZ plane with reversed orientation; the negation
    /// of [`Multivector::YZ`].
    pub const ZY: Self = Self::bivector(0.0, -1.0, 0.0);
    /// Unit bivector in the ZX plane with reversed orientation; the negation
    /// of [`Multivector::ZX`].
    pub const XZ: Self = Self::bivector(0.0, 0.0, -1.0);

    /// Unit pseudoscalar.
    pub const XYZ: Self = Self::pseudoscalar(1.0);

    /// Constructs a multivector from all 8 coefficients.
    pub const fn new(
        c: Float,
        x: Float,
        y: Float,
        z: Float,
        xy: Float,
        yz: Float,
        zx: Float,
        xyz: Float,
    ) -> Self {
        Self {
            coefficients: [c, x, y, z, xy, yz, zx, xyz],
        }
    }
    /// Constructs a multivector with only a scalar component.
    pub const fn scalar(value: Float) -> Self {
        Self::new(value, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
    /// Constructs a multivector with only vector (grade-1) components.
    pub const fn vector(x: Float, y: Float, z: Float) -> Self {
        Self::new(0.0, x, y, z, 0.0, 0.0, 0.0, 0.0)
    }
    /// Constructs a multivector with only bivector (grade-2) components,
    /// given in cyclic orientation.
    pub const fn bivector(xy: Float, yz: Float, zx: Float) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, xy, yz, zx, 0.0)
    }
    /// Constructs a multivector with only a pseudoscalar component.
    pub const fn pseudoscalar(value: Float) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, value)
    }
    /// Constructs a multivector from a single term.
    pub fn from_term(term: Term) -> Self {
        Self::ZERO.with(term.axes, term.coef)
    }

    /// Returns the index of the coefficient for `axes`.
    const fn index_of(axes: Axes) -> usize {
        match axes.bits() {
            0b000 => 0,
            0b001 => 1,
            0b010 => 2,
            0b100 => 3,
            0b011 => 4,
            0b110 => 5,
            0b101 => 6,
            0b111 => 7,
            _ => unreachable!(), // `Axes` has only 3 bits
        }
    }

    /// Returns the scalar coefficient.
    pub const fn c(&self) -> Float {
        self.coefficients[0]
    }
    /// Returns the `x` coefficient.
    pub const fn x(&self) -> Float {
        self.coefficients[1]
    }
    /// Returns the `y` coefficient.
    pub const fn y(&self) -> Float {
        self.coefficients[2]
    }
    /// Returns the `z` coefficient.
    pub const fn z(&self) -> Float {
        self.coefficients[3]
    }
    /// Returns the `xy` coefficient.
    pub const fn xy(&self) -> Float {
        self.coefficients[4]
    }
    /// Returns the `yz` coefficient.
    pub const fn yz(&self) -> Float {
        self.coefficients[5]
    }
    /// Returns the `zx` coefficient.
    pub const fn zx(&self) -> Float {
        self.coefficients[6]
    }
    /// Returns the `xyz` (pseudoscalar) coefficient.
    pub const fn xyz(&self) -> Float {
        self.coefficients[7]
    }

    /// Returns the `yx` coefficient; always the negation of
    /// [`xy`](Self::xy).
    pub const fn yx(&self) -> Float {
        -self.xy()
    }
    /// Returns the `zy` coefficient; always the negation of
    /// [`yz`](Self::yz).
    pub const fn zy(&self) -> Float {
        -self.yz()
    }
    /// Returns the `xz` coefficient; always the negation of
    /// [`zx`](Self::zx).
    pub const fn xz(&self) -> Float {
        -self.zx()
    }

    /// Returns the multivector with the coefficient for `axes` replaced.
    #[must_use]
    pub fn with(mut self, axes: Axes, coef: Float) -> Self {
        self.coefficients[Self::index_of(axes)] = coef;
        self
    }
    /// Returns the multivector with the `yx` coefficient replaced, which
    /// stores the negated value as `xy`.
    #[must_use]
    pub fn with_yx(self, coef: Float) -> Self {
        self.with(Axes::XY, -coef)
    }
    /// Returns the multivector with the `zy` coefficient replaced, which
    /// stores the negated value as `yz`.
    #[must_use]
    pub fn with_zy(self, coef: Float) -> Self {
        self.with(Axes::YZ, -coef)
    }
    /// Returns the multivector with the `xz` coefficient replaced, which
    /// stores the negated value as `zx`.
    #[must_use]
    pub fn with_xz(self, coef: Float) -> Self {
        self.with(Axes::ZX, -coef)
    }

    /// Returns the multivector consisting of only the grade-`grade`
    /// components, with all others zeroed.
    ///
    /// Any grade outside `0..=3` gives [`Multivector::ZERO`]; projection at
    /// an absent grade is not an error.
    #[must_use]
    pub fn graded(&self, grade: u8) -> Self {
        let mut ret = Self::ZERO;
        for term in self.terms() {
            if term.grade() == grade {
                ret += term;
            }
        }
        ret
    }

    /// Returns an iterator over the terms in the multivector.
    pub fn terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        self.coefficients.iter().enumerate().map(|(i, &coef)| Term {
            coef,
            axes: Self::TERM_ORDER[i],
        })
    }
    /// Returns an iterator over the terms in the multivector that are
    /// approximately nonzero.
    pub fn nonzero_terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        self.terms().filter(|term| is_approx_nonzero(&term.coef))
    }

    /// Returns whether the multivector is approximately zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|x| approx_eq(x, &0.0))
    }

    /// Returns the reverse multivector, which reverses the order of the
    /// basis vectors in each blade; grade-2 and grade-3 components are
    /// negated.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut ret = *self;
        for (i, coef) in ret.coefficients.iter_mut().enumerate() {
            *coef *= Self::TERM_ORDER[i].sign_of_reverse();
        }
        ret
    }
    /// Returns the grade involution of the multivector, which negates the
    /// odd-grade components.
    #[must_use]
    pub fn involute(&self) -> Self {
        let mut ret = *self;
        for (i, coef) in ret.coefficients.iter_mut().enumerate() {
            if Self::TERM_ORDER[i].grade() % 2 == 1 {
                *coef = -*coef;
            }
        }
        ret
    }

    /// Returns the squared norm of the multivector: the sum of the squared
    /// coefficients, which in this algebra equals the scalar part of the
    /// product with its own reverse.
    pub fn mag2(&self) -> Float {
        self.coefficients.iter().map(|&coef| coef * coef).sum()
    }
    /// Returns the norm of the multivector.
    pub fn mag(&self) -> Float {
        self.mag2().sqrt()
    }
}

impl Index<Axes> for Multivector {
    type Output = Float;

    fn index(&self, index: Axes) -> &Self::Output {
        &self.coefficients[Self::index_of(index)]
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.is_zero() {
            true => write!(f, "0"),
            false => write!(f, "{}", self.nonzero_terms().join(" + ")),
        }
    }
}

impl approx::AbsDiffEq for Multivector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(&self.coefficients, &other.coefficients)
            .all(|(c1, c2)| approx::AbsDiffEq::abs_diff_eq(c1, c2, epsilon))
    }
}

impl AddAssign<Term> for Multivector {
    fn add_assign(&mut self, rhs: Term) {
        self.coefficients[Self::index_of(rhs.axes)] += rhs.coef;
    }
}
impl AddAssign<Option<Term>> for Multivector {
    fn add_assign(&mut self, rhs: Option<Term>) {
        if let Some(r) = rhs {
            *self += r;
        }
    }
}
impl AddAssign<Multivector> for Multivector {
    fn add_assign(&mut self, rhs: Multivector) {
        for term in rhs.terms() {
            *self += term;
        }
    }
}

impl<T> Add<T> for Multivector
where
    Multivector: AddAssign<T>,
{
    type Output = Multivector;

    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}

impl SubAssign<Term> for Multivector {
    fn sub_assign(&mut self, rhs: Term) {
        self.coefficients[Self::index_of(rhs.axes)] -= rhs.coef;
    }
}
impl SubAssign<Option<Term>> for Multivector {
    fn sub_assign(&mut self, rhs: Option<Term>) {
        if let Some(r) = rhs {
            *self -= r;
        }
    }
}
impl SubAssign<Multivector> for Multivector {
    fn sub_assign(&mut self, rhs: Multivector) {
        for term in rhs.terms() {
            *self -= term;
        }
    }
}

impl<T> Sub<T> for Multivector
where
    Multivector: SubAssign<T>,
{
    type Output = Multivector;

    fn sub(mut self, rhs: T) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for Multivector {
    type Output = Multivector;

    fn neg(mut self) -> Self::Output {
        for coef in &mut self.coefficients {
            *coef = -*coef;
        }
        self
    }
}

/// Scaling a multivector by a number.
impl Mul<Float> for Multivector {
    type Output = Multivector;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}
impl MulAssign<Float> for Multivector {
    fn mul_assign(&mut self, rhs: Float) {
        for coef in &mut self.coefficients {
            *coef *= rhs;
        }
    }
}
/// Scaling a multivector by a number. Scalar multiplication is commutative:
/// multiplying on the left is the same as multiplying on the right.
impl Mul<Multivector> for Float {
    type Output = Multivector;

    fn mul(self, rhs: Multivector) -> Self::Output {
        rhs * self
    }
}

/// Geometric product of two multivectors.
///
/// The product is bilinear, associative, and distributive, but not
/// commutative. Each basis vector squares to +1 and distinct basis vectors
/// anticommute; the pseudoscalar is central and squares to -1.
impl Mul for Multivector {
    type Output = Multivector;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut ret = Multivector::ZERO;
        for l in self.terms() {
            for r in rhs.terms() {
                ret += l * r;
            }
        }
        ret
    }
}
impl MulAssign for Multivector {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

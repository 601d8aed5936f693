//! Products derived from the geometric product by projecting onto grades
//! determined by the grades of the operands.
//!
//! Each product below is defined by taking the geometric product of the
//! grade-_r_ part of the left operand with the grade-_s_ part of the right
//! operand, for every pair (_r_, _s_), and keeping only a grade determined by
//! (_r_, _s_). Because grade projection distributes over terms, each one is
//! computed by accumulating the term pairs that satisfy the equivalent
//! blade-level rule, with no intermediate allocation.

use crate::{Multivector, Term};

impl Multivector {
    /// Returns the [exterior product] (wedge product) of two multivectors:
    /// the grade-(_r_+_s_) part of the geometric product of grade pairs.
    ///
    /// This is the grade-raising part of the geometric product; a term pair
    /// contributes exactly when its blades share no axes.
    ///
    /// [exterior product]: https://en.wikipedia.org/wiki/Exterior_algebra
    #[must_use]
    pub fn wedge(&self, other: &Self) -> Self {
        let mut ret = Self::ZERO;
        for l in self.terms() {
            for r in other.terms() {
                ret += l ^ r;
            }
        }
        ret
    }

    /// Returns the [left contraction] of two multivectors: the
    /// grade-(_s_−_r_) part of the geometric product of grade pairs.
    ///
    /// Pairs where the left grade exceeds the right grade project to zero, so
    /// only term pairs whose right blade contains the left one contribute.
    ///
    /// [left contraction]:
    ///     https://en.wikipedia.org/wiki/Geometric_algebra#Extensions_of_the_inner_and_exterior_products
    #[must_use]
    pub fn left_contraction(&self, other: &Self) -> Self {
        let mut ret = Self::ZERO;
        for l in self.terms() {
            for r in other.terms() {
                ret += l << r;
            }
        }
        ret
    }

    /// Returns the [right contraction] of two multivectors: the
    /// grade-(_r_−_s_) part of the geometric product of grade pairs; the
    /// mirror image of [`left_contraction`](Self::left_contraction).
    ///
    /// [right contraction]:
    ///     https://en.wikipedia.org/wiki/Geometric_algebra#Extensions_of_the_inner_and_exterior_products
    #[must_use]
    pub fn right_contraction(&self, other: &Self) -> Self {
        let mut ret = Self::ZERO;
        for l in self.terms() {
            for r in other.terms() {
                ret += l >> r;
            }
        }
        ret
    }

    /// Returns the scalar product of two multivectors: the grade-0 part of
    /// their geometric product, as a scalar-valued multivector.
    #[must_use]
    pub fn scalar_product(&self, other: &Self) -> Self {
        let mut ret = Self::ZERO;
        for l in self.terms() {
            for r in other.terms() {
                ret += Term::scalar_product(l, r);
            }
        }
        ret
    }

    /// Returns the dot product of two multivectors: the grade-|_r_−_s_| part
    /// of the geometric product of grade pairs.
    ///
    /// This is the grade-lowering counterpart of [`wedge`](Self::wedge),
    /// generalizing both contractions. Pairs with a scalar operand are
    /// included, unlike the inner-product convention that discards them.
    #[must_use]
    pub fn dot(&self, other: &Self) -> Self {
        let mut ret = Self::ZERO;
        for l in self.terms() {
            for r in other.terms() {
                ret += Term::dot(l, r);
            }
        }
        ret
    }

    /// Returns the commutator product `½(ab − ba)` of two multivectors,
    /// which is antisymmetric in its operands.
    #[must_use]
    pub fn commutator(&self, other: &Self) -> Self {
        let (a, b) = (*self, *other);
        (a * b - b * a) * 0.5
    }

    /// Returns the symmetric inner product `½(v₁v₂ + v₂v₁)` of the grade-1
    /// (vector) parts of two multivectors; all other grades of the operands
    /// are ignored.
    ///
    /// For vectors this recovers the ordinary dot product, as a
    /// scalar-valued multivector.
    #[must_use]
    pub fn vector_inner_product(&self, other: &Self) -> Self {
        let v1 = self.graded(1);
        let v2 = other.graded(1);
        (v1 * v2 + v2 * v1) * 0.5
    }

    /// Returns the antisymmetric exterior product `½(v₁v₂ − v₂v₁)` of the
    /// grade-1 (vector) parts of two multivectors; all other grades of the
    /// operands are ignored.
    ///
    /// For vectors this recovers the wedge product, as a bivector-valued
    /// multivector.
    #[must_use]
    pub fn vector_exterior_product(&self, other: &Self) -> Self {
        let v1 = self.graded(1);
        let v2 = other.graded(1);
        (v1 * v2 - v2 * v1) * 0.5
    }
}

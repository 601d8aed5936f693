//! Geometric algebra primitives for 3D Euclidean space.
//!
//! This crate implements arithmetic in Cl(3,0), the Clifford algebra of ℝ³
//! with the positive-definite metric: an 8-dimensional graded vector space
//! spanned by one scalar, three vector, three bivector, and one trivector
//! basis blade, together with the geometric product and the products derived
//! from it by grade projection.
//!
//! Every operation is a pure function of its operands; [`Multivector`] is a
//! plain `Copy` value and nothing is ever mutated in place.

pub use approx;

/// Floating-point type used for coefficients.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

pub mod approx_cmp;
mod axes;
mod multivector;
mod products;
mod term;

pub use approx_cmp::*;
pub use axes::Axes;
pub use multivector::Multivector;
pub use term::Term;

#[cfg(test)]
mod tests;

use crate::*;

/// Mixed-grade multivectors with no particular structure, for exercising
/// algebraic laws.
fn samples() -> [Multivector; 4] {
    [
        Multivector::new(1.0, 2.0, -3.0, 0.5, 4.0, -1.5, 2.5, -0.5),
        Multivector::new(-2.0, 0.0, 1.0, 3.0, -0.5, 2.0, 0.0, 1.5),
        Multivector::new(0.0, -1.0, 4.0, -2.0, 1.0, 0.5, -3.0, 2.0),
        Multivector::vector(3.0, -5.0, 7.0),
    ]
}

#[test]
fn test_basis_squares() {
    assert_eq!(Multivector::X * Multivector::X, Multivector::ONE);
    assert_eq!(Multivector::Y * Multivector::Y, Multivector::ONE);
    assert_eq!(Multivector::Z * Multivector::Z, Multivector::ONE);

    assert_eq!(Multivector::XY * Multivector::XY, -Multivector::ONE);
    assert_eq!(Multivector::YZ * Multivector::YZ, -Multivector::ONE);
    assert_eq!(Multivector::ZX * Multivector::ZX, -Multivector::ONE);

    assert_eq!(Multivector::XYZ * Multivector::XYZ, -Multivector::ONE);
}

#[test]
fn test_vector_anticommutation() {
    assert_eq!(Multivector::X * Multivector::Y, Multivector::XY);
    assert_eq!(Multivector::Y * Multivector::X, Multivector::YX);
    assert_eq!(Multivector::Y * Multivector::Z, Multivector::YZ);
    assert_eq!(Multivector::Z * Multivector::Y, Multivector::ZY);
    assert_eq!(Multivector::Z * Multivector::X, Multivector::ZX);
    assert_eq!(Multivector::X * Multivector::Z, Multivector::XZ);
}

#[test]
fn test_vector_times_bivector() {
    // e₁e₁₂ = e₂ and e₁₂e₁ = -e₂; exact signed results, not just grades.
    assert_eq!(Multivector::X * Multivector::XY, Multivector::Y);
    assert_eq!(Multivector::XY * Multivector::X, -Multivector::Y);
    assert_eq!(Multivector::X * Multivector::YZ, Multivector::XYZ);
    assert_eq!(Multivector::X * Multivector::XYZ, Multivector::YZ);
}

#[test]
fn test_pseudoscalar_is_central() {
    for a in samples() {
        assert_approx_eq!(a * Multivector::XYZ, Multivector::XYZ * a);
    }
}

#[test]
fn test_multiplicative_identity() {
    for a in samples() {
        assert_eq!(Multivector::ONE * a, a);
        assert_eq!(a * Multivector::ONE, a);
    }
}

#[test]
fn test_associativity() {
    let [a, b, c, d] = samples();
    for (a, b, c) in [(a, b, c), (b, c, d), (a, c, d), (d, b, a)] {
        assert_approx_eq!((a * b) * c, a * (b * c));
    }
}

#[test]
fn test_distributivity() {
    let [a, b, c, _] = samples();
    assert_approx_eq!(a * (b + c), a * b + a * c);
    assert_approx_eq!((b + c) * a, b * a + c * a);
}

#[test]
fn test_grade_decomposition() {
    for a in samples() {
        let parts = a.graded(0) + a.graded(1) + a.graded(2) + a.graded(3);
        assert_eq!(parts, a);
        for grade in 0..=3 {
            assert_eq!(a.graded(grade).graded(grade), a.graded(grade));
        }
        assert_eq!(a.graded(4), Multivector::ZERO);
    }
}

#[test]
fn test_scalar_multiplication_commutes() {
    for a in samples() {
        for k in [-2.0, 0.5, 3.0] {
            assert_eq!(k * a, a * k);
            assert_eq!(a * k, a.graded(0) * k + a.graded(1) * k + a.graded(2) * k + a.graded(3) * k);
        }
    }
}

#[test]
fn test_commutator_antisymmetry() {
    let [a, b, c, d] = samples();
    for (a, b) in [(a, b), (b, c), (c, d), (d, a)] {
        assert_approx_eq!(a.commutator(&b), -b.commutator(&a));
    }
}

#[test]
fn test_contraction_examples() {
    let two = Multivector::scalar(2.0);

    assert_eq!(two.left_contraction(&Multivector::XY), Multivector::XY * 2.0);
    assert_eq!(Multivector::X.left_contraction(&Multivector::XY), Multivector::Y);
    assert_eq!(Multivector::XY.left_contraction(&Multivector::X), Multivector::ZERO);

    assert_eq!(Multivector::X.right_contraction(&two), Multivector::X * 2.0);
    assert_eq!(Multivector::XY.right_contraction(&Multivector::Y), Multivector::X);
    assert_eq!(Multivector::X.right_contraction(&Multivector::XY), Multivector::ZERO);
}

#[test]
fn test_dot_product_examples() {
    assert_eq!(Multivector::X.dot(&Multivector::XY), Multivector::Y);
    assert_eq!(Multivector::XY.dot(&Multivector::X), -Multivector::Y);
    assert_eq!(Multivector::X.dot(&Multivector::Y), Multivector::ZERO);

    // Scalar operands contribute, unlike in the textbook inner product.
    let a = Multivector::scalar(2.0) + Multivector::X;
    assert_eq!(a.dot(&Multivector::Y), Multivector::Y * 2.0);
}

/// The derived products equal their definitions as double sums over grade
/// pairs, with each partial geometric product re-projected onto a grade
/// determined by the operand grades.
#[test]
fn test_derived_products_match_grade_projection() {
    let [a, b, c, d] = samples();
    for (a, b) in [(a, b), (b, c), (c, d), (d, a)] {
        let mut wedge = Multivector::ZERO;
        let mut left = Multivector::ZERO;
        let mut right = Multivector::ZERO;
        let mut scalar = Multivector::ZERO;
        let mut dot = Multivector::ZERO;
        for r in 0..=3_u8 {
            for s in 0..=3_u8 {
                let part = a.graded(r) * b.graded(s);
                wedge += part.graded(r + s);
                if let Some(grade) = s.checked_sub(r) {
                    left += part.graded(grade);
                }
                if let Some(grade) = r.checked_sub(s) {
                    right += part.graded(grade);
                }
                scalar += part.graded(0);
                dot += part.graded(r.abs_diff(s));
            }
        }
        assert_approx_eq!(a.wedge(&b), wedge);
        assert_approx_eq!(a.left_contraction(&b), left);
        assert_approx_eq!(a.right_contraction(&b), right);
        assert_approx_eq!(a.scalar_product(&b), scalar);
        assert_approx_eq!(a.dot(&b), dot);

        assert_approx_eq!(a.scalar_product(&b), (a * b).graded(0));
    }
}

#[test]
fn test_vector_products() {
    // Orthogonal unit vectors: zero inner product, unit bivector wedge.
    assert_eq!(
        Multivector::X.vector_inner_product(&Multivector::Y),
        Multivector::ZERO,
    );
    assert_eq!(
        Multivector::X.vector_exterior_product(&Multivector::Y),
        Multivector::XY,
    );
    assert_eq!(
        Multivector::X.vector_inner_product(&Multivector::X),
        Multivector::ONE,
    );

    let v1 = Multivector::vector(1.0, 2.0, 3.0);
    let v2 = Multivector::vector(4.0, 5.0, 6.0);
    assert_approx_eq!(v1.vector_inner_product(&v2), Multivector::scalar(32.0));
    assert_approx_eq!(
        v1.vector_exterior_product(&v2),
        Multivector::bivector(-3.0, -3.0, 6.0),
    );
    assert_approx_eq!(v1.vector_exterior_product(&v2), v1.wedge(&v2));

    // Non-vector parts of the operands are ignored.
    let junk = Multivector::new(7.0, 0.0, 0.0, 0.0, 1.0, -2.0, 3.0, 4.0);
    assert_approx_eq!(
        (v1 + junk).vector_inner_product(&(v2 + junk)),
        v1.vector_inner_product(&v2),
    );
    assert_approx_eq!(
        (v1 + junk).vector_exterior_product(&(v2 + junk)),
        v1.vector_exterior_product(&v2),
    );
}

#[test]
fn test_reverse_and_involution() {
    let m = Multivector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    assert_eq!(
        m.reverse(),
        Multivector::new(1.0, 2.0, 3.0, 4.0, -5.0, -6.0, -7.0, -8.0),
    );
    assert_eq!(
        m.involute(),
        Multivector::new(1.0, -2.0, -3.0, -4.0, 5.0, 6.0, 7.0, -8.0),
    );
    assert_eq!(m.reverse().reverse(), m);

    // Reversal is an antiautomorphism.
    let [a, b, ..] = samples();
    assert_approx_eq!((a * b).reverse(), b.reverse() * a.reverse());
}

#[test]
fn test_mag() {
    let m = Multivector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    assert_approx_eq!(m.mag2(), 204.0);
    assert_approx_eq!(m.mag(), 204.0_f64.sqrt());
    assert_approx_eq!(m.mag2(), (m * m.reverse()).c());
}

//! Closed-form 2x2 eigendecomposition.
//!
//! At 2x2 the characteristic polynomial is a quadratic, so the
//! eigendecomposition the framed-phase decomposer needs is available in
//! closed form; no general-purpose eigensolver is involved.
//!
//! Ordering convention (deterministic, call-to-call stable): the first
//! eigenvalue takes the principal square-root branch of the discriminant,
//! and a matrix with negligible off-diagonal is treated as already diagonal
//! with the standard basis as eigenvectors. Which eigenpair comes first is
//! otherwise arbitrary — an inherent property of eigendecomposition that
//! downstream code must not rely on.

use num_complex::Complex64;

use crate::unitary::Unitary2x2;

/// Off-diagonal magnitude below which a matrix counts as diagonal.
const DIAG_EPSILON: f64 = 1e-10;

/// Eigenvalues and eigenvectors of a 2x2 unitary.
///
/// Returns `(eigenvalues, eigenvectors)` with the i-th column of
/// `eigenvectors` the unit eigenvector for `eigenvalues[i]`, so
/// `mat · v_i = λ_i · v_i`. For a unitary (hence normal) input the
/// eigenvector matrix is itself unitary.
#[allow(clippy::many_single_char_names)]
pub fn eig2(mat: &Unitary2x2) -> ([Complex64; 2], Unitary2x2) {
    let [a, b, c, d] = mat.data;

    if b.norm() <= DIAG_EPSILON && c.norm() <= DIAG_EPSILON {
        return ([a, d], Unitary2x2::identity());
    }

    let trace = a + d;
    let det = a * d - b * c;
    let disc = (trace * trace - det * 4.0).sqrt();
    let values = [(trace + disc) / 2.0, (trace - disc) / 2.0];

    // (b, λ−a) and (λ−d, c) both solve the eigen-equation; pick the one
    // anchored on the larger off-diagonal entry.
    let column = |value: Complex64| -> (Complex64, Complex64) {
        let (top, bottom) = if b.norm() >= c.norm() {
            (b, value - a)
        } else {
            (value - d, c)
        };
        let norm = (top.norm_sqr() + bottom.norm_sqr()).sqrt();
        (top / norm, bottom / norm)
    };

    let v0 = column(values[0]);
    let v1 = column(values[1]);
    (values, Unitary2x2::new(v0.0, v1.0, v0.1, v1.1))
}

//! Univariate polynomial algebra over the scalar field.
//!
//! A polynomial is represented as `[a_0, a_1, ..., a_d]` meaning
//! `a_0 + a_1 X + ... + a_d X^d`. Degree is `len - 1` after trimming trailing
//! zeros; the zero polynomial is represented as an empty coefficient vector.

use ark_ff::{Field, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::curve::Scalar;
use crate::error::{BingoError, Result};

/// A dense univariate polynomial with coefficients in ascending degree order.
#[derive(Debug, Clone, PartialEq, Eq, Default, CanonicalSerialize, CanonicalDeserialize)]
pub struct UniPoly {
    coeffs: Vec<Scalar>,
}

impl UniPoly {
    /// Build a polynomial from coefficients, trimming trailing zeros.
    pub fn from_coeffs(mut coeffs: Vec<Scalar>) -> Self {
        while matches!(coeffs.last(), Some(c) if c.is_zero()) {
            coeffs.pop();
        }
        UniPoly { coeffs }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        UniPoly { coeffs: Vec::new() }
    }

    /// Coefficients in ascending degree order (`a_0` first).
    pub fn coeffs(&self) -> &[Scalar] {
        &self.coeffs
    }

    /// `len() - 1`, or `0` for the zero polynomial (matching the convention
    /// that an empty/zero polynomial still reports degree 0 for loop bounds).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Horner's method: `((...((a_d*x + a_{d-1})*x + ...)*x + a_0))`.
    pub fn eval(&self, x: Scalar) -> Scalar {
        let mut acc = Scalar::zero();
        for coeff in self.coeffs.iter().rev() {
            acc = acc * x + coeff;
        }
        acc
    }

    /// Returns `self` with the constant term reduced by `y` (`f[0] -= y`),
    /// used to form the KZG numerator `phi(X) - y`.
    pub fn sub_constant(&self, y: Scalar) -> UniPoly {
        let mut coeffs = self.coeffs.clone();
        if coeffs.is_empty() {
            coeffs.push(-y);
        } else {
            coeffs[0] -= y;
        }
        UniPoly::from_coeffs(coeffs)
    }

    pub fn add(&self, other: &UniPoly) -> UniPoly {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut out = vec![Scalar::zero(); len];
        for (i, c) in self.coeffs.iter().enumerate() {
            out[i] += c;
        }
        for (i, c) in other.coeffs.iter().enumerate() {
            out[i] += c;
        }
        UniPoly::from_coeffs(out)
    }

    pub fn sub(&self, other: &UniPoly) -> UniPoly {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut out = vec![Scalar::zero(); len];
        for (i, c) in self.coeffs.iter().enumerate() {
            out[i] += c;
        }
        for (i, c) in other.coeffs.iter().enumerate() {
            out[i] -= c;
        }
        UniPoly::from_coeffs(out)
    }

    pub fn scalar_mul(&self, s: Scalar) -> UniPoly {
        UniPoly::from_coeffs(self.coeffs.iter().map(|c| *c * s).collect())
    }

    /// Schoolbook polynomial division with remainder: `self = q * divisor + r`.
    pub fn div_rem(&self, divisor: &UniPoly) -> Result<(UniPoly, UniPoly)> {
        if divisor.is_zero() {
            return Err(BingoError::InconsistentDegrees {
                expected: 1,
                got: 0,
            });
        }
        let mut remainder = self.coeffs.clone();
        let divisor_deg = divisor.degree();
        let lead_inv = divisor
            .coeffs
            .last()
            .copied()
            .unwrap()
            .inverse()
            .expect("divisor leading coefficient is non-zero by construction");

        if remainder.len() < divisor.coeffs.len() {
            return Ok((UniPoly::zero(), UniPoly::from_coeffs(remainder)));
        }

        let quotient_len = remainder.len() - divisor.coeffs.len() + 1;
        let mut quotient = vec![Scalar::zero(); quotient_len];

        for i in (0..quotient_len).rev() {
            let lead = remainder[i + divisor_deg];
            if lead.is_zero() {
                continue;
            }
            let factor = lead * lead_inv;
            quotient[i] = factor;
            for (j, dc) in divisor.coeffs.iter().enumerate() {
                remainder[i + j] -= factor * dc;
            }
        }

        Ok((
            UniPoly::from_coeffs(quotient),
            UniPoly::from_coeffs(remainder),
        ))
    }

    /// Division that requires an exact (zero) remainder; used to form KZG
    /// quotient polynomials. Errors with `NonExactDivision` otherwise.
    pub fn div_exact(&self, divisor: &UniPoly) -> Result<UniPoly> {
        let (quotient, remainder) = self.div_rem(divisor)?;
        if !remainder.is_zero() {
            return Err(BingoError::NonExactDivision {
                remainder_degree: remainder.degree(),
            });
        }
        Ok(quotient)
    }

    /// `(X - z)`, the divisor used throughout KZG opening proofs.
    pub fn linear_divisor(z: Scalar) -> UniPoly {
        UniPoly::from_coeffs(vec![-z, Scalar::from(1u64)])
    }
}

/// `base^exp` computed by repeated multiplication, never `Field::pow` with a
/// variable exponent (per the spec's "naive `Pow`" convention, consolidating
/// the three near-duplicate helpers of the original source into one).
pub fn scalar_pow(base: Scalar, exp: usize) -> Scalar {
    let mut power = Scalar::from(1u64);
    for _ in 0..exp {
        power *= base;
    }
    power
}

/// Build the Vandermonde matrix `V[i][j] = xs[i]^j` for `j` in `0..=degree`,
/// via repeated multiplication.
pub fn vandermonde(xs: &[Scalar], degree: usize) -> Vec<Vec<Scalar>> {
    xs.iter()
        .map(|&x| {
            let mut row = Vec::with_capacity(degree + 1);
            let mut power = Scalar::from(1u64);
            for _ in 0..=degree {
                row.push(power);
                power *= x;
            }
            row
        })
        .collect()
}

/// Solve `V * c = y` via forward-elimination Gaussian elimination followed by
/// back substitution. No row pivoting is performed: interpolation points are
/// assumed distinct and non-zero, so every pivot encountered is invertible
/// unless the system is genuinely singular (duplicate points).
pub fn solve_linear_system(v: &[Vec<Scalar>], y: &[Scalar]) -> Result<Vec<Scalar>> {
    let rows = v.len();
    if rows == 0 {
        return Ok(Vec::new());
    }
    let cols = v[0].len();

    let mut aug: Vec<Vec<Scalar>> = v
        .iter()
        .zip(y.iter())
        .map(|(row, &yi)| {
            let mut r = row.clone();
            r.push(yi);
            r
        })
        .collect();

    for i in 0..rows {
        if aug[i][i].is_zero() {
            return Err(BingoError::SingularSystem { row: i });
        }
        for j in (i + 1)..rows {
            let factor = aug[j][i] * aug[i][i].inverse().unwrap();
            for k in i..=cols {
                let tmp = aug[i][k] * factor;
                aug[j][k] -= tmp;
            }
        }
    }

    let mut coeffs = vec![Scalar::zero(); cols];
    for i in (0..rows).rev() {
        let mut sum = Scalar::zero();
        for j in (i + 1)..cols {
            sum += coeffs[j] * aug[i][j];
        }
        coeffs[i] = (aug[i][cols] - sum) * aug[i][i].inverse().unwrap();
    }

    Ok(coeffs)
}

/// Lagrange-interpolate the polynomial through `(xs[i], ys[i])` at `x`.
pub fn lagrange_interpolate(xs: &[Scalar], ys: &[Scalar], x: Scalar) -> Scalar {
    let n = xs.len();
    let mut acc = Scalar::zero();
    for i in 0..n {
        let mut num = ys[i];
        let mut den = Scalar::from(1u64);
        for j in 0..n {
            if i == j {
                continue;
            }
            num *= x - xs[j];
            den *= xs[i] - xs[j];
        }
        acc += num * den.inverse().expect("interpolation points must be distinct");
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ark_std::UniformRand;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xB16601)
    }

    #[test]
    fn eval_matches_naive_sum() {
        let mut r = rng();
        let coeffs: Vec<Scalar> = (0..12).map(|_| Scalar::rand(&mut r)).collect();
        let p = UniPoly::from_coeffs(coeffs.clone());
        for _ in 0..100 {
            let z = Scalar::rand(&mut r);
            let expected = coeffs
                .iter()
                .enumerate()
                .fold(Scalar::zero(), |acc, (i, c)| acc + *c * scalar_pow(z, i));
            assert_eq!(p.eval(z), expected);
        }
    }

    #[test]
    fn division_identity_holds() {
        let mut r = rng();
        let coeffs: Vec<Scalar> = (0..9).map(|_| Scalar::rand(&mut r)).collect();
        let p = UniPoly::from_coeffs(coeffs);
        let z = Scalar::rand(&mut r);
        let y = p.eval(z);
        let numerator = p.sub_constant(y);
        let divisor = UniPoly::linear_divisor(z);
        let (q, rem) = numerator.div_rem(&divisor).unwrap();
        assert!(rem.is_zero());
        // p(X) - p(z) = (X - z) q(X), so q(z) has no required relation to p'(z);
        // instead check the reconstructed identity directly at a fresh point.
        let w = Scalar::rand(&mut r);
        let lhs = p.eval(w) - y;
        let rhs = (w - z) * q.eval(w);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn non_exact_division_is_rejected() {
        let p = UniPoly::from_coeffs(vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64)]);
        let divisor = UniPoly::linear_divisor(Scalar::from(5u64));
        assert!(p.div_exact(&divisor).is_err());
    }

    #[test]
    fn vandermonde_round_trips_through_solve() {
        let mut r = rng();
        let xs: Vec<Scalar> = (1..=6).map(|i| Scalar::from(i as u64)).collect();
        let ys: Vec<Scalar> = (0..6).map(|_| Scalar::rand(&mut r)).collect();
        let v = vandermonde(&xs, xs.len() - 1);
        let coeffs = solve_linear_system(&v, &ys).unwrap();
        let p = UniPoly::from_coeffs(coeffs);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(p.eval(*x), *y);
        }
    }

    #[test]
    fn singular_system_is_detected() {
        let v = vec![vec![Scalar::from(0u64), Scalar::from(1u64)], vec![
            Scalar::from(0u64),
            Scalar::from(2u64),
        ]];
        let y = vec![Scalar::from(1u64), Scalar::from(2u64)];
        assert!(matches!(
            solve_linear_system(&v, &y),
            Err(BingoError::SingularSystem { row: 0 })
        ));
    }
}

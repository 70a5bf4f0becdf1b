//! Bivariate polynomial algebra: the grid representation, random sampling,
//! secret embedding, and row/column projection.

use ark_ff::Zero;
use rand::RngCore;

use crate::curve::Scalar;
use crate::error::Result;
use crate::poly::univariate::{scalar_pow, solve_linear_system, vandermonde, UniPoly};

/// A bivariate polynomial `sum_{i,j} c[i][j] X^i Y^j`, stored as a grid
/// `coeffs[i][j]` with `i` ranging over the X-degree (`0..=d1`) and `j` over
/// the Y-degree (`0..=d2`). This matches the original source's
/// `[][]kyber.Scalar` layout (`coeffs[i][j]`, outer loop over X-index).
#[derive(Debug, Clone)]
pub struct BivPoly {
    coeffs: Vec<Vec<Scalar>>,
    d1: usize,
    d2: usize,
}

impl BivPoly {
    /// Degree in X.
    pub fn d1(&self) -> usize {
        self.d1
    }

    /// Degree in Y.
    pub fn d2(&self) -> usize {
        self.d2
    }

    pub fn coeffs(&self) -> &[Vec<Scalar>] {
        &self.coeffs
    }

    /// `coeffs[i][j]`.
    pub fn coeff(&self, i: usize, j: usize) -> Scalar {
        self.coeffs[i][j]
    }

    /// Uniformly sample a random bivariate polynomial of shape `(d1+1, d2+1)`.
    pub fn random<R: RngCore>(d1: usize, d2: usize, rng: &mut R) -> Self {
        use ark_std::UniformRand;
        let coeffs = (0..=d1)
            .map(|_| (0..=d2).map(|_| Scalar::rand(rng)).collect())
            .collect();
        BivPoly { coeffs, d1, d2 }
    }

    /// Direct evaluation `phi(x, y)`, used only by tests and the secret-
    /// embedding smoke check — the protocol itself never evaluates the full
    /// bivariate polynomial directly.
    pub fn eval(&self, x: Scalar, y: Scalar) -> Scalar {
        let mut acc = Scalar::zero();
        for (i, row) in self.coeffs.iter().enumerate() {
            let mut row_acc = Scalar::zero();
            for (j, c) in row.iter().enumerate() {
                row_acc += *c * scalar_pow(y, j);
            }
            acc += row_acc * scalar_pow(x, i);
        }
        acc
    }

    /// Overwrite column 0 (`coeffs[i][0]` for all `i`) with the coefficients
    /// of a degree-`d1` univariate polynomial `g` such that
    /// `g(-(k+1)) = secrets[k]` for `k` in `0..secrets.len()`, and `g`'s
    /// remaining evaluations at `-(secrets.len()+1) ..= -(d1+1)` are
    /// uniformly random. By construction `phi(X, 0) = g(X)`, so
    /// `phi(-(k+1), 0) = secrets[k]`.
    ///
    /// This fixes the off-by-one the original source's point convention left
    /// open (`spec.md` §9's second Open Question): secrets never land on
    /// `X = 0`, which is not an embedded secret.
    pub fn embed_secrets<R: RngCore>(&mut self, secrets: &[Scalar], rng: &mut R) -> Result<()> {
        use ark_std::UniformRand;
        assert!(
            secrets.len() <= self.d1 + 1,
            "more secrets than the bivariate polynomial's row dimension can carry"
        );

        let xs: Vec<Scalar> = (1..=(self.d1 + 1) as u64).map(|k| -Scalar::from(k)).collect();
        let ys: Vec<Scalar> = (0..self.d1 + 1)
            .map(|k| {
                if k < secrets.len() {
                    secrets[k]
                } else {
                    Scalar::rand(rng)
                }
            })
            .collect();

        let vmat = vandermonde(&xs, self.d1);
        let g = solve_linear_system(&vmat, &ys)?;
        for (i, c) in g.into_iter().enumerate() {
            self.coeffs[i][0] = c;
        }
        Ok(())
    }
}

/// Project a bivariate grid to the univariate "row" polynomials obtained by
/// fixing Y at each of `points`: `f_j(X) = sum_i (sum_k c[i][k] * points[j]^k) X^i`.
/// `points[j] == 0` is special-cased to `f_j[i] = c[i][0]` (matching the
/// original source's explicit `j == 0` branch, which also sidesteps `0^0`).
pub fn project_rows(phi: &BivPoly, points: &[Scalar]) -> Vec<UniPoly> {
    points
        .iter()
        .map(|&y| {
            let coeffs: Vec<Scalar> = phi
                .coeffs()
                .iter()
                .map(|row| {
                    if y.is_zero() {
                        row[0]
                    } else {
                        row.iter()
                            .enumerate()
                            .fold(Scalar::zero(), |acc, (k, c)| acc + *c * scalar_pow(y, k))
                    }
                })
                .collect();
            UniPoly::from_coeffs(coeffs)
        })
        .collect()
}

/// Column projection: fix X at each of `points` and produce the resulting
/// "column" polynomials in Y, symmetric to [`project_rows`].
pub fn project_cols(phi: &BivPoly, points: &[Scalar]) -> Vec<UniPoly> {
    let d2 = phi.d2();
    points
        .iter()
        .map(|&x| {
            let coeffs: Vec<Scalar> = (0..=d2)
                .map(|j| {
                    if x.is_zero() {
                        phi.coeff(0, j)
                    } else {
                        phi.coeffs()
                            .iter()
                            .enumerate()
                            .fold(Scalar::zero(), |acc, (k, row)| acc + row[j] * scalar_pow(x, k))
                    }
                })
                .collect();
            UniPoly::from_coeffs(coeffs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ark_std::UniformRand;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xB16602)
    }

    #[test]
    fn row_projection_matches_direct_evaluation() {
        let mut r = rng();
        let phi = BivPoly::random(5, 3, &mut r);
        let j = Scalar::rand(&mut r);
        let projected = project_rows(&phi, &[j]);
        for i in 0..=phi.d1() {
            let x = Scalar::from(i as u64 + 7);
            let expected = phi.eval(x, j);
            assert_eq!(projected[0].eval(x), expected);
        }
    }

    #[test]
    fn col_projection_matches_direct_evaluation() {
        let mut r = rng();
        let phi = BivPoly::random(5, 3, &mut r);
        let i = Scalar::rand(&mut r);
        let projected = project_cols(&phi, &[i]);
        for j in 0..=phi.d2() {
            let y = Scalar::from(j as u64 + 11);
            let expected = phi.eval(i, y);
            assert_eq!(projected[0].eval(y), expected);
        }
    }

    #[test]
    fn row_projection_zero_special_case() {
        let mut r = rng();
        let phi = BivPoly::random(4, 2, &mut r);
        let projected = project_rows(&phi, &[Scalar::zero()]);
        let expected: Vec<Scalar> = phi.coeffs().iter().map(|row| row[0]).collect();
        assert_eq!(projected[0].coeffs(), expected.as_slice());
    }

    #[test]
    fn secret_embedding_lands_at_negative_indices() {
        let mut r = rng();
        let mut phi = BivPoly::random(5, 2, &mut r);
        let secrets = vec![Scalar::from(3u64), Scalar::from(5u64), Scalar::from(7u64)];
        phi.embed_secrets(&secrets, &mut r).unwrap();
        for (k, s) in secrets.iter().enumerate() {
            let x = -Scalar::from((k + 1) as u64);
            assert_eq!(phi.eval(x, Scalar::zero()), *s);
        }
    }
}

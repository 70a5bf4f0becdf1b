//! Commitment, partial evaluation, and the share-SRS commit used by verifiers
//! (`spec.md` §4.2: `Commits`, `PartialEval`, `KZGCommits`).

use ark_ec::Group;
use ark_ff::Zero;

use crate::curve::{Scalar, G1};
use crate::kzg::srs::{PublicReferenceString, TrustedSetupOutput};
use crate::poly::{scalar_pow, BivPoly, UniPoly};

/// `CM`: one G1 point per Y-column of the hiding pair.
pub type CommitmentVector = Vec<G1>;

/// `A`: one G1 point per participant, obtained by partially evaluating `CM`.
pub type ParticipantCommitments = Vec<G1>;

fn column_polys(phi: &BivPoly) -> Vec<UniPoly> {
    (0..=phi.d2())
        .map(|j| UniPoly::from_coeffs(phi.coeffs().iter().map(|row| row[j]).collect()))
        .collect()
}

fn msm(poly: &UniPoly, bases: &[G1]) -> G1 {
    poly.coeffs()
        .iter()
        .zip(bases.iter())
        .fold(G1::zero(), |acc, (c, b)| acc + b.mul(*c))
}

fn eval_via_powers(poly: &UniPoly, powers: &[Scalar]) -> Scalar {
    poly.coeffs()
        .iter()
        .zip(powers.iter())
        .fold(Scalar::zero(), |acc, (c, p)| acc + *c * p)
}

/// Commit to the hiding pair `(phi, phi')`: for every Y-column `j`,
/// `CM[j] = phi_j(tau)*g1 + phi'_j(tau)*h`, computed as a public MSM over
/// `prs.t1`/`prs.t_up`. Also returns `coeffs[j] = phi_j(tau) + x*phi'_j(tau)`,
/// the discrete log of `CM[j]`, computed from the dealer-only trapdoor
/// powers and retained only by the dealer.
pub fn commit(
    phi: &BivPoly,
    phi_prime: &BivPoly,
    trapdoor: &TrustedSetupOutput,
    prs: &PublicReferenceString,
) -> (CommitmentVector, Vec<Scalar>) {
    let phi_cols = column_polys(phi);
    let phi_prime_cols = column_polys(phi_prime);

    let mut cm = Vec::with_capacity(phi_cols.len());
    let mut coeffs = Vec::with_capacity(phi_cols.len());

    for (f, f_prime) in phi_cols.iter().zip(phi_prime_cols.iter()) {
        let c = msm(f, &prs.t1) + msm(f_prime, &prs.t_up);
        let s = eval_via_powers(f, &trapdoor.tau_powers)
            + trapdoor.x * eval_via_powers(f_prime, &trapdoor.tau_powers);
        cm.push(c);
        coeffs.push(s);
    }

    (cm, coeffs)
}

/// `KZGCommits`: commit to a single univariate pair `(f, f')` using only the
/// public reference string, with no trapdoor access. This is what a verifier
/// runs to check its received row pair matches `A[id]`.
pub fn share_commit(f: &UniPoly, f_prime: &UniPoly, prs: &PublicReferenceString) -> G1 {
    msm(f, &prs.t1) + msm(f_prime, &prs.t_up)
}

/// `PartialEval`: evaluate `CM`'s discrete logs at each point in `points` to
/// produce per-participant commitments `A[i] = (sum_j coeffs[j]*points[i]^j) * g1`.
/// Dealer-only: requires `coeffs`, which only the dealer retains.
pub fn partial_eval(coeffs: &[Scalar], points: &[Scalar], g1: G1) -> ParticipantCommitments {
    points
        .iter()
        .map(|&w| {
            let v = coeffs
                .iter()
                .enumerate()
                .fold(Scalar::zero(), |acc, (j, c)| acc + *c * scalar_pow(w, j));
            g1.mul(v)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kzg::srs::generate_srs;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn partial_eval_matches_share_commit() {
        let mut rng = StdRng::seed_from_u64(42);
        let d1 = 4;
        let d2 = 2;
        let n = 3;
        let (trapdoor, prs) = generate_srs(d1 + 1, &mut rng);

        let phi = BivPoly::random(d1, d2, &mut rng);
        let phi_prime = BivPoly::random(d1, d2, &mut rng);

        let (cm, coeffs) = commit(&phi, &phi_prime, &trapdoor, &prs);
        assert_eq!(cm.len(), d2 + 1);

        let points: Vec<Scalar> = (0..=n as u64).map(Scalar::from).collect();
        let a = partial_eval(&coeffs, &points, prs.g1);

        let rows = crate::poly::project_rows(&phi, &points);
        let rows_prime = crate::poly::project_rows(&phi_prime, &points);

        for (i, &w) in points.iter().enumerate() {
            let direct = share_commit(&rows[i], &rows_prime[i], &prs);
            assert_eq!(a[i], direct, "mismatch at participant {w:?}");
        }
    }
}

//! Evaluation proofs: opening a hiding pair at a point and verifying the
//! opening against a participant commitment (`spec.md` §4.2:
//! `KZGEvaluationProof`/`KZGEval`, `KZGVerify`).

use ark_ec::Group;
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::curve::{pairing, Scalar, G1, G2};
use crate::error::{BingoError, Result};
use crate::kzg::srs::{PublicReferenceString, TrustedSetupOutput};
use crate::poly::UniPoly;

/// An opening of `(f, f')` at `z = w_from`, carrying enough to let a
/// recipient both verify it against `A[from]` and (once a threshold of
/// these are gathered) re-derive column proofs via row-to-column
/// interpolation. `c` is the discrete log of `pi`; only the dealer fills it
/// in (`KZGEvaluationProof`), since deriving it requires the trapdoor.
/// Participants produce and forward proofs with `c = None` (`KZGEval`).
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct EvalProof {
    /// The identifier of the participant this proof is *about* (i.e. whose
    /// row/column polynomial pair was opened), not necessarily its sender.
    pub from: u32,
    /// The witness `pi = q(tau)*g1 + q'(tau)*h`.
    pub pi: G1,
    pub y1: Scalar,
    pub y2: Scalar,
    /// Discrete log of `pi`, known only when the dealer produced this proof.
    pub c: Option<Scalar>,
}

fn quotient_pair(f: &UniPoly, f_prime: &UniPoly, z: Scalar) -> Result<(UniPoly, UniPoly, Scalar, Scalar)> {
    let y1 = f.eval(z);
    let y2 = f_prime.eval(z);
    let divisor = UniPoly::linear_divisor(z);
    let q1 = f.sub_constant(y1).div_exact(&divisor)?;
    let q2 = f_prime.sub_constant(y2).div_exact(&divisor)?;
    Ok((q1, q2, y1, y2))
}

fn eval_via_powers(poly: &UniPoly, powers: &[Scalar]) -> Scalar {
    poly.coeffs()
        .iter()
        .zip(powers.iter())
        .fold(Scalar::zero(), |acc, (c, p)| acc + *c * p)
}

fn msm(poly: &UniPoly, bases: &[G1]) -> G1 {
    poly.coeffs()
        .iter()
        .zip(bases.iter())
        .fold(G1::zero(), |acc, (c, b)| acc + b.mul(*c))
}

/// `KZGEvaluationProof`: the dealer's opening, which also records the
/// witness's discrete log `c` so it can later be re-interpolated across
/// participants by [`crate::vss::verifier`]'s column-proof derivation.
pub fn open_with_trapdoor(
    from: u32,
    f: &UniPoly,
    f_prime: &UniPoly,
    z: Scalar,
    trapdoor: &TrustedSetupOutput,
    prs: &PublicReferenceString,
) -> Result<EvalProof> {
    let (q1, q2, y1, y2) = quotient_pair(f, f_prime, z)?;
    let pi = msm(&q1, &prs.t1) + msm(&q2, &prs.t_up);
    let c = eval_via_powers(&q1, &trapdoor.tau_powers)
        + trapdoor.x * eval_via_powers(&q2, &trapdoor.tau_powers);
    Ok(EvalProof {
        from,
        pi,
        y1,
        y2,
        c: Some(c),
    })
}

/// `KZGEval`: a participant's opening of its own row/column pair, using only
/// the public reference string. `c` is left unset.
pub fn open(from: u32, f: &UniPoly, f_prime: &UniPoly, z: Scalar, prs: &PublicReferenceString) -> Result<EvalProof> {
    let (q1, q2, y1, y2) = quotient_pair(f, f_prime, z)?;
    let pi = msm(&q1, &prs.t1) + msm(&q2, &prs.t_up);
    Ok(EvalProof {
        from,
        pi,
        y1,
        y2,
        c: None,
    })
}

/// `KZGVerify`: checks `e(A_i - y1*g1 - y2*h, g2) == e(pi, tau*g2 - z*g2)`,
/// i.e. that `pi` is a valid witness that the committed pair evaluates to
/// `(y1, y2)` at `z`, against the participant commitment `a_i = A[proof.from]`.
pub fn verify(prs: &PublicReferenceString, a_i: G1, z: Scalar, proof: &EvalProof) -> bool {
    let lhs_g1 = a_i - prs.g1.mul(proof.y1) - prs.h.mul(proof.y2);
    let s2: G2 = prs.t2[1];
    let rhs_g2 = s2 - prs.g2.mul(z);

    let lhs = pairing(lhs_g1, prs.g2);
    let rhs = pairing(proof.pi, rhs_g2);
    lhs == rhs
}

/// Convenience wrapper returning the spec's `VerificationFailed` error
/// instead of a bare bool, for call sites that propagate with `?`.
pub fn verify_or_err(prs: &PublicReferenceString, a_i: G1, z: Scalar, proof: &EvalProof) -> Result<()> {
    if verify(prs, a_i, z, proof) {
        Ok(())
    } else {
        Err(BingoError::VerificationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kzg::commit::{commit, share_commit};
    use crate::kzg::srs::generate_srs;
    use crate::poly::{project_rows, BivPoly};
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn dealer_opening_verifies_against_partial_eval() {
        let mut rng = StdRng::seed_from_u64(11);
        let d1 = 5;
        let d2 = 3;
        let (trapdoor, prs) = generate_srs(d1 + 1, &mut rng);

        let phi = BivPoly::random(d1, d2, &mut rng);
        let phi_prime = BivPoly::random(d1, d2, &mut rng);
        let (_cm, coeffs) = commit(&phi, &phi_prime, &trapdoor, &prs);

        let w = Scalar::from(3u64);
        let a_i = crate::kzg::commit::partial_eval(&coeffs, &[w], prs.g1)[0];

        let rows = project_rows(&phi, &[w]);
        let rows_prime = project_rows(&phi_prime, &[w]);
        assert_eq!(share_commit(&rows[0], &rows_prime[0], &prs), a_i);

        let z = Scalar::from(9u64);
        let proof = open_with_trapdoor(3, &rows[0], &rows_prime[0], z, &trapdoor, &prs).unwrap();
        assert!(verify(&prs, a_i, z, &proof));
    }

    #[test]
    fn tampered_evaluation_fails_verification() {
        let mut rng = StdRng::seed_from_u64(12);
        let d1 = 4;
        let d2 = 2;
        let (trapdoor, prs) = generate_srs(d1 + 1, &mut rng);

        let phi = BivPoly::random(d1, d2, &mut rng);
        let phi_prime = BivPoly::random(d1, d2, &mut rng);
        let (_cm, coeffs) = commit(&phi, &phi_prime, &trapdoor, &prs);

        let w = Scalar::from(1u64);
        let a_i = crate::kzg::commit::partial_eval(&coeffs, &[w], prs.g1)[0];
        let rows = project_rows(&phi, &[w]);
        let rows_prime = project_rows(&phi_prime, &[w]);

        let z = Scalar::from(6u64);
        let mut proof = open_with_trapdoor(1, &rows[0], &rows_prime[0], z, &trapdoor, &prs).unwrap();
        proof.y1 += Scalar::from(1u64);
        assert!(!verify(&prs, a_i, z, &proof));
    }

    #[test]
    fn participant_opening_without_trapdoor_also_verifies() {
        let mut rng = StdRng::seed_from_u64(13);
        let d1 = 3;
        let d2 = 2;
        let (trapdoor, prs) = generate_srs(d1 + 1, &mut rng);

        let phi = BivPoly::random(d1, d2, &mut rng);
        let phi_prime = BivPoly::random(d1, d2, &mut rng);
        let (_cm, coeffs) = commit(&phi, &phi_prime, &trapdoor, &prs);

        let w = Scalar::from(2u64);
        let a_i = crate::kzg::commit::partial_eval(&coeffs, &[w], prs.g1)[0];
        let rows = project_rows(&phi, &[w]);
        let rows_prime = project_rows(&phi_prime, &[w]);

        let z = Scalar::from(4u64);
        let proof = open(2, &rows[0], &rows_prime[0], z, &prs).unwrap();
        assert!(proof.c.is_none());
        assert!(verify(&prs, a_i, z, &proof));
    }
}

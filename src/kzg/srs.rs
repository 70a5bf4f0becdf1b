//! Structured Reference String generation (`spec.md` §4.2, §9).
//!
//! Two structs play the role the Design Notes call for: [`TrustedSetupOutput`]
//! carries the trapdoor scalars and is held only by the party that ran the
//! ceremony (here, the `Dealer`, per `spec.md` §4.2's Open Question
//! resolution (b)); [`PublicReferenceString`] carries only group elements and
//! is freely cloned and distributed to every participant.

use ark_std::UniformRand;
use rand::RngCore;

use crate::curve::{g1_generator, g2_generator, Scalar, G1, G2};
use crate::poly::scalar_pow;

/// Dealer-only output of the trusted setup ceremony. Holds the trapdoor `tau`
/// powers and the hiding-generator exponent `x`. Never `Clone`/`Copy`: nothing
/// in the public API hands this back out once `PartialEval` has consumed it.
pub struct TrustedSetupOutput {
    /// `[tau^0, tau^1, ..., tau^(L-1)]`. Not secret on its own (it encodes
    /// only base-field powers), but must not escape the dealer's process
    /// because it is what makes `PartialEval` cheap instead of a public
    /// linear combination over `CM`.
    pub(crate) tau_powers: Vec<Scalar>,
    pub(crate) x: Scalar,
}

impl TrustedSetupOutput {
    /// `tau^i`.
    pub fn tau_power(&self, i: usize) -> Scalar {
        self.tau_powers[i]
    }

    /// The hiding-generator exponent `x`.
    pub fn hiding_exponent(&self) -> Scalar {
        self.x
    }
}

/// Public parameters distributed to every participant. Contains only group
/// elements; safe to `Clone` and share freely.
#[derive(Clone, Debug)]
pub struct PublicReferenceString {
    /// `[g1, tau*g1, ..., tau^(L-1)*g1]`.
    pub t1: Vec<G1>,
    /// `[g2, tau*g2, ..., tau^(L-1)*g2]`.
    pub t2: Vec<G2>,
    /// `[h, tau*h, ..., tau^(L-1)*h]`, `h = x*g1`.
    pub t_up: Vec<G1>,
    /// The G1 base point.
    pub g1: G1,
    /// The G2 base point.
    pub g2: G2,
    /// `h = x*g1`, the hiding generator.
    pub h: G1,
}

impl PublicReferenceString {
    /// Maximum supported degree (`L - 1`).
    pub fn max_degree(&self) -> usize {
        self.t1.len().saturating_sub(1)
    }
}

/// Run the trusted setup: sample `tau`, `x` uniformly, build the G1/G2/hiding
/// power vectors up to `max_degree`, and return both the dealer-only trapdoor
/// bundle and the public reference string. `tau` and `x` are discarded by the
/// caller once `PartialEval` has run; this function itself never logs or
/// persists them.
pub fn generate_srs<R: RngCore>(max_degree: usize, rng: &mut R) -> (TrustedSetupOutput, PublicReferenceString) {
    let l = max_degree + 1;
    let tau = Scalar::rand(rng);
    let x = Scalar::rand(rng);

    let tau_powers: Vec<Scalar> = (0..l).map(|i| scalar_pow(tau, i)).collect();

    let g1 = g1_generator();
    let g2 = g2_generator();
    let h = g1 * x;

    let t1: Vec<G1> = tau_powers.iter().map(|&p| g1 * p).collect();
    let t2: Vec<G2> = tau_powers.iter().map(|&p| g2 * p).collect();
    let t_up: Vec<G1> = tau_powers.iter().map(|&p| h * p).collect();

    tracing::info!(max_degree, "generated bivariate KZG trusted setup");

    (
        TrustedSetupOutput { tau_powers, x },
        PublicReferenceString {
            t1,
            t2,
            t_up,
            g1,
            g2,
            h,
        },
    )
}

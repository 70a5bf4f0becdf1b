//! Field and group primitives: the pairing-friendly curve this crate is fixed to.
//!
//! BingoVSS is curve-agnostic in principle; this crate pins the choice to
//! BLS12-381, matching the curve already used by the sibling KZG module this
//! crate is grounded on.

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
use ark_ec::pairing::Pairing;
use ark_ec::Group;

/// Scalar field element (the prime-order scalar field `F`).
pub type Scalar = Fr;

/// Source group 1 element.
pub type G1 = G1Projective;

/// Source group 2 element.
pub type G2 = G2Projective;

/// Pairing target group element. Supports equality only, per `spec.md` §3.1.
pub type GT = <Bls12_381 as Pairing>::TargetField;

/// The bilinear pairing itself.
pub type Curve = Bls12_381;

/// `e: G1 x G2 -> GT`.
#[inline]
pub fn pairing(a: G1, b: G2) -> GT {
    Bls12_381::pairing(a, b).0
}

/// The deterministic base point of G1.
#[inline]
pub fn g1_generator() -> G1 {
    G1::generator()
}

/// The deterministic base point of G2.
#[inline]
pub fn g2_generator() -> G2 {
    G2::generator()
}

//! `BingoReconstruct` (`spec.md` §4.6), resolving the off-by-one Open
//! Question from §9 by evaluating at `-(k+1)` rather than `-k`: secrets are
//! embedded at `phi(-(k+1), 0)`, never at the un-embedded `phi(0, 0)`.

use ark_ff::Zero;

use crate::curve::{Scalar, G1};
use crate::error::{BingoError, Result};
use crate::kzg::proof::{open, verify};
use crate::kzg::PublicReferenceString;
use crate::poly::{lagrange_interpolate, UniPoly};
use crate::vss::ThresholdConfig;

/// Gather `d2+2` verified `(id, row(-(k+1)))` pairs from `rows` and
/// Lagrange-interpolate at `x = 0` to recover secret `k`.
///
/// `rows` supplies, for each participant willing to answer, its `id` and row
/// pair; a fresh KZG proof is computed and checked against `a[id]` for each
/// one, so a caller may pass corrupted or stale rows without pre-filtering.
pub fn reconstruct(
    k: usize,
    rows: &[(u32, UniPoly, UniPoly)],
    a: &[G1],
    prs: &PublicReferenceString,
    thresholds: &ThresholdConfig,
) -> Result<Scalar> {
    let needed = thresholds.d2 + 2;
    let z = -Scalar::from((k + 1) as u64);

    let mut xs = Vec::with_capacity(needed);
    let mut ys = Vec::with_capacity(needed);

    for (id, row, row_prime) in rows {
        if xs.len() >= needed {
            break;
        }
        let a_i = match a.get(*id as usize) {
            Some(&p) => p,
            None => continue,
        };
        let proof = match open(*id, row, row_prime, z, prs) {
            Ok(p) => p,
            Err(_) => continue,
        };
        if verify(prs, a_i, z, &proof) {
            xs.push(Scalar::from(*id as u64));
            ys.push(proof.y1);
        }
    }

    if xs.len() < needed {
        return Err(BingoError::InsufficientShares {
            needed,
            available: xs.len(),
        });
    }

    Ok(lagrange_interpolate(&xs, &ys, Scalar::zero()))
}

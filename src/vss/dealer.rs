//! `BingoDeal` (`spec.md` §4.5).

use rand::RngCore;

use crate::curve::Scalar;
use crate::error::Result;
use crate::kzg::proof::open_with_trapdoor;
use crate::kzg::{commit, partial_eval, CommitmentVector, EvalProof, ParticipantCommitments};
use crate::kzg::{PublicReferenceString, TrustedSetupOutput};
use crate::poly::{project_rows, BivPoly, UniPoly};
use crate::vss::ThresholdConfig;

/// Everything the Dealer produces and distributes in one `deal` call.
pub struct DealOutput {
    pub cm: CommitmentVector,
    pub a: ParticipantCommitments,
    /// `row_assignments[i]` is verifier `i`'s private row pair.
    pub row_assignments: Vec<(UniPoly, UniPoly)>,
    /// `row_proofs[recipient][sender]`: the proof that `sender`'s row
    /// evaluates to `(y1, y2)` at `recipient`'s point. Computed by the
    /// Dealer (the only party holding `TrustedSetupOutput`) on behalf of
    /// every participant; see `DESIGN.md` for why row-to-column
    /// interpolation requires this.
    pub row_proofs: Vec<Vec<EvalProof>>,
}

/// Runs the trusted-setup-consuming side of the protocol: holds the
/// trapdoor and the public reference string, and produces the Dealer's
/// broadcast/private messages in one shot.
pub struct Dealer {
    trapdoor: TrustedSetupOutput,
    prs: PublicReferenceString,
    thresholds: ThresholdConfig,
}

impl Dealer {
    pub fn new(trapdoor: TrustedSetupOutput, prs: PublicReferenceString, thresholds: ThresholdConfig) -> Self {
        Dealer {
            trapdoor,
            prs,
            thresholds,
        }
    }

    pub fn public_reference_string(&self) -> &PublicReferenceString {
        &self.prs
    }

    /// 1. Sample random `(phi, phi')`.
    /// 2. Embed `secrets` at `phi(-(k+1), 0)`.
    /// 3. Commit.
    /// 4. Project into `n+1` row polynomials at points `0, 1, ..., n`.
    /// 5. `PartialEval` to get the public per-participant commitments `A`.
    /// 6. Precompute every row-evaluation proof (see `DealOutput::row_proofs`).
    pub fn deal<R: RngCore>(&self, secrets: &[Scalar], rng: &mut R) -> Result<DealOutput> {
        let d1 = self.thresholds.d1;
        let d2 = self.thresholds.d2;
        let n = self.thresholds.n;

        let mut phi = BivPoly::random(d1, d2, rng);
        let phi_prime = BivPoly::random(d1, d2, rng);
        phi.embed_secrets(secrets, rng)?;

        let (cm, coeffs) = commit(&phi, &phi_prime, &self.trapdoor, &self.prs);

        let points: Vec<Scalar> = (0..=n as u64).map(Scalar::from).collect();
        let rows = project_rows(&phi, &points);
        let rows_prime = project_rows(&phi_prime, &points);

        let a = partial_eval(&coeffs, &points, self.prs.g1);

        let mut row_proofs = Vec::with_capacity(n + 1);
        for (recipient, &z) in points.iter().enumerate() {
            let mut for_recipient = Vec::with_capacity(n + 1);
            for sender in 0..=n {
                let proof = open_with_trapdoor(
                    sender as u32,
                    &rows[sender],
                    &rows_prime[sender],
                    z,
                    &self.trapdoor,
                    &self.prs,
                )?;
                for_recipient.push(proof);
            }
            tracing::debug!(recipient, "computed row-evaluation proofs for recipient");
            row_proofs.push(for_recipient);
        }

        let row_assignments = rows.into_iter().zip(rows_prime).collect();

        tracing::info!(d1, d2, n, secrets = secrets.len(), "dealt BingoVSS instance");

        Ok(DealOutput {
            cm,
            a,
            row_assignments,
            row_proofs,
        })
    }
}

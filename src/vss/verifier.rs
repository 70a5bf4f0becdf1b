//! The per-Verifier status machine and `BingoShare` transitions (`spec.md`
//! §4.3, §4.4).

use std::collections::BTreeMap;

use crate::curve::{Scalar, G1};
use crate::error::{BingoError, Result};
use crate::kzg::proof::verify as kzg_verify;
use crate::kzg::{share_commit, EvalProof, PublicReferenceString};
use crate::poly::{solve_linear_system, vandermonde, UniPoly};
use crate::vss::messages::Message;
use crate::vss::ThresholdConfig;

/// `{NULL, CORRECT_POLY, INCORRECT_POLY, SENT_ROWS, MISSING_POLY, DONE}`
/// (`spec.md` §3.1, §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierStatus {
    Null,
    CorrectPoly,
    IncorrectPoly,
    SentRows,
    MissingPoly,
    Done,
}

/// One participant's state across the protocol. Holds its own row pair
/// (once assigned), and the row/col proof tables keyed by sender id
/// (`spec.md` §9's "row/col proof tables" design note — `BTreeMap`, no
/// fixed-size nil-sentinel arrays).
pub struct Verifier {
    pub id: u32,
    thresholds: ThresholdConfig,
    prs: PublicReferenceString,
    status: VerifierStatus,
    row_poly: Option<(UniPoly, UniPoly)>,
    row_proofs: BTreeMap<u32, EvalProof>,
    verified_row_proofs: BTreeMap<u32, EvalProof>,
    col_proofs: BTreeMap<u32, EvalProof>,
    verified_col_proofs: BTreeMap<u32, EvalProof>,
}

impl Verifier {
    pub fn new(id: u32, thresholds: ThresholdConfig, prs: PublicReferenceString) -> Self {
        Verifier {
            id,
            thresholds,
            prs,
            status: VerifierStatus::Null,
            row_poly: None,
            row_proofs: BTreeMap::new(),
            verified_row_proofs: BTreeMap::new(),
            col_proofs: BTreeMap::new(),
            verified_col_proofs: BTreeMap::new(),
        }
    }

    pub fn status(&self) -> VerifierStatus {
        self.status
    }

    pub fn row_poly(&self) -> Option<&(UniPoly, UniPoly)> {
        self.row_poly.as_ref()
    }

    /// Store a dealer-assigned row pair; does not itself change status
    /// (`check_row_commitment` does).
    pub fn receive_row_assignment(&mut self, a_row: UniPoly, a_row_prime: UniPoly) {
        self.row_poly = Some((a_row, a_row_prime));
    }

    /// Set externally by the driver when this verifier lost or never
    /// received its row assignment (`spec.md` §4.4's `MISSING_POLY`).
    pub fn mark_missing(&mut self) {
        self.status = VerifierStatus::MissingPoly;
    }

    /// `NULL -> CORRECT_POLY` / `NULL -> INCORRECT_POLY`: check the held row
    /// pair against the broadcast `A[id]` via `KZGCommits`.
    pub fn check_row_commitment(&mut self, a_self: G1) -> VerifierStatus {
        let matches = match &self.row_poly {
            Some((row, row_prime)) => share_commit(row, row_prime, &self.prs) == a_self,
            None => false,
        };
        self.status = if matches {
            VerifierStatus::CorrectPoly
        } else {
            VerifierStatus::IncorrectPoly
        };
        self.status
    }

    /// `CORRECT_POLY -> SENT_ROWS`: package dealer-precomputed row-evaluation
    /// proofs about this verifier's own row (each one a `(recipient, proof)`
    /// pair covering `z = 0, 1, ..., n`) as outbound `Message::RowProof`s.
    ///
    /// The proofs themselves are computed by the Dealer (the only party that
    /// holds `TrustedSetupOutput`; see `dealer.rs` and `DESIGN.md`), not by
    /// the verifier transitioning here — this method only emits them.
    pub fn send_rows(&mut self, proofs_by_recipient: Vec<(u32, EvalProof)>) -> Vec<Message> {
        self.status = VerifierStatus::SentRows;
        proofs_by_recipient
            .into_iter()
            .map(|(to, proof)| Message::RowProof { to, proof })
            .collect()
    }

    /// Record an inbound row-evaluation proof from `proof.from`.
    pub fn receive_row_proof(&mut self, proof: EvalProof) {
        self.row_proofs.insert(proof.from, proof);
    }

    /// `SENT_ROWS`, no state change: once more than `d2` row proofs have
    /// arrived, verify up to `d2+1` of them against `a` (the public
    /// per-participant commitment vector), then — once `d2+1` verify —
    /// interpolate the column polynomial `b_id(Y) = phi(id, Y)` (and the
    /// hiding analogue, and the `c` side channel) and emit col-proofs for
    /// every column index `0..=n`.
    pub fn tally_row_proofs(&mut self, a: &[G1]) -> Result<Vec<Message>> {
        if self.status != VerifierStatus::SentRows {
            return Ok(Vec::new());
        }
        let needed = self.thresholds.d2 + 1;
        if self.row_proofs.len() <= self.thresholds.d2 {
            return Ok(Vec::new());
        }

        for (sender, proof) in self.row_proofs.iter() {
            if self.verified_row_proofs.len() >= needed {
                break;
            }
            if self.verified_row_proofs.contains_key(sender) {
                continue;
            }
            let a_sender = a[*sender as usize];
            let z = Scalar::from(self.id as u64);
            if kzg_verify(&self.prs, a_sender, z, proof) {
                self.verified_row_proofs.insert(*sender, proof.clone());
            }
        }

        if self.verified_row_proofs.len() < needed {
            return Ok(Vec::new());
        }

        let mut xs = Vec::with_capacity(needed);
        let mut y1s = Vec::with_capacity(needed);
        let mut y2s = Vec::with_capacity(needed);
        let mut cs = Vec::with_capacity(needed);
        for (sender, proof) in self.verified_row_proofs.iter().take(needed) {
            xs.push(Scalar::from(*sender as u64));
            y1s.push(proof.y1);
            y2s.push(proof.y2);
            cs.push(proof.c.ok_or(BingoError::MalformedProof {
                reason: "row proof used for column derivation is missing its c side-channel"
                    .to_string(),
            })?);
        }

        let vmat = vandermonde(&xs, self.thresholds.d2);
        let y1_coeffs = solve_linear_system(&vmat, &y1s)?;
        let y2_coeffs = solve_linear_system(&vmat, &y2s)?;
        let c_coeffs = solve_linear_system(&vmat, &cs)?;
        let y1_poly = UniPoly::from_coeffs(y1_coeffs);
        let y2_poly = UniPoly::from_coeffs(y2_coeffs);
        let c_poly = UniPoly::from_coeffs(c_coeffs);

        let mut outbox = Vec::with_capacity(self.thresholds.n + 1);
        for k in 0..=self.thresholds.n as u64 {
            let kk = Scalar::from(k);
            let y1 = y1_poly.eval(kk);
            let y2 = y2_poly.eval(kk);
            let c = c_poly.eval(kk);
            let proof = EvalProof {
                from: self.id,
                pi: self.prs.g1 * c,
                y1,
                y2,
                c: Some(c),
            };
            outbox.push(Message::ColProof { to: k as u32, proof });
        }
        self.status = VerifierStatus::Done;
        Ok(outbox)
    }

    /// Record an inbound column-evaluation proof from `proof.from`.
    pub fn receive_col_proof(&mut self, proof: EvalProof) {
        self.col_proofs.insert(proof.from, proof);
    }

    /// `MISSING_POLY -> DONE`: once more than `2*d2` col proofs arrive,
    /// verify up to `2*d2+1` of them against `a[self.id]`, and once `d1+1`
    /// verify, reconstruct this verifier's own row pair `(a_id, a'_id)` via
    /// Vandermonde interpolation over the senders' ids.
    pub fn tally_col_proofs(&mut self, a: &[G1]) -> Result<()> {
        if self.status != VerifierStatus::MissingPoly {
            return Ok(());
        }
        if self.col_proofs.len() <= 2 * self.thresholds.d2 {
            return Ok(());
        }

        let needed = self.thresholds.d1 + 1;
        let a_self = a[self.id as usize];
        for (sender, proof) in self.col_proofs.iter() {
            if self.verified_col_proofs.len() >= needed {
                break;
            }
            if self.verified_col_proofs.contains_key(sender) {
                continue;
            }
            let z = Scalar::from(*sender as u64);
            if kzg_verify(&self.prs, a_self, z, proof) {
                self.verified_col_proofs.insert(*sender, proof.clone());
            }
        }

        if self.verified_col_proofs.len() < needed {
            return Ok(());
        }

        let mut xs = Vec::with_capacity(needed);
        let mut y1s = Vec::with_capacity(needed);
        let mut y2s = Vec::with_capacity(needed);
        for (sender, proof) in self.verified_col_proofs.iter().take(needed) {
            xs.push(Scalar::from(*sender as u64));
            y1s.push(proof.y1);
            y2s.push(proof.y2);
        }
        let vmat = vandermonde(&xs, self.thresholds.d1);
        let row_coeffs = solve_linear_system(&vmat, &y1s)?;
        let row_prime_coeffs = solve_linear_system(&vmat, &y2s)?;
        self.row_poly = Some((
            UniPoly::from_coeffs(row_coeffs),
            UniPoly::from_coeffs(row_prime_coeffs),
        ));
        self.status = VerifierStatus::Done;
        Ok(())
    }

    pub fn row_for_reconstruction(&self) -> Option<&(UniPoly, UniPoly)> {
        self.row_poly.as_ref()
    }
}

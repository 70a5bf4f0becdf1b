//! Bivariate, hiding KZG commitments (`spec.md` §4.2).

pub mod commit;
pub mod proof;
pub mod srs;

pub use commit::{commit, partial_eval, share_commit, CommitmentVector, ParticipantCommitments};
pub use proof::{open, open_with_trapdoor, verify, verify_or_err, EvalProof};
pub use srs::{generate_srs, PublicReferenceString, TrustedSetupOutput};

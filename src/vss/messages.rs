//! Wire message shapes (`spec.md` §6). Transport is out of scope; these
//! types only describe what gets encoded and carry `ark_serialize` derives
//! so a future transport has something to serialize.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::kzg::{CommitmentVector, EvalProof, ParticipantCommitments};
use crate::poly::UniPoly;

/// One of the four message shapes exchanged during the protocol.
#[derive(Debug, Clone, CanonicalSerialize, CanonicalDeserialize)]
pub enum Message {
    /// Dealer broadcast of the public commitment vector and per-participant commitments.
    CommitBroadcast {
        cm: CommitmentVector,
        a: ParticipantCommitments,
    },
    /// Dealer's private delivery of a participant's row pair.
    RowAssignment {
        recipient_id: u32,
        a_row: UniPoly,
        a_row_prime: UniPoly,
    },
    /// A row-evaluation proof about `proof.from`'s row, addressed to `to`.
    RowProof { to: u32, proof: EvalProof },
    /// A column-evaluation proof, derived by `proof.from` via row-to-column
    /// interpolation, addressed to `to`.
    ColProof { to: u32, proof: EvalProof },
}

impl Message {
    /// The recipient this message is addressed to, where applicable.
    pub fn recipient(&self) -> u32 {
        match self {
            Message::CommitBroadcast { .. } => u32::MAX,
            Message::RowAssignment { recipient_id, .. } => *recipient_id,
            Message::RowProof { to, .. } | Message::ColProof { to, .. } => *to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

    #[test]
    fn row_proof_message_round_trips() {
        let msg = Message::RowProof {
            to: 3,
            proof: EvalProof {
                from: 1,
                pi: crate::curve::g1_generator(),
                y1: crate::curve::Scalar::from(7u64),
                y2: crate::curve::Scalar::from(9u64),
                c: Some(crate::curve::Scalar::from(11u64)),
            },
        };
        let mut bytes = Vec::new();
        msg.serialize_compressed(&mut bytes).unwrap();
        let decoded = Message::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(msg.recipient(), decoded.recipient());
    }
}

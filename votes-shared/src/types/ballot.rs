use serde::{Deserialize, Serialize};

/// The envelope the producer pushes onto the queue for each cast vote.
///
/// The label is kept as a free string here; validation against the known
/// categories happens in the processor, not during deserialization, so a
/// malformed payload and an unknown label stay distinguishable in logs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteBallot {
    pub vote: String,
}

//! Processor module for the vote ingestion pipeline.
//!
//! Turns raw queue payloads into validated vote categories. Validation
//! happens here, at the ingestion boundary, so the store only ever sees
//! labels from the known category set.

use votes_shared::types::{VoteBallot, VoteCategory};

use crate::errors::ProcessorError;

/// Parses serialized ballots and validates their category label.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoteProcessor;

impl VoteProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Parses `payload` as a ballot envelope and validates its label.
    ///
    /// # Returns
    ///
    /// * `Ok(VoteCategory)` - A well-formed ballot for a known category
    /// * `Err(ProcessorError::MalformedPayload)` - Not parseable as a
    ///   ballot, including a missing `vote` field
    /// * `Err(ProcessorError::UnknownCategory)` - Parseable, but the
    ///   label is not in the known set
    pub fn process(&self, payload: &str) -> Result<VoteCategory, ProcessorError> {
        let ballot: VoteBallot = serde_json::from_str(payload)
            .map_err(|e| ProcessorError::MalformedPayload(e.to_string()))?;
        let category = VoteCategory::from_label(&ballot.vote)
            .map_err(|e| ProcessorError::UnknownCategory(e.0))?;
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ballots() {
        let processor = VoteProcessor::new();
        assert_eq!(
            processor.process(r#"{"vote":"cats"}"#).unwrap(),
            VoteCategory::Cats
        );
        assert_eq!(
            processor.process(r#"{"vote":"dogs"}"#).unwrap(),
            VoteCategory::Dogs
        );
    }

    #[test]
    fn ignores_extra_fields() {
        let processor = VoteProcessor::new();
        assert_eq!(
            processor
                .process(r#"{"vote":"cats","voter":"somebody"}"#)
                .unwrap(),
            VoteCategory::Cats
        );
    }

    #[test]
    fn rejects_invalid_json() {
        let processor = VoteProcessor::new();
        assert!(matches!(
            processor.process("not json at all"),
            Err(ProcessorError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_missing_vote_field() {
        let processor = VoteProcessor::new();
        assert!(matches!(
            processor.process(r#"{"ballot":"cats"}"#),
            Err(ProcessorError::MalformedPayload(_))
        ));
    }

    #[test]
    fn rejects_unknown_category() {
        let processor = VoteProcessor::new();
        assert_eq!(
            processor.process(r#"{"vote":"fish"}"#),
            Err(ProcessorError::UnknownCategory("fish".to_string()))
        );
    }

    #[test]
    fn rejects_empty_label() {
        let processor = VoteProcessor::new();
        assert_eq!(
            processor.process(r#"{"vote":""}"#),
            Err(ProcessorError::UnknownCategory(String::new()))
        );
    }
}

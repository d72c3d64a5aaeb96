//! Interpretation of raw verification-model output.
//!
//! Sentinel matching on free text is fragile, so it happens here and nowhere
//! else: callers only ever see a [`VerificationOutcome`].

use serde::{Deserialize, Serialize};

use crate::session::StudentRecord;
use crate::texts::{FAILURE_SENTINEL, SUCCESS_SENTINEL};

/// Prefix of the line carrying the structured record on success.
pub const RECORD_PREFIX: &str = "RECORD:";

/// What a verification reply means for the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationOutcome {
    /// The dialogue goes on; show the text as is.
    Continue(String),
    /// All checks passed. `record` is present when the model reported a valid one.
    Succeeded {
        text: String,
        record: Option<StudentRecord>,
    },
    /// A check failed.
    Failed(String),
}

impl VerificationOutcome {
    /// Classifies `raw` by its sentinel phrases. Failure wins when both appear.
    ///
    /// Any `RECORD:` line is removed from the visible text; its JSON payload is
    /// kept only on success and only when it passes validation.
    pub fn parse(raw: &str) -> Self {
        let (text, record_json) = split_record_line(raw);

        if text.contains(FAILURE_SENTINEL) {
            return Self::Failed(text);
        }
        if text.contains(SUCCESS_SENTINEL) {
            let record = record_json.and_then(|json| parse_record(&json));
            return Self::Succeeded { text, record };
        }
        Self::Continue(text)
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Failed(text) => text,
            Self::Succeeded { text, .. } => text,
        }
    }
}

fn split_record_line(raw: &str) -> (String, Option<String>) {
    let mut record = None;
    let mut visible = Vec::new();
    for line in raw.lines() {
        match line.trim().strip_prefix(RECORD_PREFIX) {
            Some(payload) => record = Some(payload.trim().to_string()),
            None => visible.push(line),
        }
    }
    (visible.join("\n").trim().to_string(), record)
}

fn parse_record(json: &str) -> Option<StudentRecord> {
    match serde_json::from_str::<StudentRecord>(json) {
        Ok(record) if record.is_valid() => Some(record),
        Ok(_) => {
            tracing::warn!("Verification record failed validation, falling back to transcript fields");
            None
        }
        Err(err) => {
            tracing::warn!("Verification record is not valid JSON: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_continues() {
        let outcome = VerificationOutcome::parse("  Thank you. Please state your Class and Section. ");
        assert_eq!(
            outcome,
            VerificationOutcome::Continue("Thank you. Please state your Class and Section.".into())
        );
    }

    #[test]
    fn test_failure_sentinel() {
        let outcome = VerificationOutcome::parse("🚫 Verification Failed.");
        assert!(matches!(outcome, VerificationOutcome::Failed(_)));
    }

    #[test]
    fn test_failure_wins_over_success() {
        let outcome =
            VerificationOutcome::parse("Verification Successful? No. 🚫 Verification Failed.");
        assert!(matches!(outcome, VerificationOutcome::Failed(_)));
    }

    #[test]
    fn test_success_with_valid_record() {
        let raw = "✅ Verification Successful. Here is your password: sjvs@ix@\n\
RECORD: {\"name\":\"Aarav Sharma\",\"classSection\":\"9th B\",\"admissionNo\":\"4821\",\"rollNo\":\"9214\",\"reason\":\"Exam revision\"}";

        match VerificationOutcome::parse(raw) {
            VerificationOutcome::Succeeded { text, record } => {
                assert!(!text.contains(RECORD_PREFIX));
                assert!(text.ends_with("sjvs@ix@"));
                let record = record.expect("record should be parsed");
                assert_eq!(record.roll_no, "9214");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_success_with_broken_record_drops_it() {
        let raw = "✅ Verification Successful.\nRECORD: {not json}";
        match VerificationOutcome::parse(raw) {
            VerificationOutcome::Succeeded { record, text } => {
                assert!(record.is_none());
                assert_eq!(text, "✅ Verification Successful.");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_success_with_incomplete_record_drops_it() {
        let raw = "✅ Verification Successful.\nRECORD: {\"name\":\"Aarav Sharma\"}";
        assert!(matches!(
            VerificationOutcome::parse(raw),
            VerificationOutcome::Succeeded { record: None, .. }
        ));
    }
}

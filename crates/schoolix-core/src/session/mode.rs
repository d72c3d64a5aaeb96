//! Conversation modes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The controller's current conversation phase.
///
/// Determines which remote instruction set applies and how its output is read.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Waiting for the user to pick registration or the assistant.
    #[default]
    Choice,
    /// Identity verification dialogue driven by the verification model.
    Registration,
    /// Password gate in front of the assistant.
    Auth,
    /// Open-ended Q&A with the assistant model.
    Assistant,
}

impl Mode {
    /// Interprets a reply to the opening menu.
    ///
    /// Returns the mode the user picked, or `None` when the reply selects nothing.
    pub fn from_choice(input: &str) -> Option<Mode> {
        let trimmed = input.trim();
        let lowered = trimmed.to_lowercase();
        if trimmed == "1" || lowered.contains("registration") {
            Some(Mode::Registration)
        } else if trimmed == "2" || lowered.contains("assistant") {
            Some(Mode::Auth)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_choice_numeric() {
        assert_eq!(Mode::from_choice("1"), Some(Mode::Registration));
        assert_eq!(Mode::from_choice(" 2 "), Some(Mode::Auth));
        assert_eq!(Mode::from_choice("3"), None);
    }

    #[test]
    fn test_from_choice_keywords() {
        assert_eq!(Mode::from_choice("I want Registration"), Some(Mode::Registration));
        assert_eq!(Mode::from_choice("open the assistant please"), Some(Mode::Auth));
        assert_eq!(Mode::from_choice("hello"), None);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Mode::Registration.to_string(), "REGISTRATION");
        assert_eq!(Mode::from_str("ASSISTANT").unwrap(), Mode::Assistant);
        assert_eq!(Mode::default(), Mode::Choice);
    }
}

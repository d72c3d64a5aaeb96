//! Fixed user-facing texts.
//!
//! Every failure the user can see is one of these strings (or picked from a
//! small fixed set); diagnostics only ever go to the log.

/// Literal phrase the verification model emits once every check passed.
pub const SUCCESS_SENTINEL: &str = "Verification Successful";
/// Literal phrase the verification model emits when a check failed.
pub const FAILURE_SENTINEL: &str = "Verification Failed";
/// Marker on the bot turn that opens the assistant after the password gate.
pub const PASSWORD_ACCEPTED_MARKER: &str = "Password Accepted";

/// Reserved control command, matched case-insensitively after trimming.
pub const RESTART_COMMAND: &str = "restart";

pub const GREETING: &str = "Hello! 👋 Welcome to the Schoolix Student Portal.\n\
Reply 1 to register for Class Notes access, or 2 to open the Helping Assistant.";

pub const CHOICE_REJECTED: &str =
    "Please reply with 1 (Registration) or 2 (Helping Assistant) to continue.";

pub const REGISTRATION_OPENING: &str = "Registration selected. I am here to verify your identity \
and provide you with the password for the Class 9 notes.\n\
To get started, please tell me your Full Name.";

pub const AUTH_OPENING: &str =
    "Helping Assistant selected. Please enter the access password to continue.";

pub const PASSWORD_ACCEPTED: &str = "✅ Password Accepted. I am the Schoolix Helping Assistant. \
I'm here to help you with your Class 9 studies and guide you through the features of our website.";

pub const PASSWORD_REJECTED: &str = "🚫 Incorrect password. Access denied, please try again.";

pub const NAME_REJECTED: &str = "Invalid name. Please enter your full name using letters and \
spaces only (3 to 50 characters).";

/// Openers for the non-final strike message; one is picked at random.
pub const STRIKE_VARIANTS: [&str; 3] = [
    "Those details do not match our records.",
    "The information provided could not be verified.",
    "Verification could not be completed with that entry.",
];

pub const FINAL_DENIAL: &str = "🚫 Verification Failed. The maximum number of attempts has been \
reached and this session is now closed. Type \"restart\" to begin again.";

pub const SUCCESS_SUFFIX: &str = "\n\n🎉 Congratulations! You are now registered and the \
Schoolix Helping Assistant is unlocked. Ask me anything about your Class 9 studies.";

pub const VERIFIER_UNAVAILABLE: &str =
    "Verification service is momentarily unresponsive. Please try again in a few seconds.";

pub const ASSISTANT_UNAVAILABLE: &str = "The Schoolix Intelligence module is currently under \
heavy load. Please wait a moment and try sending your message again.";

pub const VERIFIER_EMPTY: &str = "No response received.";
pub const ASSISTANT_EMPTY: &str = "I am unable to process that request right now.";
pub const ASSISTANT_IDLE: &str = "How can I help you today?";

/// Builds the warning shown after a non-final strike.
pub fn strike_warning(variant: &str, attempt: u8, max_attempts: u8) -> String {
    format!(
        "⚠️ {variant} (Attempt {attempt}/{max_attempts}) Please re-check your details and try again."
    )
}

/// True when `input` is the reserved restart command.
pub fn is_restart(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(RESTART_COMMAND)
}

//! Terminal rendering of the transcript and mode affordances.

use chrono::Local;
use colored::Colorize;

use schoolix_application::ChatSession;
use schoolix_core::session::{MAX_STRIKES, Mode, SessionState};
use schoolix_core::texts::is_restart;
use schoolix_core::transcript::{Speaker, Turn};
use schoolix_core::validation::is_valid_name;

use crate::helper::RETRY_COMMAND;

/// Prints only the turns the user has not seen yet.
///
/// A transcript shorter than what was already shown means it was reset, in
/// which case everything is printed again.
pub struct TranscriptView {
    rendered: usize,
}

impl TranscriptView {
    pub fn new() -> Self {
        Self { rendered: 0 }
    }

    pub fn render_new(&mut self, session: &ChatSession) {
        let turns = session.transcript().turns();
        if turns.len() < self.rendered {
            println!("{}", "── session restarted ──".bright_black());
            self.rendered = 0;
        }

        let mut mask_user = false;
        for (index, turn) in turns.iter().enumerate() {
            // A user turn answering the password prompt is never echoed.
            let masked = mask_user && turn.speaker == Speaker::User;
            if index >= self.rendered {
                print_turn(turn, masked);
            }
            mask_user = turn.speaker == Speaker::Bot && is_password_prompt(&turn.text);
        }
        self.rendered = turns.len();

        if session.can_retry() {
            println!(
                "{}",
                format!("Type '{RETRY_COMMAND}' to send your last message again.").yellow()
            );
        }
    }
}

fn is_password_prompt(text: &str) -> bool {
    use schoolix_core::texts::{AUTH_OPENING, PASSWORD_REJECTED};
    text == AUTH_OPENING || text == PASSWORD_REJECTED
}

fn print_turn(turn: &Turn, masked: bool) {
    let time = turn.sent_at.with_timezone(&Local).format("%H:%M");
    match turn.speaker {
        Speaker::User => {
            let text = if masked {
                "•".repeat(turn.text.chars().count())
            } else {
                turn.text.clone()
            };
            println!("{} {}", format!("[{time}] You:").green().bold(), text.green());
        }
        Speaker::Bot => {
            println!("{}", format!("[{time}] Schoolix:").bright_magenta().bold());
            for line in turn.text.lines() {
                if turn.is_error {
                    println!("{}", line.red());
                } else {
                    println!("{}", line.bright_blue());
                }
            }
        }
    }
    println!();
}

/// Prompt text for the current mode, with the strike badge during registration.
pub fn prompt(state: &SessionState) -> String {
    match state.mode {
        Mode::Choice => "choice> ".to_string(),
        Mode::Registration if state.failed_attempts > 0 => {
            format!("register [strikes {}/{}]> ", state.failed_attempts, MAX_STRIKES)
        }
        Mode::Registration => "register> ".to_string(),
        Mode::Auth => "password> ".to_string(),
        Mode::Assistant => "assistant> ".to_string(),
    }
}

pub fn print_lock_banner() {
    println!("{}", "✖ VERIFICATION FAILED".red().bold());
    println!(
        "{}",
        "Unfortunately, verification requirements were not met. Type 'restart' to begin again."
            .red()
    );
    println!();
}

pub fn print_success_banner() {
    println!("{}", "✔ VERIFICATION SUCCESS".green().bold());
    println!(
        "{}",
        "Your data has been securely recorded. You may proceed.".green()
    );
    println!();
}

/// Whether sending `input` in `state` reaches a remote model.
pub fn will_call_remote(state: &SessionState, input: &str) -> bool {
    if !state.accepts_input() || is_restart(input) {
        return false;
    }
    match state.mode {
        Mode::Registration => state.answers_collected > 0 || is_valid_name(input),
        Mode::Assistant => true,
        Mode::Choice | Mode::Auth => false,
    }
}

pub fn print_busy(mode: Mode) {
    let label = match mode {
        Mode::Registration => "Verifying...",
        _ => "Thinking...",
    };
    println!("{}", label.bright_black());
}

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::session::StudentRecord;

const SECRET: &str = "sjvs@ix@";

fn controller() -> Controller<StdRng> {
    Controller::with_rng(SECRET, StdRng::seed_from_u64(7))
}

fn in_mode(mode: Mode) -> SessionState {
    let mut state = SessionState::new();
    state.mode = mode;
    state
}

fn input(text: &str) -> Event {
    Event::Input(text.to_string())
}

fn failed() -> Event {
    Event::Verification(VerificationOutcome::Failed("🚫 Verification Failed.".into()))
}

#[test]
fn test_choice_registration() {
    let mut ctl = controller();
    let t = ctl.transition(&SessionState::new(), input("1"));
    assert_eq!(t.state.mode, Mode::Registration);
    assert_eq!(t.replies(), vec![texts::REGISTRATION_OPENING]);
    assert!(!t.effects.contains(&Effect::InvokeVerifier));
}

#[test]
fn test_choice_assistant_goes_to_auth() {
    let mut ctl = controller();
    let t = ctl.transition(&SessionState::new(), input("take me to the assistant"));
    assert_eq!(t.state.mode, Mode::Auth);
    assert_eq!(t.replies(), vec![texts::AUTH_OPENING]);
}

#[test]
fn test_choice_rejects_anything_else() {
    let mut ctl = controller();
    let t = ctl.transition(&SessionState::new(), input("hello?"));
    assert_eq!(t.state.mode, Mode::Choice);
    assert_eq!(t.replies(), vec![texts::CHOICE_REJECTED]);
}

#[test]
fn test_auth_exact_secret_unlocks_assistant() {
    let mut ctl = controller();
    let t = ctl.transition(&in_mode(Mode::Auth), input(SECRET));
    assert_eq!(t.state.mode, Mode::Assistant);
    assert_eq!(t.replies(), vec![texts::PASSWORD_ACCEPTED]);
}

#[test]
fn test_auth_wrong_secret_has_no_strikes() {
    let mut ctl = controller();
    let mut state = in_mode(Mode::Auth);
    for attempt in ["SJVS@IX@", " sjvs@ix@", "guess", "again"] {
        let t = ctl.transition(&state, input(attempt));
        assert_eq!(t.state.mode, Mode::Auth);
        assert_eq!(t.replies(), vec![texts::PASSWORD_REJECTED]);
        state = t.state;
    }
    assert_eq!(state.failed_attempts, 0);
    assert!(!state.locked);
}

#[test]
fn test_invalid_first_name_is_rejected_locally() {
    let mut ctl = controller();
    let state = in_mode(Mode::Registration);
    let t = ctl.transition(&state, input("x_Æ12"));

    assert_eq!(t.effects, vec![Effect::Reply(texts::NAME_REJECTED.to_string())]);
    assert_eq!(t.state.answers_collected, 0);
    assert!(t.state.fields.name.is_none());
}

#[test]
fn test_valid_name_invokes_verifier_and_is_recorded() {
    let mut ctl = controller();
    let t = ctl.transition(&in_mode(Mode::Registration), input("Aarav Sharma"));

    assert_eq!(t.effects, vec![Effect::InvokeVerifier]);
    assert_eq!(t.state.answers_collected, 1);
    assert_eq!(t.state.fields.name.as_deref(), Some("Aarav Sharma"));
}

#[test]
fn test_later_answers_skip_name_check() {
    let mut ctl = controller();
    let mut state = in_mode(Mode::Registration);
    state.answers_collected = 1;
    let t = ctl.transition(&state, input("9th B"));
    assert_eq!(t.effects, vec![Effect::InvokeVerifier]);
    assert_eq!(t.state.fields.class_section.as_deref(), Some("9th B"));
}

#[test]
fn test_continue_passes_text_through() {
    let mut ctl = controller();
    let text = "Thank you. Please state your Class and Section.";
    let t = ctl.transition(
        &in_mode(Mode::Registration),
        Event::Verification(VerificationOutcome::Continue(text.into())),
    );
    assert_eq!(t.effects, vec![Effect::Reply(text.into())]);
    assert_eq!(t.state.mode, Mode::Registration);
}

#[test]
fn test_first_failure_warns_with_variant() {
    let mut ctl = controller();
    let t = ctl.transition(&in_mode(Mode::Registration), failed());

    assert_eq!(t.state.failed_attempts, 1);
    assert!(!t.state.locked);
    let reply = t.replies()[0];
    assert!(reply.contains("(Attempt 1/2)"));
    assert!(texts::STRIKE_VARIANTS.iter().any(|variant| reply.contains(variant)));
}

#[test]
fn test_second_failure_locks() {
    let mut ctl = controller();
    let first = ctl.transition(&in_mode(Mode::Registration), failed());
    let second = ctl.transition(&first.state, failed());

    assert_eq!(second.state.failed_attempts, 2);
    assert!(second.state.locked);
    assert_eq!(second.replies(), vec![texts::FINAL_DENIAL]);
    assert!(!second.state.accepts_input());
}

#[test]
fn test_locked_session_ignores_everything_but_restart() {
    let mut ctl = controller();
    let mut state = in_mode(Mode::Registration);
    state.locked = true;
    state.failed_attempts = MAX_STRIKES;

    for event in [
        input("Aarav Sharma"),
        failed(),
        Event::Verification(VerificationOutcome::Succeeded {
            text: "✅ Verification Successful.".into(),
            record: None,
        }),
        Event::RetryRequested,
    ] {
        let t = ctl.transition(&state, event);
        assert!(t.state.locked);
        assert!(t.effects.is_empty());
        state = t.state;
    }

    let t = ctl.transition(&state, input("  RESTART "));
    assert!(!t.state.locked);
    assert_eq!(t.state.mode, Mode::Choice);
    assert_eq!(t.state.failed_attempts, 0);
    assert_eq!(t.effects, vec![Effect::ResetTranscript]);
}

#[test]
fn test_restart_from_every_mode_keeps_session_id() {
    let mut ctl = controller();
    for mode in [Mode::Choice, Mode::Registration, Mode::Auth, Mode::Assistant] {
        let mut state = in_mode(mode);
        state.answers_collected = 3;
        let t = ctl.transition(&state, Event::Restart);
        assert_eq!(t.state.mode, Mode::Choice);
        assert_eq!(t.state.answers_collected, 0);
        assert_eq!(t.state.id, state.id);
    }
}

#[test]
fn test_success_with_record_notifies_with_it() {
    let mut ctl = controller();
    let record = StudentRecord {
        name: "Meera Nair".into(),
        class_section: "9th B".into(),
        admission_no: "1234".into(),
        roll_no: "9250".into(),
        reason: "Notes".into(),
    };
    let t = ctl.transition(
        &in_mode(Mode::Registration),
        Event::Verification(VerificationOutcome::Succeeded {
            text: "✅ Verification Successful.".into(),
            record: Some(record.clone()),
        }),
    );

    assert_eq!(t.state.mode, Mode::Assistant);
    assert_eq!(
        t.effects,
        vec![
            Effect::Reply(format!("✅ Verification Successful.{}", texts::SUCCESS_SUFFIX)),
            Effect::Notify(record),
        ]
    );
}

#[test]
fn test_success_without_record_uses_positional_fields() {
    let mut ctl = controller();
    let mut state = in_mode(Mode::Registration);
    for (index, answer) in ["Aarav Sharma", "9th B", "4821", "9214", "Revision"]
        .iter()
        .enumerate()
    {
        state.fields.record_answer(index, answer);
    }
    state.answers_collected = 5;

    let t = ctl.transition(
        &state,
        Event::Verification(VerificationOutcome::Succeeded {
            text: "✅ Verification Successful.".into(),
            record: None,
        }),
    );

    let notified: Vec<&StudentRecord> = t
        .effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Notify(record) => Some(record),
            _ => None,
        })
        .collect();
    assert_eq!(notified.len(), 1);
    assert_eq!(notified[0].admission_no, "4821");
    assert_eq!(notified[0].roll_no, "9214");
    assert_eq!(notified[0].reason, "Revision");
}

#[test]
fn test_remote_failure_is_flagged_and_retryable() {
    let mut ctl = controller();
    let t = ctl.transition(
        &in_mode(Mode::Registration),
        Event::RemoteFailed(RemoteTarget::Verifier),
    );
    assert_eq!(
        t.effects,
        vec![Effect::ReplyError(texts::VERIFIER_UNAVAILABLE.to_string())]
    );
    assert_eq!(t.state.pending_retry, Some(RemoteTarget::Verifier));
    assert!(!t.state.locked);

    let retry = ctl.transition(&t.state, Event::RetryRequested);
    assert_eq!(retry.effects, vec![Effect::InvokeVerifier]);
}

#[test]
fn test_retry_without_pending_call_does_nothing() {
    let mut ctl = controller();
    let t = ctl.transition(&in_mode(Mode::Assistant), Event::RetryRequested);
    assert!(t.effects.is_empty());
}

#[test]
fn test_assistant_mode_ignores_lock() {
    let mut ctl = controller();
    let mut state = in_mode(Mode::Assistant);
    state.locked = true;

    let t = ctl.transition(&state, input("Explain photosynthesis"));
    assert_eq!(t.effects, vec![Effect::InvokeAssistant]);

    let reply = ctl.transition(&t.state, Event::AssistantReply("Plants make food.".into()));
    assert_eq!(reply.replies(), vec!["Plants make food."]);
}

#[test]
fn test_stale_results_are_ignored() {
    let mut ctl = controller();
    let t = ctl.transition(&SessionState::new(), failed());
    assert_eq!(t.state.failed_attempts, 0);
    assert!(t.effects.is_empty());

    let t = ctl.transition(&in_mode(Mode::Auth), Event::AssistantReply("hi".into()));
    assert!(t.effects.is_empty());
}

use super::*;
use crate::util::notify::RecordingNotifier;

fn state(email: &str, password: &str) -> SignInState {
    SignInState { email: email.to_owned(), password: password.to_owned(), ..SignInState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn sign_in_state_default_is_empty_and_masked() {
    let s = SignInState::default();
    assert!(s.email.is_empty());
    assert!(s.password.is_empty());
    assert_eq!(s.visibility, PasswordVisibility::Masked);
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn update_email_replaces_value() {
    let mut s = state("old@example.com", "");
    s.update_email("new@example.com");
    assert_eq!(s.email, "new@example.com");
}

#[test]
fn update_email_accepts_anything() {
    let mut s = SignInState::default();
    s.update_email("  not an email  ");
    assert_eq!(s.email, "  not an email  ");
}

#[test]
fn update_password_replaces_value() {
    let mut s = state("", "first");
    s.update_password("second");
    assert_eq!(s.password, "second");
}

#[test]
fn keystrokes_echo_in_order() {
    let mut s = SignInState::default();
    let mut typed = String::new();
    for ch in "user@example.com".chars() {
        typed.push(ch);
        s.update_email(typed.clone());
    }
    assert_eq!(s.email, "user@example.com");

    let mut typed = String::new();
    for ch in "s3cr3t!".chars() {
        typed.push(ch);
        s.update_password(typed.clone());
    }
    assert_eq!(s.password, "s3cr3t!");
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn toggle_visibility_once_unmasks() {
    let mut s = SignInState::default();
    s.toggle_visibility();
    assert_eq!(s.visibility, PasswordVisibility::Plain);
    assert_eq!(s.visibility.input_type(), "text");
}

#[test]
fn toggle_visibility_twice_restores_mask() {
    let mut s = SignInState::default();
    s.toggle_visibility();
    s.toggle_visibility();
    assert_eq!(s.visibility, PasswordVisibility::Masked);
    assert_eq!(s.visibility.input_type(), "password");
}

#[test]
fn toggle_visibility_never_touches_password() {
    let mut s = state("a@b.com", "hunter2");
    for _ in 0..7 {
        s.toggle_visibility();
        assert_eq!(s.password, "hunter2");
    }
    assert_eq!(s.visibility, PasswordVisibility::Plain);
}

#[test]
fn toggle_label_describes_next_action() {
    assert_eq!(PasswordVisibility::Masked.toggle_label(), "Show password");
    assert_eq!(PasswordVisibility::Plain.toggle_label(), "Hide password");
}

#[test]
fn is_plain_matches_variant() {
    assert!(!PasswordVisibility::Masked.is_plain());
    assert!(PasswordVisibility::Plain.is_plain());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_missing_fields() {
    for (email, password) in [("", ""), ("", "secret"), ("user@example.com", ""), ("   ", "secret"), ("\t\n", "")] {
        assert_eq!(
            state(email, password).validate(),
            Err(SignInError::MissingFields),
            "expected rejection for {email:?}/{password:?}"
        );
    }
}

#[test]
fn validate_trims_email_only() {
    let s = state("  user@example.com ", " secret ");
    assert_eq!(
        s.validate(),
        Ok(Credentials { email: "user@example.com", password: " secret " })
    );
}

#[test]
fn validate_accepts_whitespace_password() {
    assert!(state("user@example.com", "   ").validate().is_ok());
}

#[test]
fn sign_in_error_message_is_generic() {
    assert_eq!(SignInError::MissingFields.to_string(), "Please enter both Email and Password.");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_empty_fields_shows_validation_notice() {
    let notifier = RecordingNotifier::default();
    let outcome = state("", "").submit(&notifier);
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(notifier.notices(), vec![Notice::Rejected(SignInError::MissingFields)]);
}

#[test]
fn submit_filled_fields_shows_progress_notice() {
    let notifier = RecordingNotifier::default();
    let outcome = state("user@example.com", "secret").submit(&notifier);
    assert_eq!(outcome, SubmitOutcome::Pending);
    assert_eq!(notifier.notices(), vec![Notice::SigningIn]);
}

#[test]
fn submit_does_not_mutate_state() {
    let notifier = RecordingNotifier::default();
    let s = state(" user@example.com ", "secret");
    let before = s.clone();
    s.submit(&notifier);
    assert_eq!(s, before);
}

#[test]
fn submit_presents_exactly_one_notice_per_attempt() {
    let notifier = RecordingNotifier::default();
    let s = state("user@example.com", "");
    s.submit(&notifier);
    s.submit(&notifier);
    assert_eq!(notifier.notices().len(), 2);
    assert!(notifier.notices().iter().all(|n| *n == Notice::Rejected(SignInError::MissingFields)));
}

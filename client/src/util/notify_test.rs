use super::*;

#[test]
fn rejected_notice_uses_validation_message() {
    let notice = Notice::Rejected(SignInError::MissingFields);
    assert_eq!(notice.message(), "Please enter both Email and Password.");
}

#[test]
fn signing_in_notice_uses_progress_message() {
    assert_eq!(Notice::SigningIn.message(), "Signing in...");
}

#[test]
fn handle_forwards_to_wrapped_notifier() {
    let recorder = Arc::new(RecordingNotifier::default());
    let handle = NotifierHandle::new(Arc::clone(&recorder));

    handle.notifier().notify(&Notice::SigningIn);
    handle.clone().notifier().notify(&Notice::Rejected(SignInError::MissingFields));

    assert_eq!(
        recorder.notices(),
        vec![Notice::SigningIn, Notice::Rejected(SignInError::MissingFields)]
    );
}

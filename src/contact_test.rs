use super::*;

#[test]
fn empty_message_is_rejected_without_reset() {
    let outcome = ContactForm::new("Ada", "ada@example.com", "").submit();
    assert_eq!(outcome, SubmitOutcome::Rejected { notice: INCOMPLETE_NOTICE });
    assert!(!outcome.resets_form());
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let outcome = ContactForm::new("   ", "ada@example.com", "hello").submit();
    assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
}

#[test]
fn complete_form_is_accepted_and_reset() {
    let outcome = ContactForm::new("  Ada ", "ada@example.com", "Hello there").submit();
    assert!(outcome.resets_form());
    assert_eq!(outcome.notice(), "Thank you, Ada! Your message has been recorded (placeholder).");
}

#[test]
fn default_form_is_incomplete() {
    assert_eq!(ContactForm::default().submit().notice(), INCOMPLETE_NOTICE);
}

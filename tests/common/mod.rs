use std::sync::Arc;

use form_session::schema::{catalog, FieldDefinition, FormSchema, InputKind, Validator};
use form_session::session::{FormSession, ManualClock, TransientTimings};

/// Two-field form used by the walkthrough scenarios.
#[allow(dead_code)]
pub fn name_and_phone() -> FormSchema {
    FormSchema::new(vec![
        FieldDefinition::new("name", "Full Name", InputKind::Text, Validator::MinTrimmedLen(3)),
        FieldDefinition::new("phone", "Phone", InputKind::Tel, Validator::ExactDigits(10)),
    ])
    .expect("valid schema")
}

/// Session on a hand-driven clock so timer expiry is deterministic.
#[allow(dead_code)]
pub fn session_with(schema: FormSchema) -> (FormSession, ManualClock) {
    let clock = ManualClock::default();
    let session =
        FormSession::with_clock(schema, Arc::new(clock.clone()), TransientTimings::default());
    (session, clock)
}

#[allow(dead_code)]
pub fn sports_session() -> (FormSession, ManualClock) {
    session_with(catalog::sports_profile())
}

/// Walks the built-in form to display mode with valid answers.
#[allow(dead_code)]
pub fn submit_sports_profile(session: &mut FormSession) {
    for (name, value) in valid_sports_answers() {
        session.set_field_value(name, value).expect("known field");
        session.advance_step().expect("wizard mode");
    }
}

#[allow(dead_code)]
pub fn valid_sports_answers() -> [(&'static str, &'static str); 7] {
    [
        ("name", "Alice Smith"),
        ("phone", "5551234567"),
        ("email", "alice@example.com"),
        ("city", "Porto"),
        ("sport", "Basketball"),
        ("team", "Celtics"),
        ("icon", "Larry Bird"),
    ]
}

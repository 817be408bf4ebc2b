mod common;

use common::{name_and_phone, session_with};
use form_session::cli::render::{render_fields, render_view};
use insta::assert_snapshot;

fn submitted() -> form_session::session::FormSession {
    let (mut session, _) = session_with(name_and_phone());
    session.set_field_value("name", "Alice").unwrap();
    session.advance_step().unwrap();
    session.set_field_value("phone", "1234567890").unwrap();
    session.advance_step().unwrap();
    session
}

#[test]
fn display_mode_lists_submitted_values() {
    let session = submitted();
    assert_snapshot!(render_view(&session.view()), @r"
    *** Form submitted successfully! ***
    Submitted Data
      Full Name: Alice
      Phone:     1234567890
    [Edit]
    ");
}

#[test]
fn last_wizard_step_offers_submit() {
    let (mut session, _) = session_with(name_and_phone());
    session.set_field_value("name", "Alice").unwrap();
    session.advance_step().unwrap();
    session.set_field_value("phone", "555").unwrap();

    assert_snapshot!(render_view(&session.view()), @r"
    Step 2 of 2
    >> Phone (tel): 555
    [Submit]
    ");
}

#[test]
fn edit_mode_shows_errors_under_their_fields() {
    let mut session = submitted();
    session.begin_edit().unwrap();
    session.set_field_value("phone", "12").unwrap();
    session.save_edit().unwrap();

    let screen = render_view(&session.view());
    let lines: Vec<&str> = screen.lines().collect();
    let phone = lines
        .iter()
        .position(|line| line.trim_start().starts_with("Phone:"))
        .expect("phone row");
    assert_eq!(lines[phone + 1].trim(), "! Please enter a valid phone.");
    assert_eq!(lines.last().copied(), Some("[Save] [Cancel]"));
    assert!(!screen.contains("Please enter a valid full name."));
}

#[test]
fn field_listing_includes_input_kinds() {
    let (session, _) = session_with(name_and_phone());
    assert_snapshot!(render_fields(&session.view()), @r"
    1. name     Full Name [text]
    2. phone    Phone [tel]
    ");
}

//! Plain-text rendering of a [`SessionView`].

use std::fmt::Write;

use crate::session::{FieldView, Mode, PresentationCue, SessionView};

const ERROR_MARK: &str = "!";

/// Renders the whole screen for the current view.
pub fn render_view(view: &SessionView) -> String {
    let mut out = String::new();

    if let Some(message) = &view.transient_message {
        let _ = writeln!(out, "*** {message} ***");
    }

    match view.mode {
        Mode::Wizard => render_wizard(view, &mut out),
        Mode::Display => render_display(view, &mut out),
        Mode::Edit => render_edit(view, &mut out),
    }
    out
}

fn render_wizard(view: &SessionView, out: &mut String) {
    let _ = writeln!(out, "Step {} of {}", view.current_step + 1, view.step_count);
    if let Some(field) = &view.current_field {
        let marker = match view.cue {
            PresentationCue::Shake => "~~",
            PresentationCue::FadeIn => ">>",
        };
        let _ = writeln!(
            out,
            "{marker} {} ({}): {}",
            field.label, field.input_kind, field.value
        );
    }
    if let Some(error) = &view.step_error {
        let _ = writeln!(out, "   {ERROR_MARK} {error}");
    }
    if let Some(label) = view.advance_label {
        let _ = writeln!(out, "[{label}]");
    }
}

fn render_display(view: &SessionView, out: &mut String) {
    if let Some(heading) = view.heading {
        let _ = writeln!(out, "{heading}");
    }
    let width = label_width(&view.fields);
    for field in &view.fields {
        let value = field.submitted.as_deref().unwrap_or_default();
        let _ = writeln!(out, "  {:<width$} {}", format!("{}:", field.label), value);
    }
    let _ = writeln!(out, "[Edit]");
}

fn render_edit(view: &SessionView, out: &mut String) {
    let _ = writeln!(out, "Editing");
    let width = label_width(&view.fields);
    for field in &view.fields {
        let _ = writeln!(out, "  {:<width$} {}", format!("{}:", field.label), field.value);
        if let Some(error) = &field.error {
            let _ = writeln!(out, "    {ERROR_MARK} {error}");
        }
    }
    let _ = writeln!(out, "[Save] [Cancel]");
}

fn label_width(fields: &[FieldView]) -> usize {
    fields
        .iter()
        .map(|field| field.label.chars().count() + 1)
        .max()
        .unwrap_or(0)
}

/// One line per schema field: name, label, input kind.
pub fn render_fields(view: &SessionView) -> String {
    let mut out = String::new();
    for (index, field) in view.fields.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {:<8} {} [{}]",
            index + 1,
            field.name,
            field.label,
            field.input_kind
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::catalog::sports_profile;
    use crate::session::FormSession;

    #[test]
    fn wizard_screen_shows_progress_and_button() {
        let session = FormSession::new(sports_profile());
        let screen = render_view(&session.view());
        assert!(screen.starts_with("Step 1 of 7\n"));
        assert!(screen.contains(">> Full Name (text): "));
        assert!(screen.ends_with("[Next]\n"));
    }

    #[test]
    fn rejected_step_shows_error_and_shake_marker() {
        let mut session = FormSession::new(sports_profile());
        session.set_field_value("name", "Al").unwrap();
        session.advance_step().unwrap();
        let screen = render_view(&session.view());
        assert!(screen.contains("~~ Full Name (text): \n"));
        assert!(screen.contains("   ! Please enter a valid full name.\n"));
    }
}

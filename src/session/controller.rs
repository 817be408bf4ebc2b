//! Form Session Controller.
//!
//! Owns the session state and exposes the only operations allowed to mutate
//! it. Wizard mode checks one field per advance; edit mode checks every field
//! on save and either commits a full snapshot or nothing.

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::errors::{FormError, FormResult};
use crate::schema::{FieldDefinition, FormSchema};
use crate::session::clock::{Clock, SystemClock};
use crate::session::events::{FormEvent, Transition};
use crate::session::state::{Mode, SessionState};
use crate::session::timers::{EffectKind, TimerToken, TransientTimings};
use crate::session::view::{FieldView, PresentationCue, SessionView, DISPLAY_HEADING};

pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";
pub const EDIT_SAVED_MESSAGE: &str = "Form edited and submitted successfully!";

const NEXT_LABEL: &str = "Next";
const SUBMIT_LABEL: &str = "Submit";

pub struct FormSession {
    id: Uuid,
    schema: FormSchema,
    state: SessionState,
    clock: Arc<dyn Clock>,
    timings: TransientTimings,
    scheduled: Vec<TimerToken>,
}

impl FormSession {
    /// Starts a session on the system clock with default effect durations.
    pub fn new(schema: FormSchema) -> Self {
        Self::with_clock(schema, Arc::new(SystemClock), TransientTimings::default())
    }

    pub fn with_clock(schema: FormSchema, clock: Arc<dyn Clock>, timings: TransientTimings) -> Self {
        let state = SessionState::new(&schema);
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, fields = schema.len(), "form session started");
        Self {
            id,
            schema,
            state,
            clock,
            timings,
            scheduled: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The field the wizard is asking for; `None` outside wizard mode.
    pub fn current_field(&self) -> Option<&FieldDefinition> {
        match self.state.mode {
            Mode::Wizard => self.schema.get(self.state.current_step),
            Mode::Display | Mode::Edit => None,
        }
    }

    /// Overwrites a field's value in any mode. Validation waits for
    /// advance or save.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        let field = self
            .schema
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.state.values.insert(field.name.clone(), value.into());
        Ok(())
    }

    /// Validates the active wizard field and moves forward, submitting on
    /// the last step.
    pub fn advance_step(&mut self) -> FormResult<Transition> {
        self.require_mode(Mode::Wizard, "advance_step")?;

        let step = self.state.current_step;
        let Some(field) = self.schema.get(step) else {
            return Err(FormError::WrongMode {
                operation: "advance_step",
                mode: self.state.mode,
            });
        };
        let name = field.name.clone();
        let value = self.state.value(&name).unwrap_or_default();

        if !field.is_valid(value) {
            let message = field.error_message();
            self.state.step_error = Some(message.clone());
            self.state.values.insert(name.clone(), String::new());
            self.schedule_shake();
            tracing::debug!(session = %self.id, field = %name, step, "wizard input rejected");
            return Ok(Transition::Rejected {
                field: name,
                message,
            });
        }

        self.state.step_error = None;
        if step < self.schema.last_index() {
            self.state.current_step = step + 1;
            tracing::debug!(session = %self.id, step = step + 1, "wizard advanced");
            return Ok(Transition::Advanced { step: step + 1 });
        }

        self.state.submitted_values = Some(self.state.values.clone());
        self.state.mode = Mode::Display;
        // Nothing returns the session to wizard mode, but a re-entry would
        // start from the first field.
        self.state.current_step = 0;
        self.schedule_message(SUBMITTED_MESSAGE);
        tracing::info!(session = %self.id, "form submitted");
        Ok(Transition::Submitted)
    }

    pub fn begin_edit(&mut self) -> FormResult<Transition> {
        self.require_mode(Mode::Display, "begin_edit")?;
        self.state.mode = Mode::Edit;
        self.state.edit_errors.clear();
        tracing::debug!(session = %self.id, "edit started");
        Ok(Transition::EditStarted)
    }

    /// Validates every field. Commits a snapshot only when all pass; otherwise
    /// records one message per failing field and keeps every value as typed.
    pub fn save_edit(&mut self) -> FormResult<Transition> {
        self.require_mode(Mode::Edit, "save_edit")?;

        let errors: BTreeMap<String, String> = self
            .schema
            .fields()
            .iter()
            .filter(|field| !field.is_valid(self.state.value(&field.name).unwrap_or_default()))
            .map(|field| (field.name.clone(), field.error_message()))
            .collect();

        if !errors.is_empty() {
            let fields: Vec<String> = self
                .schema
                .names()
                .filter(|name| errors.contains_key(*name))
                .map(str::to_string)
                .collect();
            tracing::debug!(session = %self.id, invalid = fields.len(), "edit save rejected");
            self.state.edit_errors = errors;
            return Ok(Transition::SaveRejected { fields });
        }

        self.state.submitted_values = Some(self.state.values.clone());
        self.state.edit_errors.clear();
        self.state.mode = Mode::Display;
        self.schedule_message(EDIT_SAVED_MESSAGE);
        tracing::info!(session = %self.id, "edited form saved");
        Ok(Transition::Saved)
    }

    /// Leaves edit mode without validating. Values typed during the edit
    /// stay in place; only the submitted snapshot is untouched.
    pub fn cancel_edit(&mut self) -> FormResult<Transition> {
        self.require_mode(Mode::Edit, "cancel_edit")?;
        self.state.mode = Mode::Display;
        self.state.edit_errors.clear();
        tracing::debug!(session = %self.id, "edit cancelled");
        Ok(Transition::EditCancelled)
    }

    /// Single entry point for presentation events.
    pub fn dispatch(&mut self, event: FormEvent) -> FormResult<Transition> {
        match event {
            FormEvent::FieldChanged { name, value } => {
                self.set_field_value(&name, value)?;
                Ok(Transition::ValueChanged { field: name })
            }
            FormEvent::Advance => self.advance_step(),
            FormEvent::BeginEdit => self.begin_edit(),
            FormEvent::SaveEdit => self.save_edit(),
            FormEvent::CancelEdit => self.cancel_edit(),
        }
    }

    /// Timers scheduled since the last call, for hosts that arm real
    /// one-shot callbacks and report back through [`FormSession::fire`].
    pub fn take_scheduled(&mut self) -> Vec<TimerToken> {
        std::mem::take(&mut self.scheduled)
    }

    /// Handles a timer callback. Superseded or cancelled tokens do nothing.
    pub fn fire(&mut self, token: &TimerToken) -> bool {
        let cleared = match token.effect {
            EffectKind::Shake => self.state.shake.fire(token),
            EffectKind::Message => self.state.message.fire(token),
        };
        if cleared {
            tracing::trace!(session = %self.id, effect = ?token.effect, "transient effect cleared");
        }
        cleared
    }

    /// Clears every effect whose deadline has passed. Returns what was cleared.
    pub fn expire_due(&mut self) -> Vec<EffectKind> {
        let now = self.clock.now();
        let mut cleared = Vec::new();
        if self.state.shake.expire(now) {
            cleared.push(EffectKind::Shake);
        }
        if self.state.message.expire(now) {
            cleared.push(EffectKind::Message);
        }
        cleared
    }

    /// Earliest pending deadline, if any effect is active.
    pub fn next_deadline(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        [self.state.shake.deadline(), self.state.message.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Invalidates every pending timer ahead of dropping the session.
    pub fn teardown(&mut self) {
        self.state.shake.cancel();
        self.state.message.cancel();
        self.scheduled.clear();
        tracing::debug!(session = %self.id, "form session torn down");
    }

    pub fn view(&self) -> SessionView {
        let state = &self.state;
        let submitted = state.submitted_values.as_ref();
        let fields: Vec<FieldView> = self
            .schema
            .fields()
            .iter()
            .map(|field| {
                FieldView::build(
                    field,
                    &state.values,
                    submitted,
                    state.edit_errors.get(&field.name),
                )
            })
            .collect();

        let wizard = state.mode == Mode::Wizard;
        let current_field = self
            .current_field()
            .map(|field| FieldView::build(field, &state.values, submitted, None));
        let advance_label = wizard.then(|| {
            if state.current_step < self.schema.last_index() {
                NEXT_LABEL
            } else {
                SUBMIT_LABEL
            }
        });
        let shake = state.is_shaking();

        SessionView {
            session_id: self.id,
            mode: state.mode,
            current_step: state.current_step,
            step_count: self.schema.len(),
            current_field,
            advance_label,
            heading: (state.mode == Mode::Display).then_some(DISPLAY_HEADING),
            step_error: state.step_error.clone(),
            fields,
            has_submission: submitted.is_some(),
            transient_message: state.transient_message().map(str::to_string),
            shake,
            cue: if shake {
                PresentationCue::Shake
            } else {
                PresentationCue::FadeIn
            },
        }
    }

    fn require_mode(&self, expected: Mode, operation: &'static str) -> FormResult<()> {
        if self.state.mode == expected {
            return Ok(());
        }
        tracing::warn!(
            session = %self.id,
            operation,
            mode = %self.state.mode,
            "operation called outside its mode"
        );
        Err(FormError::WrongMode {
            operation,
            mode: self.state.mode,
        })
    }

    fn schedule_shake(&mut self) {
        let token = self
            .state
            .shake
            .arm((), self.clock.now(), self.timings.shake);
        self.push_scheduled(token);
    }

    fn schedule_message(&mut self, message: &str) {
        let token = self
            .state
            .message
            .arm(message.to_string(), self.clock.now(), self.timings.message);
        self.push_scheduled(token);
    }

    fn push_scheduled(&mut self, token: TimerToken) {
        self.scheduled.retain(|pending| pending.effect != token.effect);
        self.scheduled.push(token);
    }
}

impl Drop for FormSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::catalog::sports_profile;
    use crate::session::clock::ManualClock;

    fn session() -> (FormSession, ManualClock) {
        let clock = ManualClock::default();
        let session = FormSession::with_clock(
            sports_profile(),
            Arc::new(clock.clone()),
            TransientTimings::default(),
        );
        (session, clock)
    }

    fn fill_valid(session: &mut FormSession) {
        for (name, value) in [
            ("name", "Alice"),
            ("phone", "1234567890"),
            ("email", "alice@example.com"),
            ("city", "Lisbon"),
            ("sport", "Football"),
            ("team", "Benfica"),
            ("icon", "Eusebio"),
        ] {
            session.set_field_value(name, value).unwrap();
            session.advance_step().unwrap();
        }
    }

    #[test]
    fn new_session_starts_empty_in_wizard() {
        let (session, _) = session();
        assert_eq!(session.state().mode(), Mode::Wizard);
        assert_eq!(session.state().current_step(), 0);
        assert_eq!(session.state().values().len(), 7);
        assert!(session.state().values().values().all(String::is_empty));
        assert!(session.state().submitted_values().is_none());
        assert_eq!(session.current_field().map(|f| f.name.as_str()), Some("name"));
    }

    #[test]
    fn set_field_value_rejects_unknown_names() {
        let (mut session, _) = session();
        let err = session.set_field_value("nickname", "Ace").unwrap_err();
        assert_eq!(err, FormError::UnknownField("nickname".into()));
    }

    #[test]
    fn wrong_mode_calls_leave_state_untouched() {
        let (mut session, _) = session();
        session.set_field_value("name", "Alice").unwrap();

        for result in [session.save_edit(), session.cancel_edit(), session.begin_edit()] {
            assert!(matches!(
                result,
                Err(FormError::WrongMode {
                    mode: Mode::Wizard,
                    ..
                })
            ));
        }
        assert_eq!(session.state().mode(), Mode::Wizard);
        assert_eq!(session.state().value("name"), Some("Alice"));
        assert!(session.take_scheduled().is_empty());
    }

    #[test]
    fn advance_in_display_mode_is_refused() {
        let (mut session, _) = session();
        fill_valid(&mut session);
        let err = session.advance_step().unwrap_err();
        assert_eq!(
            err,
            FormError::WrongMode {
                operation: "advance_step",
                mode: Mode::Display
            }
        );
        assert_eq!(err.to_string(), "`advance_step` is not available in display mode");
    }

    #[test]
    fn final_step_resets_step_and_schedules_message() {
        let (mut session, _) = session();
        fill_valid(&mut session);

        assert_eq!(session.state().mode(), Mode::Display);
        assert_eq!(session.state().current_step(), 0);
        assert_eq!(session.state().transient_message(), Some(SUBMITTED_MESSAGE));
        let scheduled = session.take_scheduled();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].effect, EffectKind::Message);
    }

    #[test]
    fn rejection_schedules_shake_and_clears_value() {
        let (mut session, clock) = session();
        session.set_field_value("name", "Al").unwrap();
        let transition = session.advance_step().unwrap();

        assert_eq!(
            transition,
            Transition::Rejected {
                field: "name".into(),
                message: "Please enter a valid full name.".into()
            }
        );
        assert!(session.state().is_shaking());
        assert_eq!(session.view().cue, PresentationCue::Shake);

        clock.advance_ms(500);
        assert_eq!(session.expire_due(), vec![EffectKind::Shake]);
        assert!(!session.state().is_shaking());
        assert_eq!(session.view().cue, PresentationCue::FadeIn);
    }

    #[test]
    fn view_labels_follow_progress() {
        let (mut session, _) = session();
        assert_eq!(session.view().advance_label, Some("Next"));
        for (name, value) in [
            ("name", "Alice"),
            ("phone", "1234567890"),
            ("email", "alice@example.com"),
            ("city", "Lisbon"),
            ("sport", "Football"),
            ("team", "Benfica"),
        ] {
            session.set_field_value(name, value).unwrap();
            session.advance_step().unwrap();
        }
        let view = session.view();
        assert_eq!(view.current_step, 6);
        assert_eq!(view.advance_label, Some("Submit"));
        assert_eq!(view.heading, None);

        session.set_field_value("icon", "Eusebio").unwrap();
        session.advance_step().unwrap();
        let view = session.view();
        assert_eq!(view.advance_label, None);
        assert_eq!(view.heading, Some("Submitted Data"));
        assert!(view.current_field.is_none());
        assert!(view.has_submission);
    }

    #[test]
    fn teardown_invalidates_handed_out_tokens() {
        let (mut session, _) = session();
        fill_valid(&mut session);
        let tokens = session.take_scheduled();
        session.teardown();
        assert!(session.state().transient_message().is_none());
        assert!(tokens.iter().all(|token| !session.fire(token)));
        assert!(session.next_deadline().is_none());
    }

    #[test]
    fn dispatch_routes_events() {
        let (mut session, _) = session();
        let changed = session
            .dispatch(FormEvent::FieldChanged {
                name: "name".into(),
                value: "Alice".into(),
            })
            .unwrap();
        assert_eq!(changed, Transition::ValueChanged { field: "name".into() });
        assert_eq!(
            session.dispatch(FormEvent::Advance).unwrap(),
            Transition::Advanced { step: 1 }
        );
    }
}

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::schema::{FieldDefinition, InputKind};
use crate::session::state::Mode;

/// Heading shown above the read-only summary.
pub const DISPLAY_HEADING: &str = "Submitted Data";

/// Entry animation for the active wizard field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationCue {
    FadeIn,
    Shake,
}

/// One field as the presentation layer needs to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub input_kind: InputKind,
    pub required: bool,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldView {
    pub(crate) fn build(
        field: &FieldDefinition,
        values: &BTreeMap<String, String>,
        submitted: Option<&BTreeMap<String, String>>,
        error: Option<&String>,
    ) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            input_kind: field.input_kind,
            required: field.required,
            value: values.get(&field.name).cloned().unwrap_or_default(),
            submitted: submitted.and_then(|snapshot| snapshot.get(&field.name).cloned()),
            error: error.cloned(),
        }
    }
}

/// Everything a renderer reads from the session, frozen at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub mode: Mode,
    pub current_step: usize,
    pub step_count: usize,
    /// Active field in wizard mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_field: Option<FieldView>,
    /// `"Next"` or `"Submit"` in wizard mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_error: Option<String>,
    pub fields: Vec<FieldView>,
    pub has_submission: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transient_message: Option<String>,
    pub shake: bool,
    pub cue: PresentationCue,
}

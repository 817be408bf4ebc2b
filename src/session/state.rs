use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::FormSchema;
use crate::session::timers::{EffectKind, TransientSlot};

/// Top-level mode of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One field at a time, validated before advancing.
    Wizard,
    /// Read-only summary of the last submitted values.
    Display,
    /// All fields at once, gated by a full validation on save.
    Edit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Wizard => "wizard",
            Mode::Display => "display",
            Mode::Edit => "edit",
        };
        f.write_str(label)
    }
}

/// Mutable session data. Only [`crate::session::FormSession`] writes to it.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) values: BTreeMap<String, String>,
    pub(crate) mode: Mode,
    pub(crate) current_step: usize,
    pub(crate) step_error: Option<String>,
    pub(crate) submitted_values: Option<BTreeMap<String, String>>,
    pub(crate) edit_errors: BTreeMap<String, String>,
    pub(crate) message: TransientSlot<String>,
    pub(crate) shake: TransientSlot<()>,
}

impl SessionState {
    /// Fresh state: every field empty, wizard on the first step.
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .names()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            mode: Mode::Wizard,
            current_step: 0,
            step_error: None,
            submitted_values: None,
            edit_errors: BTreeMap::new(),
            message: TransientSlot::new(EffectKind::Message),
            shake: TransientSlot::new(EffectKind::Shake),
        }
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_error(&self) -> Option<&str> {
        self.step_error.as_deref()
    }

    pub fn submitted_values(&self) -> Option<&BTreeMap<String, String>> {
        self.submitted_values.as_ref()
    }

    pub fn edit_errors(&self) -> &BTreeMap<String, String> {
        &self.edit_errors
    }

    pub fn transient_message(&self) -> Option<&str> {
        self.message.current().map(String::as_str)
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }
}

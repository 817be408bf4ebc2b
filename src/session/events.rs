use serde::{Deserialize, Serialize};

/// User actions forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    FieldChanged { name: String, value: String },
    Advance,
    BeginEdit,
    SaveEdit,
    CancelEdit,
}

/// Outcome of a controller operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum Transition {
    ValueChanged { field: String },
    /// Wizard moved on to `step`.
    Advanced { step: usize },
    /// Wizard stayed put; the field was cleared.
    Rejected { field: String, message: String },
    /// Final wizard step accepted; the session is now in display mode.
    Submitted,
    EditStarted,
    /// Bulk save failed for these fields, in schema order.
    SaveRejected { fields: Vec<String> },
    Saved,
    EditCancelled,
}

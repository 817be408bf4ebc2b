use serde::{Deserialize, Serialize};

/// Capability implemented by anything that can judge a raw field value.
///
/// Implementations must be pure: the same input always yields the same
/// verdict and nothing is mutated.
pub trait FieldValidator {
    fn accepts(&self, value: &str) -> bool;
}

/// Built-in validation predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "arg", rename_all = "snake_case")]
pub enum Validator {
    /// Trimmed value has at least this many UTF-16 code units.
    MinTrimmedLen(usize),
    /// Exactly this many ASCII digits and nothing else.
    ExactDigits(usize),
    /// `local@domain.tld` shape.
    EmailShape,
    /// Trimmed value is not empty.
    NonBlank,
}

impl FieldValidator for Validator {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Validator::MinTrimmedLen(min) => trimmed(value).encode_utf16().count() >= *min,
            Validator::ExactDigits(count) => {
                value.len() == *count && value.bytes().all(|b| b.is_ascii_digit())
            }
            Validator::EmailShape => is_email_shape(value),
            Validator::NonBlank => !trimmed(value).is_empty(),
        }
    }
}

/// Whitespace as form inputs see it: Unicode `White_Space` without NEL,
/// plus the byte order mark.
fn is_form_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{0085}') || ch == '\u{FEFF}'
}

fn trimmed(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// One `@`, no whitespace on either side, and a domain with a dot that has
/// at least one character on each side of it.
fn is_email_shape(value: &str) -> bool {
    if value.chars().any(is_form_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx < last)
}

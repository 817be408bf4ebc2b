use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{FormError, FormResult};
use crate::schema::validator::{FieldValidator, Validator};

/// Semantic input type handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Tel,
    Email,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputKind::Text => "text",
            InputKind::Tel => "tel",
            InputKind::Email => "email",
        };
        f.write_str(label)
    }
}

/// Declarative description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    pub input_kind: InputKind,
    pub validator: Validator,
    #[serde(default = "FieldDefinition::default_required")]
    pub required: bool,
}

impl FieldDefinition {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        input_kind: InputKind,
        validator: Validator,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input_kind,
            validator,
            required: true,
        }
    }

    fn default_required() -> bool {
        true
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.validator.accepts(value)
    }

    /// Message shown when the field's value is rejected.
    pub fn error_message(&self) -> String {
        format!("Please enter a valid {}.", self.label.to_lowercase())
    }
}

/// Ordered, immutable list of fields that defines wizard sequence and
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    pub(super) fields: Vec<FieldDefinition>,
}

impl FormSchema {
    /// Builds a schema, rejecting empty field lists and duplicate names.
    pub fn new(fields: Vec<FieldDefinition>) -> FormResult<Self> {
        if fields.is_empty() {
            return Err(FormError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: construction guarantees at least one field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.fields.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&FieldDefinition> {
        self.fields.get(index)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

impl<'de> Deserialize<'de> for FormSchema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            fields: Vec<FieldDefinition>,
        }

        let raw = Raw::deserialize(deserializer)?;
        FormSchema::new(raw.fields).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, label: &str) -> FieldDefinition {
        FieldDefinition::new(name, label, InputKind::Text, Validator::NonBlank)
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = FormSchema::new(vec![text("city", "City"), text("city", "Town")]).unwrap_err();
        assert_eq!(err, FormError::DuplicateField("city".into()));
    }

    #[test]
    fn empty_schema_is_rejected() {
        assert_eq!(FormSchema::new(Vec::new()).unwrap_err(), FormError::EmptySchema);
    }

    #[test]
    fn error_message_lowercases_label() {
        let field = text("sport", "Favorite Sport");
        assert_eq!(field.error_message(), "Please enter a valid favorite sport.");
    }

    #[test]
    fn lookup_preserves_declared_order() {
        let schema = FormSchema::new(vec![text("b", "B"), text("a", "A")]).unwrap();
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(schema.get(1).map(|f| f.name.as_str()), Some("a"));
        assert_eq!(schema.last_index(), 1);
        assert!(schema.field("a").is_some());
        assert!(schema.field("c").is_none());
    }

    #[test]
    fn deserializing_enforces_unique_names() {
        let json = r#"{"fields":[
            {"name":"x","label":"X","input_kind":"text","validator":{"rule":"non_blank"}},
            {"name":"x","label":"Y","input_kind":"text","validator":{"rule":"non_blank"}}
        ]}"#;
        assert!(serde_json::from_str::<FormSchema>(json).is_err());
    }
}

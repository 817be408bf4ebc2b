//! Static field definitions for a form: ordered fields, their labels, input
//! kinds and validation predicates.

pub mod catalog;
pub mod field;
pub mod validator;

pub use field::{FieldDefinition, FormSchema, InputKind};
pub use validator::{FieldValidator, Validator};

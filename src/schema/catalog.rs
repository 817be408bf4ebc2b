use once_cell::sync::Lazy;

use crate::schema::{FieldDefinition, FormSchema, InputKind, Validator};

static SPORTS_PROFILE: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    fields: sports_profile_fields(),
});

/// The built-in seven-field fan profile form.
pub fn sports_profile() -> FormSchema {
    SPORTS_PROFILE.clone()
}

fn sports_profile_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("name", "Full Name", InputKind::Text, Validator::MinTrimmedLen(3)),
        FieldDefinition::new("phone", "Phone", InputKind::Tel, Validator::ExactDigits(10)),
        FieldDefinition::new("email", "Email", InputKind::Email, Validator::EmailShape),
        FieldDefinition::new("city", "City", InputKind::Text, Validator::MinTrimmedLen(3)),
        FieldDefinition::new("sport", "Favorite Sport", InputKind::Text, Validator::NonBlank),
        FieldDefinition::new("team", "Favorite Team", InputKind::Text, Validator::NonBlank),
        FieldDefinition::new(
            "icon",
            "Favorite Sports Icon",
            InputKind::Text,
            Validator::NonBlank,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sports_profile_has_unique_ordered_fields() {
        let schema = sports_profile();
        assert_eq!(
            schema.names().collect::<Vec<_>>(),
            vec!["name", "phone", "email", "city", "sport", "team", "icon"]
        );
        assert!(FormSchema::new(schema.fields().to_vec()).is_ok());
        assert!(schema.fields().iter().all(|field| field.required));
    }

    #[test]
    fn sports_profile_input_kinds() {
        let schema = sports_profile();
        assert_eq!(schema.field("phone").map(|f| f.input_kind), Some(InputKind::Tel));
        assert_eq!(schema.field("email").map(|f| f.input_kind), Some(InputKind::Email));
        assert_eq!(schema.field("icon").map(|f| f.input_kind), Some(InputKind::Text));
    }
}

//! Shape evaluation for JSON payloads. Pure logic, no database access.

use serde_json::{Map, Value};
use validator::ValidationErrors;

use super::rules::{
    push_error, FieldErrors, FieldRule, MSG_INVALID_INPUT, MSG_LENGTH, MSG_MISSING,
    MSG_NOT_STRING, MSG_NULL, MSG_UNKNOWN_FIELD, SCHEMA_KEY,
};

/// Outcome of the shape pass.
#[derive(Debug, Default)]
pub struct ShapeCheck {
    /// Fields that are present and hold a string.
    pub values: Map<String, Value>,
    /// Everything that failed, keyed by field.
    pub errors: FieldErrors,
}

impl ShapeCheck {
    /// True when the body was not an object at all, so no field was inspected.
    pub fn is_rejected(&self) -> bool {
        self.errors.contains_key(SCHEMA_KEY)
    }

    /// The string value of `field`, or empty when absent or invalid.
    pub fn string(&self, field: &str) -> String {
        self.optional_string(field).unwrap_or_default()
    }

    pub fn optional_string(&self, field: &str) -> Option<String> {
        self.values
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// Check presence, nullability, type and unknown keys for every rule.
pub fn evaluate_shape(rules: &[FieldRule], body: &Value) -> ShapeCheck {
    let mut check = ShapeCheck::default();

    let Some(object) = body.as_object() else {
        push_error(&mut check.errors, SCHEMA_KEY, MSG_INVALID_INPUT);
        return check;
    };

    for key in object.keys() {
        if !rules.iter().any(|rule| rule.field == key) {
            push_error(&mut check.errors, key, MSG_UNKNOWN_FIELD);
        }
    }

    for rule in rules {
        match object.get(rule.field) {
            None if rule.required => push_error(&mut check.errors, rule.field, MSG_MISSING),
            Some(Value::Null) if rule.required => {
                push_error(&mut check.errors, rule.field, MSG_NULL)
            }
            None | Some(Value::Null) => {}
            Some(value @ Value::String(_)) => {
                check.values.insert(rule.field.to_string(), value.clone());
            }
            Some(_) => push_error(&mut check.errors, rule.field, MSG_NOT_STRING),
        }
    }

    check
}

/// Fold `validator` results into `errors`.
///
/// Fields that already carry a shape error are skipped: their placeholder
/// value says nothing about what the caller sent. `length` failures are
/// reported as [`MSG_LENGTH`]; other codes use their own message, if any.
pub fn merge_validator_errors(errors: &mut FieldErrors, result: Result<(), ValidationErrors>) {
    let Err(failures) = result else {
        return;
    };

    let mut length_errors = FieldErrors::new();
    for (field, field_errors) in failures.field_errors() {
        let field = field.to_string();
        if errors.contains_key(&field) {
            continue;
        }
        for err in field_errors {
            let message = match (&err.message, err.code.as_ref()) {
                (Some(message), _) => message.to_string(),
                (None, "length") => MSG_LENGTH.to_string(),
                (None, code) => code.to_string(),
            };
            push_error(&mut length_errors, &field, message);
        }
    }
    errors.append(&mut length_errors);
}

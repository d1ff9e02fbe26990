//! Student record and request-body validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A persisted student row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Body of create and update requests. Absent fields decode to their zero value so that the
/// validator, not the decoder, reports them. An `id` in the body is ignored.
/// Capitalised keys (`Name`, `Email`, `Age`) are accepted as well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudentPayload {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Age")]
    pub age: i64,
}

impl StudentPayload {
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// Borrowed view of one payload field, as seen by a rule.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
}

impl FieldValue<'_> {
    fn is_zero(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Int(n) => *n == 0,
        }
    }
}

/// Constraint attached to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty string or non-zero integer. Zero is indistinguishable from absent.
    Required,
}

impl Rule {
    pub fn tag(&self) -> &'static str {
        match self {
            Rule::Required => "required",
        }
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        match self {
            Rule::Required => !value.is_zero(),
        }
    }
}

struct FieldRule {
    field: &'static str,
    rule: Rule,
    value: fn(&StudentPayload) -> FieldValue<'_>,
}

/// One failed rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub tag: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            "required" => write!(f, "field {} is required field", self.field),
            _ => write!(f, "field {} is invalid field", self.field),
        }
    }
}

/// All failed rules for a payload, in field declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Rule table for [`StudentPayload`]. Built once per process, see [`validator`].
pub struct StudentValidator {
    rules: Vec<FieldRule>,
}

impl StudentValidator {
    fn new() -> Self {
        StudentValidator {
            rules: vec![
                FieldRule {
                    field: "name",
                    rule: Rule::Required,
                    value: |p| FieldValue::Text(&p.name),
                },
                FieldRule {
                    field: "email",
                    rule: Rule::Required,
                    value: |p| FieldValue::Text(&p.email),
                },
                FieldRule {
                    field: "age",
                    rule: Rule::Required,
                    value: |p| FieldValue::Int(p.age),
                },
            ],
        }
    }

    /// Check every rule; collects all failures rather than stopping at the first.
    pub fn validate(&self, payload: &StudentPayload) -> Result<(), ValidationErrors> {
        let failed: Vec<FieldError> = self
            .rules
            .iter()
            .filter(|r| !r.rule.check((r.value)(payload)))
            .map(|r| FieldError {
                field: r.field,
                tag: r.rule.tag(),
            })
            .collect();
        if failed.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(failed))
        }
    }
}

/// Process-wide validator, initialised on first use and shared read-only.
pub fn validator() -> &'static StudentValidator {
    static VALIDATOR: OnceLock<StudentValidator> = OnceLock::new();
    VALIDATOR.get_or_init(StudentValidator::new)
}

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::errors::Failure;

// A single request field that failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

// Field violations kept in the order they were recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldViolations {
    violations: Vec<FieldViolation>,
}

impl FieldViolations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.push(field, message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldViolation> {
        self.violations.iter()
    }

    // One message per field. The first message recorded for a field wins and
    // later ones for the same field are dropped.
    pub fn first_per_field(&self) -> BTreeMap<String, String> {
        self.violations
            .iter()
            .fold(BTreeMap::new(), |mut fields, violation| {
                fields
                    .entry(violation.field.clone())
                    .or_insert_with(|| violation.message.clone());
                fields
            })
    }

    pub fn into_result(self) -> Result<(), Failure> {
        if self.is_empty() {
            return Ok(());
        }
        Err(Failure::ValidationFailed(self))
    }
}

impl<F, M> FromIterator<(F, M)> for FieldViolations
where
    F: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut violations = Self::new();
        for (field, message) in iter {
            violations.push(field, message);
        }
        violations
    }
}

impl<'a> IntoIterator for &'a FieldViolations {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field violation(s)", self.len())?;
        for (index, violation) in self.violations.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

// regenchoice-core/src/domain/validation/report.rs

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Prefix that marks advisory entries in the flat message list.
pub const WARNING_MARKER: &str = "⚠️ ";

/// Outcome of validating one question.
///
/// `errors` block a save, `warnings` are advisory only. A question is valid
/// exactly when `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Errors followed by warnings, warnings prefixed with [`WARNING_MARKER`].
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .cloned()
            .chain(
                self.warnings
                    .iter()
                    .map(|w| format!("{}{}", WARNING_MARKER, w)),
            )
            .collect()
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 3)?;
        state.serialize_field("valid", &self.valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}

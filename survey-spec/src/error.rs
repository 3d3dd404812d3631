/// Why a single answer failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A required field was left blank (or a declaration unticked).
    #[error("is required")]
    MissingRequired,

    /// A likert answer parsed to a point outside 1-5.
    #[error("must be between 1 and 5")]
    OutOfRange,

    /// A likert answer that is neither blank nor a labelled point.
    #[error("is not a valid response")]
    MalformedText,
}

/// A single collected validation failure.
///
/// Failures are non-fatal: the engine collects all of them in section order
/// so the participant sees every problem at once, and the UI places each
/// one inline next to its field via `field_key`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{section}] {label} {kind}.")]
pub struct ValidationFailure {
    /// Section (or component) title, for the summary list.
    pub section: String,

    /// The namespaced store key of the offending field.
    pub field_key: String,

    /// The prompt text, for human-readable messages.
    pub label: String,

    pub kind: ErrorKind,
}

impl ValidationFailure {
    pub fn new(
        section: impl Into<String>,
        field_key: impl Into<String>,
        label: impl Into<String>,
        kind: ErrorKind,
    ) -> Self {
        Self {
            section: section.into(),
            field_key: field_key.into(),
            label: label.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let missing =
            ValidationFailure::new("Trust", "demo__trust", "Trust rating", ErrorKind::MissingRequired);
        assert_eq!(missing.to_string(), "[Trust] Trust rating is required.");

        let range = ValidationFailure::new("Trust", "demo__trust", "Trust rating", ErrorKind::OutOfRange);
        assert_eq!(range.to_string(), "[Trust] Trust rating must be between 1 and 5.");
    }
}

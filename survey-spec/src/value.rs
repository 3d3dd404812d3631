/// A raw answer as captured from a widget.
///
/// Likert and choice widgets store the selected option string verbatim, so
/// serialized output reads exactly as the participant saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// Text, likert, and choice answers.
    Text(String),

    /// Confirmation checkboxes.
    Flag(bool),
}

impl AnswerValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// A blank answer: empty text. Unticked flags are answers in their own
    /// right and do not count as blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Render for export: flags become `Yes`/`No`, text passes through.
    pub fn display_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(true) => "Yes".to_string(),
            Self::Flag(false) => "No".to_string(),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

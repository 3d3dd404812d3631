use crate::LikertScale;

/// A single question in a section.
///
/// Fields are immutable once defined; specs are built from the
/// constructor-per-kind functions plus the consuming modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Key unique within the owning section; namespaced before storage.
    key: String,

    /// The prompt text shown to the participant.
    label: String,

    /// The kind of field (determines widget and validation rule).
    kind: FieldKind,

    /// Whether a blank answer blocks submission.
    required: bool,

    /// Optional help text shown next to the widget.
    help: Option<String>,
}

impl Field {
    fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
            help: None,
        }
    }

    /// A 1-5 scale question.
    pub fn likert(key: impl Into<String>, label: impl Into<String>, scale: LikertScale) -> Self {
        Self::new(key, label, FieldKind::Likert(scale))
    }

    /// A single-line text question.
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    /// A free-form multi-line question.
    pub fn comment(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Comment)
    }

    /// A pick-one question over fixed options.
    ///
    /// By convention the first option is blank, standing for "unanswered";
    /// `Field::choice` inserts it if the caller did not.
    pub fn choice(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.first().is_none_or(|first| !first.is_empty()) {
            options.insert(0, String::new());
        }
        Self::new(key, label, FieldKind::Choice(options))
    }

    /// A yes/no confirmation (declaration checkbox).
    pub fn confirm(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Confirm)
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// The kind of field, determining widget and validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// 1-5 scale rendered as a pick-one over labelled points.
    Likert(LikertScale),

    /// Single-line text. Never validated, even when marked required.
    Text,

    /// Multi-line text. Never validated, even when marked required.
    Comment,

    /// Pick one of a fixed option list (first entry blank = unanswered).
    Choice(Vec<String>),

    /// Yes/no checkbox; `required` means it must be ticked.
    Confirm,
}

impl FieldKind {
    /// Whether answers of this kind are ever validated.
    ///
    /// Text and comments are deliberately exempt: length and content checks
    /// were never applied to them and submissions must not start failing on
    /// prose answers.
    pub fn is_validated(&self) -> bool {
        !matches!(self, Self::Text | Self::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_flags() {
        let field = Field::likert("trust", "Would you trust it?", LikertScale::trust())
            .required()
            .with_help("1 = untrustworthy; 5 = trustworthy");
        assert!(field.is_required());
        assert_eq!(field.help(), Some("1 = untrustworthy; 5 = trustworthy"));
    }

    #[test]
    fn choice_gets_blank_option() {
        let field = Field::choice("freq", "How often?", ["Daily", "Weekly"]);
        let FieldKind::Choice(options) = field.kind() else {
            panic!("expected choice kind");
        };
        assert_eq!(options[0], "");
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn text_is_never_validated() {
        assert!(!FieldKind::Text.is_validated());
        assert!(!FieldKind::Comment.is_validated());
        assert!(FieldKind::Confirm.is_validated());
    }
}

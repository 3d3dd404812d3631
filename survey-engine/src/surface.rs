use survey_spec::{AnswerKey, AnswerStore, LikertScale};

/// The seam between the engine and a UI toolkit.
///
/// Surfaces draw widgets and keep them in sync with the answer store:
/// every widget method reads the prior value for its key from the store
/// (so revisiting a page shows earlier input) and writes the raw value
/// back on interaction. The engine calls these in section order and does
/// nothing else at render time.
///
/// Implementations decide presentation entirely - a GUI form, a scripted
/// test surface, or anything else that can honor the read-then-write
/// contract.
pub trait RenderSurface {
    /// A section or component heading.
    fn heading(&mut self, title: &str);

    /// A 1-5 scale question offering `scale.options()`.
    fn likert(
        &mut self,
        store: &mut AnswerStore,
        key: &AnswerKey,
        label: &str,
        scale: &LikertScale,
        help: Option<&str>,
    );

    /// A single-line text input.
    fn text_input(&mut self, store: &mut AnswerStore, key: &AnswerKey, label: &str, help: Option<&str>);

    /// A multi-line text area.
    fn comment(&mut self, store: &mut AnswerStore, key: &AnswerKey, label: &str, help: Option<&str>);

    /// A pick-one over fixed options (first option blank = unanswered).
    fn choice(
        &mut self,
        store: &mut AnswerStore,
        key: &AnswerKey,
        label: &str,
        options: &[String],
        help: Option<&str>,
    );

    /// A yes/no checkbox.
    fn confirm(&mut self, store: &mut AnswerStore, key: &AnswerKey, label: &str);
}

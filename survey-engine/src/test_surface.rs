//! Scripted surface for exercising forms without user interaction.
//!
//! `TestSurface` plays the role of the UI: when the engine renders a
//! widget whose key has a scripted answer, the surface writes that answer
//! into the store, exactly as a real widget does on interaction. Keys
//! without a scripted answer are left untouched (an unfilled widget).
//!
//! # Example
//!
//! ```rust
//! use survey_engine::{ComponentRegistry, Engine, TestSurface};
//! use survey_spec::{AnswerStore, Field, FormSpec, LikertScale, Namespace, Section};
//!
//! let spec = FormSpec::new("demo", "Demo").with_section(Section::fields(
//!     "Trust",
//!     vec![Field::likert("trust", "Trust it?", LikertScale::trust()).required()],
//! ));
//! let engine = Engine::load(spec, &ComponentRegistry::builtin()).unwrap();
//!
//! let ns = Namespace::new("demo");
//! let mut store = AnswerStore::new();
//! let mut surface = TestSurface::new().with_text("demo__trust", "4 - Somewhat Trustworthy");
//! engine.render_form(&mut surface, &mut store, &ns);
//!
//! assert!(engine.validate(&store, &ns).is_ok());
//! ```

use std::collections::HashMap;

use survey_spec::{AnswerKey, AnswerStore, AnswerValue, LikertScale};

use crate::RenderSurface;

/// A surface that fills widgets from pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct TestSurface {
    answers: HashMap<String, AnswerValue>,
    rendered: Vec<String>,
    headings: Vec<String>,
}

impl TestSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a text answer for a namespaced key.
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.insert(key.into(), AnswerValue::Text(value.into()));
        self
    }

    /// Script a checkbox answer for a namespaced key.
    #[must_use]
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.answers.insert(key.into(), AnswerValue::Flag(value));
        self
    }

    /// Keys of every widget drawn so far, in render order.
    pub fn rendered_keys(&self) -> &[String] {
        &self.rendered
    }

    /// Headings drawn so far, in render order.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    fn touch(&mut self, store: &mut AnswerStore, key: &AnswerKey) {
        self.rendered.push(key.as_str().to_string());
        if let Some(value) = self.answers.get(key.as_str()) {
            store.insert(key.clone(), value.clone());
        }
    }
}

impl RenderSurface for TestSurface {
    fn heading(&mut self, title: &str) {
        self.headings.push(title.to_string());
    }

    fn likert(
        &mut self,
        store: &mut AnswerStore,
        key: &AnswerKey,
        _label: &str,
        _scale: &LikertScale,
        _help: Option<&str>,
    ) {
        self.touch(store, key);
    }

    fn text_input(&mut self, store: &mut AnswerStore, key: &AnswerKey, _label: &str, _help: Option<&str>) {
        self.touch(store, key);
    }

    fn comment(&mut self, store: &mut AnswerStore, key: &AnswerKey, _label: &str, _help: Option<&str>) {
        self.touch(store, key);
    }

    fn choice(
        &mut self,
        store: &mut AnswerStore,
        key: &AnswerKey,
        _label: &str,
        _options: &[String],
        _help: Option<&str>,
    ) {
        self.touch(store, key);
    }

    fn confirm(&mut self, store: &mut AnswerStore, key: &AnswerKey, _label: &str) {
        self.touch(store, key);
    }
}

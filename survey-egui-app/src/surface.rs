//! Egui implementation of the engine's render surface.
//!
//! Every widget round-trips through the answer store: the current value is
//! read before drawing and written back on change, so page navigation and
//! re-renders always show prior input.

use std::collections::HashMap;

use eframe::egui;
use survey_engine::{AnswerKey, AnswerStore, LikertScale, RenderSurface};

/// Draws form widgets into an egui `Ui`, with inline validation errors.
pub struct EguiSurface<'u, 'e> {
    ui: &'u mut egui::Ui,
    errors: &'e HashMap<String, String>,
}

impl<'u, 'e> EguiSurface<'u, 'e> {
    /// `errors` maps namespaced field keys to the message shown inline
    /// under the widget.
    pub fn new(ui: &'u mut egui::Ui, errors: &'e HashMap<String, String>) -> Self {
        Self { ui, errors }
    }

    fn labelled(&mut self, label: &str, help: Option<&str>) {
        self.ui.label(label);
        if let Some(help) = help {
            self.ui.label(egui::RichText::new(help).small().weak());
        }
    }

    fn inline_error(&mut self, key: &AnswerKey) {
        if let Some(message) = self.errors.get(key.as_str()) {
            self.ui
                .colored_label(egui::Color32::RED, format!("\u{26a0} {message}"));
        }
    }

    fn pick_one(
        &mut self,
        store: &mut AnswerStore,
        key: &AnswerKey,
        label: &str,
        options: &[String],
        help: Option<&str>,
    ) {
        self.labelled(label, help);

        let current = store.text(key).to_string();
        let mut selected = current.clone();
        let shown = if selected.is_empty() { "(please select)" } else { selected.as_str() };
        egui::ComboBox::from_id_salt(key.as_str())
            .selected_text(shown.to_string())
            .show_ui(self.ui, |ui| {
                for option in options {
                    let text = if option.is_empty() { "(please select)" } else { option.as_str() };
                    ui.selectable_value(&mut selected, option.clone(), text);
                }
            });
        if selected != current {
            store.insert(key.clone(), selected);
        }

        self.inline_error(key);
        self.ui.add_space(8.0);
    }
}

impl RenderSurface for EguiSurface<'_, '_> {
    fn heading(&mut self, title: &str) {
        self.ui.add_space(4.0);
        self.ui.heading(title);
        self.ui.separator();
        self.ui.add_space(4.0);
    }

    fn likert(
        &mut self,
        store: &mut AnswerStore,
        key: &AnswerKey,
        label: &str,
        scale: &LikertScale,
        help: Option<&str>,
    ) {
        let options = scale.options();
        self.pick_one(store, key, label, &options, help);
    }

    fn text_input(&mut self, store: &mut AnswerStore, key: &AnswerKey, label: &str, help: Option<&str>) {
        self.labelled(label, help);
        let mut value = store.text(key).to_string();
        let response = self
            .ui
            .add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY));
        if response.changed() {
            store.insert(key.clone(), value);
        }
        self.inline_error(key);
        self.ui.add_space(8.0);
    }

    fn comment(&mut self, store: &mut AnswerStore, key: &AnswerKey, label: &str, help: Option<&str>) {
        self.labelled(label, help);
        let mut value = store.text(key).to_string();
        let response = self.ui.add(
            egui::TextEdit::multiline(&mut value)
                .desired_width(f32::INFINITY)
                .desired_rows(3),
        );
        if response.changed() {
            store.insert(key.clone(), value);
        }
        self.inline_error(key);
        self.ui.add_space(8.0);
    }

    fn choice(
        &mut self,
        store: &mut AnswerStore,
        key: &AnswerKey,
        label: &str,
        options: &[String],
        help: Option<&str>,
    ) {
        self.pick_one(store, key, label, options, help);
    }

    fn confirm(&mut self, store: &mut AnswerStore, key: &AnswerKey, label: &str) {
        let mut value = store.flag(key);
        if self.ui.checkbox(&mut value, label).changed() {
            store.insert(key.clone(), value);
        }
        self.inline_error(key);
        self.ui.add_space(8.0);
    }
}

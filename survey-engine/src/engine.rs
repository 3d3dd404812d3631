use std::collections::HashSet;
use std::sync::Arc;

use survey_spec::{
    AnswerKey, AnswerStore, ComponentConfig, ErrorKind, Field, FieldKind, FormSpec, LikertScale,
    Namespace, RecordRow, SectionBody, SerializedRecord, ValidationFailure,
};

use crate::{ComponentContext, ComponentRegistry, RenderSurface, SectionComponent};

/// Errors detected while resolving a spec against the component registry.
///
/// Both are authoring mistakes in the static definitions, so they surface
/// at process start rather than mid-session.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A section references a component id the registry does not know.
    #[error("section '{section}' references unknown component '{component_id}'")]
    UnknownComponent { section: String, component_id: String },

    /// The same component is mounted twice under one instance id, which
    /// would make the two mounts share stored answers.
    #[error("component '{component_id}' mounted twice with instance id '{instance_id}'")]
    DuplicateInstance { component_id: String, instance_id: String },
}

enum LoadedSection {
    Fields {
        title: String,
        fields: Vec<Field>,
    },
    Component {
        title: String,
        component: Arc<dyn SectionComponent>,
        instance_id: String,
        config: ComponentConfig,
    },
}

/// Orchestrates rendering, validation, and serialization for one form.
///
/// Component mounts are resolved once at [`load`](Self::load) time; after
/// that the engine is read-only and every operation takes the answer store
/// explicitly.
pub struct Engine {
    spec: FormSpec,
    sections: Vec<LoadedSection>,
    development_mode: bool,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("spec", &self.spec)
            .field("sections", &self.sections.len())
            .field("development_mode", &self.development_mode)
            .finish()
    }
}

impl Engine {
    /// Resolve a spec against the registry.
    pub fn load(spec: FormSpec, registry: &ComponentRegistry) -> Result<Self, LoadError> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut sections = Vec::with_capacity(spec.len());

        for section in spec.sections() {
            match section.body() {
                SectionBody::Fields(fields) => sections.push(LoadedSection::Fields {
                    title: section.title().to_string(),
                    fields: fields.clone(),
                }),
                SectionBody::Component {
                    component_id,
                    instance_id,
                    config,
                } => {
                    let component =
                        registry
                            .get(component_id)
                            .ok_or_else(|| LoadError::UnknownComponent {
                                section: section.title().to_string(),
                                component_id: component_id.clone(),
                            })?;
                    if !seen.insert((component_id.clone(), instance_id.clone())) {
                        return Err(LoadError::DuplicateInstance {
                            component_id: component_id.clone(),
                            instance_id: instance_id.clone(),
                        });
                    }
                    sections.push(LoadedSection::Component {
                        title: section.title().to_string(),
                        component,
                        instance_id: instance_id.clone(),
                        config: config.clone(),
                    });
                }
            }
        }

        tracing::debug!(form = spec.id(), sections = sections.len(), "form spec loaded");
        Ok(Self {
            spec,
            sections,
            development_mode: false,
        })
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    /// Section titles in declaration order (one UI page per entry).
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|section| match section {
                LoadedSection::Fields { title, .. } | LoadedSection::Component { title, .. } => {
                    title.as_str()
                }
            })
            .collect()
    }

    pub fn development_mode(&self) -> bool {
        self.development_mode
    }

    /// Toggle the validation bypass. Never on by default; intended for
    /// pipeline testing only and surfaced loudly in the UI.
    pub fn set_development_mode(&mut self, enabled: bool) {
        if enabled && !self.development_mode {
            tracing::warn!(form = self.spec.id(), "development mode enabled, validation bypassed");
        }
        self.development_mode = enabled;
    }

    /// Draw the whole form in section order. Display only - no validation.
    pub fn render_form(&self, surface: &mut dyn RenderSurface, store: &mut AnswerStore, ns: &Namespace) {
        for index in 0..self.sections.len() {
            self.render_section(index, surface, store, ns);
        }
    }

    /// Draw a single section (one page of a multi-page flow).
    ///
    /// Out-of-range indices draw nothing.
    pub fn render_section(
        &self,
        index: usize,
        surface: &mut dyn RenderSurface,
        store: &mut AnswerStore,
        ns: &Namespace,
    ) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        match section {
            LoadedSection::Fields { title, fields } => {
                surface.heading(title);
                for field in fields {
                    Self::render_field(surface, store, ns, field);
                }
            }
            LoadedSection::Component {
                component,
                instance_id,
                config,
                ..
            } => {
                let cx = ComponentContext::new(ns, instance_id, config);
                component.render(surface, store, &cx);
            }
        }
    }

    fn render_field(surface: &mut dyn RenderSurface, store: &mut AnswerStore, ns: &Namespace, field: &Field) {
        let key = AnswerKey::field(ns, field.key());
        match field.kind() {
            FieldKind::Likert(scale) => {
                surface.likert(store, &key, field.label(), scale, field.help());
            }
            FieldKind::Text => surface.text_input(store, &key, field.label(), field.help()),
            FieldKind::Comment => surface.comment(store, &key, field.label(), field.help()),
            FieldKind::Choice(options) => {
                surface.choice(store, &key, field.label(), options, field.help());
            }
            FieldKind::Confirm => surface.confirm(store, &key, field.label()),
        }
    }

    /// Run every field and component check in section order, collecting
    /// all failures so the participant sees everything at once.
    ///
    /// In development mode the result is unconditionally `Ok`.
    pub fn validate(&self, store: &AnswerStore, ns: &Namespace) -> Result<(), Vec<ValidationFailure>> {
        if self.development_mode {
            tracing::debug!(form = self.spec.id(), "development mode active, skipping validation");
            return Ok(());
        }

        let mut failures = Vec::new();
        for section in &self.sections {
            match section {
                LoadedSection::Fields { title, fields } => {
                    for field in fields {
                        if let Some(failure) = Self::validate_field(title, field, store, ns) {
                            failures.push(failure);
                        }
                    }
                }
                LoadedSection::Component {
                    component,
                    instance_id,
                    config,
                    ..
                } => {
                    let cx = ComponentContext::new(ns, instance_id, config);
                    failures.extend(component.validate(store, &cx));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            tracing::debug!(form = self.spec.id(), count = failures.len(), "validation failed");
            Err(failures)
        }
    }

    fn validate_field(
        section: &str,
        field: &Field,
        store: &AnswerStore,
        ns: &Namespace,
    ) -> Option<ValidationFailure> {
        let key = AnswerKey::field(ns, field.key());
        let failure = |kind| Some(ValidationFailure::new(section, key.as_str(), field.label(), kind));

        match field.kind() {
            FieldKind::Likert(_) => {
                let raw = store.text(&key).trim();
                if raw.is_empty() {
                    return if field.is_required() {
                        failure(ErrorKind::MissingRequired)
                    } else {
                        None
                    };
                }
                match LikertScale::parse_point(raw) {
                    None => failure(ErrorKind::MalformedText),
                    Some(point) if !(1..=5).contains(&point) => failure(ErrorKind::OutOfRange),
                    Some(_) => None,
                }
            }
            FieldKind::Choice(_) => {
                if field.is_required() && store.text(&key).trim().is_empty() {
                    failure(ErrorKind::MissingRequired)
                } else {
                    None
                }
            }
            FieldKind::Confirm => {
                if field.is_required() && !store.flag(&key) {
                    failure(ErrorKind::MissingRequired)
                } else {
                    None
                }
            }
            // Text answers are deliberately never validated.
            FieldKind::Text | FieldKind::Comment => None,
        }
    }

    /// Flatten the store into one row per (section, record, field), in
    /// section declaration order.
    ///
    /// Callers must only serialize after [`validate`](Self::validate)
    /// passes (or in development mode); this method does not re-check and
    /// will happily emit blank required values.
    pub fn serialize_answers(&self, store: &AnswerStore, ns: &Namespace) -> SerializedRecord {
        let mut rows = Vec::new();

        for section in &self.sections {
            match section {
                LoadedSection::Fields { title, fields } => {
                    for field in fields {
                        let key = AnswerKey::field(ns, field.key());
                        let value = match field.kind() {
                            FieldKind::Confirm => {
                                if store.flag(&key) { "Yes" } else { "No" }.to_string()
                            }
                            _ => store.text(&key).to_string(),
                        };
                        rows.push(RecordRow::new(title.clone(), 1, field.key(), value));
                    }
                }
                LoadedSection::Component {
                    title,
                    component,
                    instance_id,
                    config,
                } => {
                    let cx = ComponentContext::new(ns, instance_id, config);
                    for (index, record) in component.serialize(store, &cx).into_iter().enumerate() {
                        let record_number = (index + 1) as u32;
                        for (field, value) in record {
                            rows.push(RecordRow::new(title.clone(), record_number, field, value));
                        }
                    }
                }
            }
        }

        SerializedRecord::new(self.spec.id(), self.spec.title(), rows)
    }
}

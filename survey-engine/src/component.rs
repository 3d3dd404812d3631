use survey_spec::{AnswerKey, AnswerStore, ComponentConfig, Namespace, ValidationFailure};

use crate::RenderSurface;

/// One serialized record of a component instance: ordered
/// `(sub-field key, display value)` pairs.
///
/// Most components return a single record. A component that repeats a
/// group (several people, several entries) returns one record per entry;
/// the engine numbers them 1-based within the owning section.
pub type InstanceRecord = Vec<(String, String)>;

/// Everything a component needs to address its slice of the store.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext<'a> {
    pub namespace: &'a Namespace,
    pub instance_id: &'a str,
    pub config: &'a ComponentConfig,
}

impl<'a> ComponentContext<'a> {
    pub fn new(namespace: &'a Namespace, instance_id: &'a str, config: &'a ComponentConfig) -> Self {
        Self {
            namespace,
            instance_id,
            config,
        }
    }

    /// The store key for one of this instance's sub-fields.
    ///
    /// Keys carry both namespace and instance id, so two mounts of the
    /// same component never share stored values.
    pub fn key(&self, sub_field: &str) -> AnswerKey {
        AnswerKey::instance(self.namespace, self.instance_id, sub_field)
    }

    /// The display title for this mount.
    pub fn title<'b>(&'b self, default: &'b str) -> &'b str {
        self.config.title_or(default)
    }
}

/// A reusable, instantiable section implementation.
///
/// Components own their sub-field layout and rules; the spec only mounts
/// them by id. Implementations must be idempotent to re-render (no side
/// effects beyond answer-store writes) and must tolerate being rendered
/// zero or many times in one session - `validate` and `serialize` read
/// the store directly and never depend on a prior `render` call.
pub trait SectionComponent: Send + Sync {
    /// Draw this instance's sub-fields on the surface.
    fn render(&self, surface: &mut dyn RenderSurface, store: &mut AnswerStore, cx: &ComponentContext);

    /// Collect every failure for this instance (empty when valid).
    fn validate(&self, store: &AnswerStore, cx: &ComponentContext) -> Vec<ValidationFailure>;

    /// Flatten this instance's answers into ordered records.
    fn serialize(&self, store: &AnswerStore, cx: &ComponentContext) -> Vec<InstanceRecord>;
}

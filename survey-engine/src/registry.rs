use std::collections::HashMap;
use std::sync::Arc;

use crate::SectionComponent;
use crate::components::{AddressComponent, PhoneComponent};

/// Maps component ids to their implementations.
///
/// Specs reference components by string id; the engine resolves those ids
/// against a registry once at load time, so a missing component fails the
/// whole form up front instead of mid-render.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Arc<dyn SectionComponent>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in components (`address`, `phone`).
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("address", Arc::new(AddressComponent));
        registry.register("phone", Arc::new(PhoneComponent));
        registry
    }

    /// Register a component under a stable id, replacing any previous one.
    pub fn register(&mut self, id: impl Into<String>, component: Arc<dyn SectionComponent>) {
        self.components.insert(id.into(), component);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn SectionComponent>> {
        self.components.get(id).cloned()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.ids().collect();
        ids.sort_unstable();
        f.debug_struct("ComponentRegistry").field("ids", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_components_present() {
        let registry = ComponentRegistry::builtin();
        assert!(registry.get("address").is_some());
        assert!(registry.get("phone").is_some());
        assert!(registry.get("natural_persons").is_none());
    }
}

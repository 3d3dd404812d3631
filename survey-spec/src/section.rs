use std::collections::HashMap;

use crate::Field;

/// A named group of questions within a form.
///
/// A section either lists its own fields or mounts a reusable component
/// under an instance id. The same component may be mounted by several
/// sections of one form as long as each mount uses a distinct instance id;
/// the engine rejects duplicates at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    title: String,
    body: SectionBody,
}

impl Section {
    /// A section made of its own fields.
    pub fn fields(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Fields(fields),
        }
    }

    /// A section that mounts a reusable component.
    pub fn component(
        title: impl Into<String>,
        component_id: impl Into<String>,
        instance_id: impl Into<String>,
        config: ComponentConfig,
    ) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Component {
                component_id: component_id.into(),
                instance_id: instance_id.into(),
                config,
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &SectionBody {
        &self.body
    }
}

/// The contents of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// An ordered sequence of plain fields.
    Fields(Vec<Field>),

    /// A mount of a reusable component.
    Component {
        /// Registry key of the component implementation.
        component_id: String,
        /// Distinguishes multiple mounts of the same component.
        instance_id: String,
        /// Free-form per-mount settings interpreted by the component.
        config: ComponentConfig,
    },
}

/// String-keyed settings passed to a component mount.
///
/// Components read what they understand and ignore the rest, so new
/// settings never break existing specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentConfig {
    values: HashMap<String, String>,
}

impl ComponentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder-style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The display title for the mount, falling back to the given default.
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.get("title").unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lookup() {
        let config = ComponentConfig::new().with("title", "Postal Address");
        assert_eq!(config.get("title"), Some("Postal Address"));
        assert_eq!(config.get("missing"), None);
        assert_eq!(config.title_or("Physical Address"), "Postal Address");
        assert_eq!(ComponentConfig::new().title_or("Physical Address"), "Physical Address");
    }
}

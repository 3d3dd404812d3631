use std::fmt;

/// A string prefix scoping all stored answers to one form instance.
///
/// Namespacing keeps two surveys (or two component instances) in the same
/// session from colliding in the [`AnswerStore`](crate::AnswerStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Build a namespace from a free-form label.
    ///
    /// The label is lowercased, spaces become underscores, and anything
    /// outside `[a-z0-9_]` is dropped, so display titles make valid
    /// namespaces.
    pub fn new(label: &str) -> Self {
        let sanitized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' { '_' } else { c })
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect();
        Self(sanitized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A namespaced key into the [`AnswerStore`](crate::AnswerStore).
///
/// Two forms: `{ns}__{key}` for plain fields, `{ns}__{instance}__{key}` for
/// component sub-fields. The doubled underscore keeps segments separable
/// and makes collisions between instances impossible as long as instance
/// ids differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerKey(String);

impl AnswerKey {
    /// Key for a plain field in a namespace.
    pub fn field(ns: &Namespace, key: &str) -> Self {
        Self(format!("{ns}__{key}"))
    }

    /// Key for a sub-field of a component instance.
    pub fn instance(ns: &Namespace, instance_id: &str, key: &str) -> Self {
        Self(format!("{ns}__{instance_id}__{key}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key belongs to the given namespace.
    pub fn in_namespace(&self, ns: &Namespace) -> bool {
        self.0
            .strip_prefix(ns.as_str())
            .is_some_and(|rest| rest.starts_with("__"))
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AnswerKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AnswerKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_labels() {
        assert_eq!(Namespace::new("Investment Research").as_str(), "investment_research");
        assert_eq!(Namespace::new("  Trust & Co.  ").as_str(), "trust__co");
    }

    #[test]
    fn key_shapes() {
        let ns = Namespace::new("demo");
        assert_eq!(AnswerKey::field(&ns, "trust").as_str(), "demo__trust");
        assert_eq!(
            AnswerKey::instance(&ns, "postal_address", "city").as_str(),
            "demo__postal_address__city"
        );
    }

    #[test]
    fn namespace_membership() {
        let demo = Namespace::new("demo");
        let demo2 = Namespace::new("demo2");
        let key = AnswerKey::field(&demo, "trust");
        assert!(key.in_namespace(&demo));
        assert!(!key.in_namespace(&demo2));
        // A namespace that happens to be a prefix of another must not match.
        assert!(!AnswerKey::field(&demo2, "trust").in_namespace(&demo));
    }
}

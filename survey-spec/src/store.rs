use std::collections::HashMap;

use crate::{AnswerKey, AnswerValue, Namespace};

/// Session-scoped answers, keyed by namespaced field key.
///
/// The store is threaded explicitly through render, validate, and serialize
/// calls; there is no ambient global. It lives for the user's session: the
/// engine writes into it on every widget interaction, page navigation
/// leaves it untouched, and [`reset`](Self::reset) discards one form's
/// answers on explicit restart.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    values: HashMap<AnswerKey, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: AnswerKey, value: impl Into<AnswerValue>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: &AnswerKey) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &AnswerKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &AnswerKey) -> Option<AnswerValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnswerKey, &AnswerValue)> {
        self.values.iter()
    }

    /// Discard every answer belonging to the given namespace.
    pub fn reset(&mut self, ns: &Namespace) {
        self.values.retain(|key, _| !key.in_namespace(ns));
    }

    /// The text stored under a key, or `""` when absent or non-text.
    ///
    /// Blank-as-missing matches widget behavior: an untouched text input
    /// and one cleared back to empty are the same answer.
    pub fn text(&self, key: &AnswerKey) -> &str {
        self.get(key).and_then(AnswerValue::as_str).unwrap_or("")
    }

    /// The flag stored under a key, or `false` when absent or non-flag.
    pub fn flag(&self, key: &AnswerKey) -> bool {
        self.get(key).and_then(AnswerValue::as_flag).unwrap_or(false)
    }

    /// Whether a key holds a non-blank answer.
    pub fn has_value(&self, key: &AnswerKey) -> bool {
        self.get(key).is_some_and(|value| !value.is_blank())
    }
}

impl<'a> IntoIterator for &'a AnswerStore {
    type Item = (&'a AnswerKey, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, AnswerKey, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ns: &Namespace, k: &str) -> AnswerKey {
        AnswerKey::field(ns, k)
    }

    #[test]
    fn insert_and_read() {
        let ns = Namespace::new("demo");
        let mut store = AnswerStore::new();
        store.insert(key(&ns, "trust"), "5 - Strongly Agree");
        store.insert(key(&ns, "accept"), true);

        assert_eq!(store.text(&key(&ns, "trust")), "5 - Strongly Agree");
        assert!(store.flag(&key(&ns, "accept")));
        assert_eq!(store.text(&key(&ns, "missing")), "");
        assert!(!store.flag(&key(&ns, "missing")));
    }

    #[test]
    fn has_value_treats_blank_text_as_missing() {
        let ns = Namespace::new("demo");
        let mut store = AnswerStore::new();
        store.insert(key(&ns, "comments"), "");
        store.insert(key(&ns, "accept"), false);

        assert!(!store.has_value(&key(&ns, "comments")));
        assert!(store.has_value(&key(&ns, "accept")));
        assert!(!store.has_value(&key(&ns, "absent")));
    }

    #[test]
    fn reset_only_clears_one_namespace() {
        let demo = Namespace::new("demo");
        let other = Namespace::new("other");
        let mut store = AnswerStore::new();
        store.insert(key(&demo, "trust"), "5");
        store.insert(key(&other, "trust"), "3");

        store.reset(&demo);

        assert!(!store.contains(&key(&demo, "trust")));
        assert_eq!(store.text(&key(&other, "trust")), "3");
    }
}

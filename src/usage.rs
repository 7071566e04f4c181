extern crate hashbrown;

use hashbrown::hash_map::HashMap;

/// Tracks which `(class, suffix)` table entries the training pairs actually
/// exercise, and how often.
#[derive(Debug, Default)]
pub(crate) struct RuleUsage {
    inner: HashMap<String, HashMap<String, usize>>,
}

impl RuleUsage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mark(&mut self, word_class: &str, suffix: &str) {
        let (_, suffixes) = self
            .inner
            .raw_entry_mut()
            .from_key(word_class)
            .or_insert_with(|| (word_class.to_string(), HashMap::new()));

        suffixes
            .raw_entry_mut()
            .from_key(suffix)
            .and_modify(|_, count| *count += 1)
            .or_insert_with(|| (suffix.to_string(), 1));
    }

    pub(crate) fn contains(&self, word_class: &str, suffix: &str) -> bool {
        self.inner
            .get(word_class)
            .is_some_and(|suffixes| suffixes.contains_key(suffix))
    }

    /// Total number of marks, counting repeats.
    pub(crate) fn total(&self) -> usize {
        self.inner.values().flat_map(HashMap::values).sum()
    }
}

extern crate hashbrown;
extern crate serde;

use hashbrown::hash_map::HashMap;
use serde::{Deserialize, Serialize};

use crate::rule::Candidate;

/// Build a [`RuleTable`] from literals.
///
/// ```
/// use lemmy::rules;
///
/// let table = rules! {
///     "sb." => {
///         "er" => [("e", false)],
///         "alen" => [("alen", true), ("ale", true)],
///     },
/// };
/// assert_eq!(table.rule_count(), 3);
/// ```
#[macro_export]
macro_rules! rules {
    { $($class:expr => { $($suffix:expr => [ $(($lemma:expr, $locked:expr)),* $(,)? ]),* $(,)? }),* $(,)? } => {{
        let mut table = $crate::table::RuleTable::new();
        $($($(
            table.append($class, $suffix, $crate::rule::Candidate::new($lemma, $locked));
        )*)*)*
        table
    }};
}

type SuffixLookup = HashMap<String, Vec<Candidate>>;

/// Nested lookup from word class to full form suffix to an ordered candidate
/// list. Candidate order is the ambiguity-resolution order at query time and
/// survives serialization.
///
/// A candidate list is homogeneous in its lock flag: unlocked lists always
/// hold exactly one candidate, locked lists accumulate whole-word exceptions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    classes: HashMap<String, SuffixLookup>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    #[inline]
    pub fn contains_class(&self, word_class: &str) -> bool {
        self.classes.contains_key(word_class)
    }

    #[inline]
    pub(crate) fn suffixes(&self, word_class: &str) -> Option<&SuffixLookup> {
        self.classes.get(word_class)
    }

    /// Candidate list for an exact class and suffix, empty when absent.
    pub fn candidates(&self, word_class: &str, suffix: &str) -> &[Candidate] {
        self.classes
            .get(word_class)
            .and_then(|lookup| lookup.get(suffix))
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the entry for this suffix holds whole-word exceptions. Lists
    /// are homogeneous, so the first candidate decides.
    pub fn is_locked(&self, word_class: &str, suffix: &str) -> bool {
        self.candidates(word_class, suffix)
            .first()
            .is_some_and(|candidate| candidate.locked)
    }

    pub fn contains(&self, word_class: &str, suffix: &str, lemma_suffix: &str) -> bool {
        self.candidates(word_class, suffix)
            .iter()
            .any(|candidate| candidate.lemma_suffix == lemma_suffix)
    }

    /// Replace the entry for this suffix with a single candidate, dropping
    /// whatever was there.
    pub fn replace(&mut self, word_class: &str, suffix: &str, candidate: Candidate) {
        let candidates = self.entry(word_class, suffix);
        candidates.clear();
        candidates.push(candidate);
    }

    /// Append a candidate to the entry for this suffix, preserving the
    /// candidates already present.
    pub fn append(&mut self, word_class: &str, suffix: &str, candidate: Candidate) {
        self.entry(word_class, suffix).push(candidate);
    }

    /// Total rule count, summed over all candidate lists.
    pub fn rule_count(&self) -> usize {
        self.classes
            .values()
            .flat_map(SuffixLookup::values)
            .map(Vec::len)
            .sum()
    }

    /// Keep only the `(class, suffix)` entries the predicate approves of.
    /// Classes left without entries are dropped entirely.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        for (word_class, lookup) in self.classes.iter_mut() {
            lookup.retain(|suffix, _| keep(word_class, suffix));
        }
        self.classes.retain(|_, lookup| !lookup.is_empty());
    }

    fn entry(&mut self, word_class: &str, suffix: &str) -> &mut Vec<Candidate> {
        let (_, lookup) = self
            .classes
            .raw_entry_mut()
            .from_key(word_class)
            .or_insert_with(|| (word_class.to_string(), SuffixLookup::new()));

        let (_, candidates) = lookup
            .raw_entry_mut()
            .from_key(suffix)
            .or_insert_with(|| (suffix.to_string(), Vec::new()));

        candidates
    }
}

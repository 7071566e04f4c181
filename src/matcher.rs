use crate::{rule::Candidate, table::RuleTable};

/// Outcome of a longest-suffix lookup.
///
/// Every class implicitly ends with the zero-length rule `"" -> ""`, so a
/// miss degrades to [`Match::Fallback`] and the full form passes through
/// unchanged.
#[derive(Debug, PartialEq)]
pub enum Match<'t> {
    Rule {
        suffix: &'t str,
        candidates: &'t [Candidate],
    },
    Fallback,
}

impl Match<'_> {
    /// Character length of the matched suffix.
    pub fn suffix_len(&self) -> usize {
        match self {
            Match::Rule { suffix, .. } => suffix.chars().count(),
            Match::Fallback => 0,
        }
    }
}

/// Find the rule with the longest full form suffix matching the given class
/// and full form.
///
/// Suffixes are probed from the whole form down to the empty string; the
/// first hit wins.
pub fn longest_match<'t>(table: &'t RuleTable, word_class: &str, full_form: &'t str) -> Match<'t> {
    let Some(lookup) = table.suffixes(word_class) else {
        return Match::Fallback;
    };

    let starts = full_form
        .char_indices()
        .map(|(start, _)| start)
        .chain(std::iter::once(full_form.len()));

    for start in starts {
        let suffix = &full_form[start..];
        if let Some(candidates) = lookup.get(suffix) {
            return Match::Rule {
                suffix,
                candidates,
            };
        }
    }

    Match::Fallback
}

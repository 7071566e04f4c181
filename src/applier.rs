use crate::matcher::Match;

/// Produce one lemma per candidate of a matched rule, in candidate order.
///
/// An empty matched suffix appends each lemma suffix to the full form. Any
/// other suffix splits the form at its rightmost occurrence and swaps the
/// tail for each lemma suffix. Duplicates are kept.
pub fn apply(matched: &Match<'_>, full_form: &str) -> Vec<String> {
    match matched {
        Match::Fallback => vec![full_form.to_string()],

        Match::Rule { suffix, candidates } if suffix.is_empty() => candidates
            .iter()
            .map(|candidate| [full_form, candidate.lemma_suffix.as_str()].concat())
            .collect(),

        Match::Rule { suffix, candidates } => match full_form.rfind(suffix) {
            Some(at) => candidates
                .iter()
                .map(|candidate| [&full_form[..at], candidate.lemma_suffix.as_str()].concat())
                .collect(),
            None => vec![full_form.to_string()],
        },
    }
}

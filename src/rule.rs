extern crate serde;

use serde::{Deserialize, Serialize};

/// One entry of a suffix-rule candidate list.
///
/// A candidate means "replace the matched full form suffix with
/// `lemma_suffix`". Locked candidates were derived from a full form that was
/// consumed entirely by its suffix; they are whole-word exceptions and are
/// never overwritten, only appended to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub lemma_suffix: String,
    pub locked: bool,
}

impl Candidate {
    pub fn new<S: Into<String>>(lemma_suffix: S, locked: bool) -> Self {
        Self {
            lemma_suffix: lemma_suffix.into(),
            locked,
        }
    }
}

/// A suffix-replacement rule induced from one training pair.
#[derive(Debug, PartialEq, Eq)]
pub struct Rule {
    pub full_form_suffix: String,
    pub lemma_suffix: String,

    /// The suffix covers the entire full form.
    pub exhausts: bool,
}

impl Rule {
    /// Derive a rule from a mispredicted training pair.
    ///
    /// `matched_len` is the character length of the suffix the table currently
    /// matches for the full form. The derived rule is at least one character
    /// longer, so it takes precedence on the next epoch. If that leaves no
    /// room for a longer suffix, the rule consumes the full form as a whole
    /// and maps it straight to the lemma.
    pub fn derive(full_form: &str, lemma: &str, matched_len: usize) -> Self {
        let form_len = full_form.chars().count();
        if matched_len + 1 >= form_len {
            return Self {
                full_form_suffix: full_form.to_string(),
                lemma_suffix: lemma.to_string(),
                exhausts: true,
            };
        }

        let min_len = matched_len + 1;
        let max_prefix = usize::min(lemma.chars().count(), form_len - min_len);
        let start = suffix_start(full_form, lemma, max_prefix);

        Self {
            full_form_suffix: full_form[start..].to_string(),
            lemma_suffix: lemma[start..].to_string(),
            exhausts: start == 0,
        }
    }
}

/// Byte offset at which the suffix begins, in both the full form and the
/// lemma. Everything to the left is a shared prefix of at most `max_prefix`
/// characters, so the offset is a valid boundary in either string.
fn suffix_start(full_form: &str, lemma: &str, max_prefix: usize) -> usize {
    let mut start = 0;
    let mut prefix = 0;

    for (form_char, lemma_char) in full_form.chars().zip(lemma.chars()) {
        if prefix == max_prefix || form_char != lemma_char {
            break;
        }
        start += form_char.len_utf8();
        prefix += 1;
    }

    start
}

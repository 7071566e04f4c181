extern crate hashbrown;

use hashbrown::hash_map::HashMap;

use crate::lemmatizer::Lemmas;

type FixedRules = HashMap<String, Vec<(String, String)>>;
type Exceptions = HashMap<String, HashMap<String, Vec<String>>>;

/// A lemmatizer over a hand-written, ordered suffix table.
///
/// No training: each class maps to a list of `(form suffix, lemma suffix)`
/// rules tried in order, first match wins, so lists go from most to least
/// specific. An exact-match exception table is consulted before the rules.
/// Unknown classes and unmatched forms pass through unchanged.
#[derive(Clone, Debug, Default)]
pub struct Fixed {
    rules: FixedRules,
    exceptions: Exceptions,
}

impl Fixed {
    pub fn new(rules: FixedRules, exceptions: Exceptions) -> Self {
        Self { rules, exceptions }
    }

    /// The rule set shipped for Danish.
    pub fn danish() -> Self {
        let verb = [
            ("ede", "e"),
            ("re", "re"),
            ("te", "e"),
            ("er", "e"),
            ("dt", "de"),
            ("st", "se"),
            ("t", ""),
        ];
        let noun = [
            ("erne", ""),
            ("ene", ""),
            ("et", ""),
            ("en", ""),
            ("er", ""),
            ("e", ""),
        ];

        let mut rules = FixedRules::new();
        rules.insert("adj".to_string(), Vec::new());
        rules.insert("adv".to_string(), Vec::new());
        rules.insert("verb".to_string(), suffix_pairs(&verb));
        rules.insert("noun".to_string(), suffix_pairs(&noun));

        Self::new(rules, Exceptions::new())
    }

    pub fn lemmatize(&self, word_class: &str, full_form: &str) -> Lemmas {
        if let Some(lemmas) = self
            .exceptions
            .get(word_class)
            .and_then(|exceptions| exceptions.get(full_form))
        {
            return lemmas.clone();
        }

        self.apply_rules(word_class, full_form)
    }

    fn apply_rules(&self, word_class: &str, full_form: &str) -> Lemmas {
        if let Some(class_rules) = self.rules.get(word_class) {
            for (form_suffix, lemma_suffix) in class_rules {
                if let Some(stem) = full_form.strip_suffix(form_suffix.as_str()) {
                    return vec![[stem, lemma_suffix.as_str()].concat()];
                }
            }
        }

        vec![full_form.to_string()]
    }
}

fn suffix_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(form_suffix, lemma_suffix)| (form_suffix.to_string(), lemma_suffix.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Exceptions, Fixed, FixedRules};

    #[test]
    fn test_fixed_first_matching_rule_wins() {
        let lemmatizer = Fixed::danish();

        // "husene" ends with both "ene" and "e"; "ene" is listed first.
        assert_eq!(lemmatizer.lemmatize("noun", "husene"), vec!["hus"]);
        assert_eq!(lemmatizer.lemmatize("verb", "talte"), vec!["tale"]);
    }

    #[test]
    fn test_fixed_unknown_class_is_identity() {
        let lemmatizer = Fixed::danish();
        assert_eq!(lemmatizer.lemmatize("pron", "denne"), vec!["denne"]);
    }

    #[test]
    fn test_fixed_classes_without_rules_are_identity() {
        let lemmatizer = Fixed::danish();
        assert_eq!(lemmatizer.lemmatize("adj", "stort"), vec!["stort"]);
    }

    #[test]
    fn test_fixed_exceptions_take_precedence() {
        let mut exceptions = Exceptions::new();
        exceptions.entry("noun".to_string()).or_default().insert(
            "børnene".to_string(),
            vec!["barn".to_string()],
        );

        let lemmatizer = Fixed::new(Fixed::danish().rules, exceptions);

        assert_eq!(lemmatizer.lemmatize("noun", "børnene"), vec!["barn"]);
        // Everything else still goes through the rules.
        assert_eq!(lemmatizer.lemmatize("noun", "husene"), vec!["hus"]);
    }
}

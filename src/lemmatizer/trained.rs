use crate::{
    applier::apply,
    error::{QueryError, TrainError},
    lemmatizer::{Lemmas, Lemmatize},
    matcher::longest_match,
    pruner::prune,
    table::RuleTable,
    trainer::{Trainer, DEFAULT_MAX_EPOCHS},
};

/// A lemmatizer over an induced (or supplied) suffix-rule table.
///
/// Construct with a deserialized per-language table for inference-only use,
/// or with `None` followed by [`Trained::fit`]. Querying with neither is a
/// [`QueryError::Untrained`] error; once a table exists, unknown classes and
/// unmatched forms pass through unchanged instead.
///
/// After fitting, the table is never mutated again and the lemmatizer can be
/// shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Trained {
    rules: Option<RuleTable>,
}

impl Trained {
    pub fn new(rules: Option<RuleTable>) -> Self {
        Self { rules }
    }

    /// The current rule table, for persistence by an external loader.
    pub fn rules(&self) -> Option<&RuleTable> {
        self.rules.as_ref()
    }

    /// Induce a rule table from aligned `(class, full form)` pairs and their
    /// lemmas, then prune it. Replaces any table held so far. Fails without
    /// touching state when the sequences are not aligned.
    pub fn fit<C, F, L>(&mut self, forms: &[(C, F)], lemmas: &[L]) -> Result<(), TrainError>
    where
        C: AsRef<str>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        self.fit_with(forms, lemmas, DEFAULT_MAX_EPOCHS)
    }

    pub fn fit_with<C, F, L>(
        &mut self,
        forms: &[(C, F)],
        lemmas: &[L],
        max_epochs: usize,
    ) -> Result<(), TrainError>
    where
        C: AsRef<str>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let mut table = RuleTable::new();
        Trainer::with_max_epochs(max_epochs).fit(&mut table, forms, lemmas)?;
        prune(&mut table, forms);
        self.rules = Some(table);
        Ok(())
    }

    /// Lemmatize one full form of the given word class.
    ///
    /// An ambiguous prediction is retried once under the composite class
    /// `{previous}_{word_class}` when `previous_class` is supplied and the
    /// table holds history rules for it. History never chains further.
    /// Ambiguity left after that is returned as-is.
    pub fn lemmatize(
        &self,
        word_class: &str,
        full_form: &str,
        previous_class: Option<&str>,
    ) -> Result<Lemmas, QueryError> {
        let rules = self.rules.as_ref().ok_or(QueryError::Untrained)?;
        Ok(resolve(rules, word_class, full_form, previous_class))
    }
}

fn resolve(
    rules: &RuleTable,
    word_class: &str,
    full_form: &str,
    previous_class: Option<&str>,
) -> Lemmas {
    let matched = longest_match(rules, word_class, full_form);
    let lemmas = apply(&matched, full_form);

    if lemmas.len() == 1 {
        return lemmas;
    }

    let Some(previous) = previous_class else {
        return lemmas;
    };

    let composite = format!("{previous}_{word_class}");
    if !rules.contains_class(&composite) {
        return lemmas;
    }

    resolve(rules, &composite, full_form, None)
}

impl Lemmatize for Trained {
    fn lemmatize(&self, word_class: &str, full_form: &str) -> Result<Lemmas, QueryError> {
        Trained::lemmatize(self, word_class, full_form, None)
    }
}

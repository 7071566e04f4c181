extern crate log;

use std::time::Instant;

use log::debug;

use crate::{
    applier::apply,
    error::TrainError,
    matcher::longest_match,
    rule::{Candidate, Rule},
    table::RuleTable,
};

pub const DEFAULT_MAX_EPOCHS: usize = 20;

/// Induces suffix rules from `(class, full form) -> lemma` pairs.
///
/// Runs epochs over the training pairs in sequence order, deriving a rule for
/// every pair the table mispredicts, until the rule count stops changing or
/// the epoch cap is hit. The count never decreases during training, so the
/// loop always terminates.
#[derive(Clone, Copy, Debug)]
pub struct Trainer {
    max_epochs: usize,
}

impl Default for Trainer {
    fn default() -> Self {
        Self {
            max_epochs: DEFAULT_MAX_EPOCHS,
        }
    }
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_epochs(max_epochs: usize) -> Self {
        Self { max_epochs }
    }

    /// Train `table` in place. Fails before touching the table when the
    /// sequences are not aligned.
    pub fn fit<C, F, L>(
        &self,
        table: &mut RuleTable,
        forms: &[(C, F)],
        lemmas: &[L],
    ) -> Result<(), TrainError>
    where
        C: AsRef<str>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        if forms.len() != lemmas.len() {
            return Err(TrainError::LengthMismatch {
                forms: forms.len(),
                lemmas: lemmas.len(),
            });
        }

        let started = Instant::now();
        let mut previous = usize::MAX;
        let mut epoch = 1;

        while previous != table.rule_count() && epoch <= self.max_epochs {
            let epoch_started = Instant::now();
            previous = table.rule_count();

            self.epoch(table, forms, lemmas);

            let count = table.rule_count();
            debug!(
                "epoch #{}: {} rules ({} new) in {:?}",
                epoch,
                count,
                count - previous,
                epoch_started.elapsed()
            );
            epoch += 1;
        }

        debug!(
            "training complete: {} rules in {:?}",
            table.rule_count(),
            started.elapsed()
        );
        Ok(())
    }

    fn epoch<C, F, L>(&self, table: &mut RuleTable, forms: &[(C, F)], lemmas: &[L])
    where
        C: AsRef<str>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        for ((word_class, full_form), lemma) in forms.iter().zip(lemmas) {
            let (word_class, full_form, lemma) =
                (word_class.as_ref(), full_form.as_ref(), lemma.as_ref());

            let (matched_len, predictions) = {
                let matched = longest_match(table, word_class, full_form);
                (matched.suffix_len(), apply(&matched, full_form))
            };

            if predictions.iter().any(|predicted| predicted == lemma) {
                // The table already explains this pair.
                continue;
            }

            commit(table, word_class, Rule::derive(full_form, lemma, matched_len));
        }
    }
}

/// Commit an induced rule to the table.
///
/// A non-exhausting rule is strictly longer than anything previously matched
/// for the class, so replacing the entry for its suffix cannot lose a live
/// rule. An exhausting rule is a whole-word exception: it replaces an
/// unlocked entry, but joins a locked one, since several lemmas may share
/// one inflected form.
fn commit(table: &mut RuleTable, word_class: &str, rule: Rule) {
    if !rule.exhausts {
        table.replace(
            word_class,
            &rule.full_form_suffix,
            Candidate::new(rule.lemma_suffix, false),
        );
    } else if !table.is_locked(word_class, &rule.full_form_suffix) {
        table.replace(
            word_class,
            &rule.full_form_suffix,
            Candidate::new(rule.lemma_suffix, true),
        );
    } else if !table.contains(word_class, &rule.full_form_suffix, &rule.lemma_suffix) {
        table.append(
            word_class,
            &rule.full_form_suffix,
            Candidate::new(rule.lemma_suffix, true),
        );
    }
}

extern crate log;

use log::debug;

use crate::{
    matcher::{longest_match, Match},
    table::RuleTable,
    usage::RuleUsage,
};

/// Drop every rule no training pair reaches under the final table.
///
/// Intermediate epochs create over-specific rules to break ties; once a more
/// general rule learned later shadows them, nothing matches them anymore.
/// One marking pass over the training pairs finds the survivors, everything
/// else goes. Running the pass twice removes nothing more.
pub fn prune<C, F>(table: &mut RuleTable, forms: &[(C, F)])
where
    C: AsRef<str>,
    F: AsRef<str>,
{
    let before = table.rule_count();
    let mut usage = RuleUsage::new();

    for (word_class, full_form) in forms {
        let (word_class, full_form) = (word_class.as_ref(), full_form.as_ref());
        if let Match::Rule { suffix, .. } = longest_match(table, word_class, full_form) {
            usage.mark(word_class, suffix);
        }
    }

    debug!("rules before pruning: {} ({} hits)", before, usage.total());

    table.retain(|word_class, suffix| usage.contains(word_class, suffix));

    let after = table.rule_count();
    debug!("rules after pruning: {} ({} removed)", after, before - after);
}

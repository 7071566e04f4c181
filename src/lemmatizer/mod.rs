mod fixed;
mod trained;

pub use {fixed::Fixed, trained::Trained};

use crate::error::QueryError;

/// Predicted lemmas for one query, in resolution order. More than one entry
/// means the query is genuinely ambiguous.
pub type Lemmas = Vec<String>;

/// The capability shared by both lemmatizer variants.
pub trait Lemmatize {
    fn lemmatize(&self, word_class: &str, full_form: &str) -> Result<Lemmas, QueryError>;
}

/// A lemmatizer of either variant.
///
/// [`Trained`] induces its rule table from training pairs (or runs over a
/// supplied one); [`Fixed`] applies a hand-written table and never learns.
#[derive(Clone, Debug)]
pub enum Lemmatizer {
    Trained(Trained),
    Fixed(Fixed),
}

impl Lemmatize for Lemmatizer {
    fn lemmatize(&self, word_class: &str, full_form: &str) -> Result<Lemmas, QueryError> {
        match self {
            Lemmatizer::Trained(lemmatizer) => lemmatizer.lemmatize(word_class, full_form, None),
            Lemmatizer::Fixed(lemmatizer) => Ok(lemmatizer.lemmatize(word_class, full_form)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Fixed, Lemmatize, Lemmatizer, Trained};
    use crate::rules;

    #[test]
    fn test_lemmatizer_variants_dispatch() {
        let table = rules! { "sb." => { "er" => [("", false)] } };
        let trained = Lemmatizer::Trained(Trained::new(Some(table)));
        assert_eq!(trained.lemmatize("sb.", "venskaber").unwrap(), vec!["venskab"]);

        let fixed = Lemmatizer::Fixed(Fixed::danish());
        assert_eq!(fixed.lemmatize("noun", "husene").unwrap(), vec!["hus"]);
    }
}

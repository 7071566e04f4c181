pub mod applier;
pub mod error;
pub mod lemmatizer;
pub mod matcher;
pub mod pruner;
pub mod rule;
pub mod table;
pub mod trainer;

mod usage;

pub use {
    error::{Error, QueryError, TrainError},
    lemmatizer::{Fixed, Lemmas, Lemmatize, Lemmatizer, Trained},
    rule::Candidate,
    table::RuleTable,
};

extern crate thiserror;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Train(#[from] TrainError),

    #[error("{0}")]
    Query(#[from] QueryError),
}

/// Training errors.
#[derive(Debug, Error, PartialEq)]
pub enum TrainError {
    #[error("Training Data Error: {forms} full forms, {lemmas} lemmas")]
    LengthMismatch { forms: usize, lemmas: usize },
}

/// Query errors.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Lemmatizer Error: no rule table, train or supply one first")]
    Untrained,
}

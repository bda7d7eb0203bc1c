use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredicateError {
    #[error("parameter key at index {index} is empty")]
    EmptyKey { index: usize },
}

pub type PredicateResult<T> = Result<T, PredicateError>;

use crate::predicate::PredicateError;
use crate::types::HttpMethod;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("unknown route constraint '{name}'")]
    UnknownConstraint { name: String },
    #[error("constraint '{name}' expects a key or an array of keys (found {found})")]
    InvalidKeys { name: String, found: &'static str },
    #[error("route constraints must be a JSON object (found {found})")]
    NotAnObject { found: &'static str },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Predicate(#[from] PredicateError),
}

pub type ConstraintResult<T> = Result<T, ConstraintError>;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add {method:?} route")]
    AddWhileSealed { method: HttpMethod },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly route table is unavailable")]
    ReadOnlyUnavailable,
    #[error("maximum number of routes exceeded (limit {limit})")]
    MaxRoutesExceeded { limit: usize },
    #[error("no route matched for method {method:?}")]
    RouteNotFound { method: HttpMethod },
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

pub type RouterResult<T> = Result<T, RouterError>;

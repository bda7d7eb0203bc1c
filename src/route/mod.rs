mod constraint;
mod error;
mod evaluation;
mod options;
mod service;

pub use constraint::{PARAMS_LENIENT, PARAMS_STRICT, RouteConstraint, parse_constraints};
pub use error::{ConstraintError, ConstraintResult, RouterError, RouterResult};
pub use evaluation::{RouteEvaluation, evaluate_route};
pub use options::{
    DEFAULT_MAX_ROUTES, GroupCommit, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::{RouteTable, Router};

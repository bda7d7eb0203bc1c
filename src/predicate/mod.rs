mod error;
mod matcher;
mod policy;
mod spec;

pub use error::{PredicateError, PredicateResult};
pub use matcher::{Captures, ParamPredicate, match_group, match_single};
pub use policy::MatchPolicy;
pub use spec::MatchSpec;

pub mod params;
pub mod predicate;
pub mod route;
pub mod types;

pub use params::{ParamSource, RequestParams};
pub use predicate::{
    Captures, MatchPolicy, MatchSpec, ParamPredicate, PredicateError, match_group, match_single,
};
pub use route::{
    GroupCommit, RouteTable, Router, RouterError, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError, RouterResult,
};
pub use types::{HttpMethod, RouteKey, RouteMatch};

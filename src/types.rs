use crate::predicate::Captures;

pub type RouteKey = u16;

/// Matched route key and the captures handed to its handler, in order.
pub type RouteMatch = (RouteKey, Captures);

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

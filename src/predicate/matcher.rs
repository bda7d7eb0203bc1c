use smallvec::SmallVec;

use super::{MatchPolicy, MatchSpec, PredicateResult};
use crate::params::ParamSource;

/// Positional values collected while one route is being matched.
pub type Captures = SmallVec<[String; 4]>;

/// Looks up `key` and, when `policy` accepts its value, appends the value to
/// `captures`. Nothing is appended on a miss.
#[tracing::instrument(level = "trace", skip(params, captures))]
pub fn match_single<P>(params: &P, key: &str, policy: MatchPolicy, captures: &mut Captures) -> bool
where
    P: ParamSource + ?Sized,
{
    match params.param(key) {
        Some(value) if policy.accepts(value) => {
            captures.push(value.to_owned());
            true
        }
        _ => false,
    }
}

/// Matches every key in order and stops at the first miss.
///
/// Values appended for keys before the miss are left in `captures`; callers
/// that must not observe them truncate back to their own checkpoint.
#[tracing::instrument(level = "trace", skip(params, keys, captures), fields(key_count=keys.len() as u64))]
pub fn match_group<P, K>(params: &P, keys: &[K], policy: MatchPolicy, captures: &mut Captures) -> bool
where
    P: ParamSource + ?Sized,
    K: AsRef<str>,
{
    keys.iter()
        .all(|key| match_single(params, key.as_ref(), policy, captures))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamPredicate {
    spec: MatchSpec,
    policy: MatchPolicy,
}

impl ParamPredicate {
    pub fn new<S: Into<MatchSpec>>(spec: S, policy: MatchPolicy) -> PredicateResult<Self> {
        let spec = spec.into();
        spec.validate()?;
        Ok(Self { spec, policy })
    }

    pub fn lenient<S: Into<MatchSpec>>(spec: S) -> PredicateResult<Self> {
        Self::new(spec, MatchPolicy::Lenient)
    }

    pub fn strict<S: Into<MatchSpec>>(spec: S) -> PredicateResult<Self> {
        Self::new(spec, MatchPolicy::Strict)
    }

    pub fn spec(&self) -> &MatchSpec {
        &self.spec
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn evaluate<P>(&self, params: &P, captures: &mut Captures) -> bool
    where
        P: ParamSource + ?Sized,
    {
        match &self.spec {
            MatchSpec::Single(key) => match_single(params, key, self.policy, captures),
            MatchSpec::Group(keys) => match_group(params, keys.as_slice(), self.policy, captures),
        }
    }

    /// Like [`evaluate`](Self::evaluate), but `captures` only grows when
    /// every key matched.
    pub fn evaluate_buffered<P>(&self, params: &P, captures: &mut Captures) -> bool
    where
        P: ParamSource + ?Sized,
    {
        let mut scratch = Captures::with_capacity(self.spec.arity());
        if !self.evaluate(params, &mut scratch) {
            return false;
        }
        captures.extend(scratch);
        true
    }
}

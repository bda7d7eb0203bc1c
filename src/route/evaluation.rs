use super::GroupCommit;
use crate::params::ParamSource;
use crate::predicate::{Captures, ParamPredicate};

/// One attempt at matching a single route; owns the captures for that attempt.
#[derive(Debug, Default)]
pub struct RouteEvaluation {
    captures: Captures,
    commit: GroupCommit,
}

impl RouteEvaluation {
    pub fn new(commit: GroupCommit) -> Self {
        Self {
            captures: Captures::new(),
            commit,
        }
    }

    /// Applies one predicate. Under [`GroupCommit::Eager`] a failed group
    /// leaves the values of the keys before its miss in the captures; under
    /// [`GroupCommit::Buffered`] a miss appends nothing.
    pub fn check<P>(&mut self, predicate: &ParamPredicate, params: &P) -> bool
    where
        P: ParamSource + ?Sized,
    {
        match self.commit {
            GroupCommit::Eager => predicate.evaluate(params, &mut self.captures),
            GroupCommit::Buffered => predicate.evaluate_buffered(params, &mut self.captures),
        }
    }

    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    pub fn finish(self) -> Captures {
        self.captures
    }
}

/// Runs a route's predicate chain in order. Captures come back only when
/// every predicate matched; a failed attempt is discarded whole.
pub fn evaluate_route<'a, I, P>(predicates: I, params: &P, commit: GroupCommit) -> Option<Captures>
where
    I: IntoIterator<Item = &'a ParamPredicate>,
    P: ParamSource + ?Sized,
{
    let mut evaluation = RouteEvaluation::new(commit);
    for predicate in predicates {
        if !evaluation.check(predicate, params) {
            return None;
        }
    }
    Some(evaluation.finish())
}

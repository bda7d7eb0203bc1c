use serde_json::Value;

use super::{ConstraintError, ConstraintResult};
use crate::predicate::{MatchPolicy, MatchSpec, ParamPredicate};

pub const PARAMS_LENIENT: &str = "params";
pub const PARAMS_STRICT: &str = "params!";

/// Route-definition constraint names understood by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteConstraint {
    Params,
    ParamsStrict,
}

impl RouteConstraint {
    pub fn from_name(name: &str) -> ConstraintResult<Self> {
        match name {
            PARAMS_LENIENT => Ok(RouteConstraint::Params),
            PARAMS_STRICT => Ok(RouteConstraint::ParamsStrict),
            _ => Err(ConstraintError::UnknownConstraint {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RouteConstraint::Params => PARAMS_LENIENT,
            RouteConstraint::ParamsStrict => PARAMS_STRICT,
        }
    }

    pub fn policy(self) -> MatchPolicy {
        match self {
            RouteConstraint::Params => MatchPolicy::Lenient,
            RouteConstraint::ParamsStrict => MatchPolicy::Strict,
        }
    }

    /// Builds the predicate for one declaration such as `"params!": ["foo", "baz"]`.
    pub fn from_declaration(name: &str, value: &Value) -> ConstraintResult<ParamPredicate> {
        let constraint = Self::from_name(name)?;
        let spec = keys_from_value(constraint.name(), value)?;
        Ok(ParamPredicate::new(spec, constraint.policy())?)
    }
}

fn keys_from_value(name: &str, value: &Value) -> ConstraintResult<MatchSpec> {
    let invalid = |found: &'static str| ConstraintError::InvalidKeys {
        name: name.to_string(),
        found,
    };

    match value {
        Value::String(key) => Ok(MatchSpec::single(key.as_str())),
        Value::Array(items) => {
            let mut keys = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(key) => keys.push(key.clone()),
                    other => return Err(invalid(json_type(other))),
                }
            }
            Ok(MatchSpec::Group(keys))
        }
        other => Err(invalid(json_type(other))),
    }
}

/// Parses a constraint object, keeping declaration order.
pub fn parse_constraints(json: &str) -> ConstraintResult<Vec<ParamPredicate>> {
    let value: Value = serde_json::from_str(json)?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ConstraintError::NotAnObject {
                found: json_type(&other),
            });
        }
    };

    map.iter()
        .map(|(name, keys)| RouteConstraint::from_declaration(name, keys))
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateError;
    use serde_json::json;

    #[test]
    fn bang_suffix_selects_strict_policy() {
        let predicate =
            RouteConstraint::from_declaration("params!", &json!(["foo", "baz"])).unwrap();
        assert_eq!(predicate.policy(), MatchPolicy::Strict);
        assert_eq!(predicate.spec(), &MatchSpec::group(["foo", "baz"]));

        let predicate = RouteConstraint::from_declaration("params", &json!("foo")).unwrap();
        assert_eq!(predicate.policy(), MatchPolicy::Lenient);
        assert_eq!(predicate.spec(), &MatchSpec::single("foo"));
    }

    #[test]
    fn declarations_keep_document_order() {
        let predicates = parse_constraints(r#"{"params!": ["b", "a"], "params": "c"}"#).unwrap();
        assert_eq!(predicates.len(), 2);
        assert_eq!(predicates[0].spec().keys(), ["b", "a"]);
        assert_eq!(predicates[1].spec().keys(), ["c"]);
    }

    #[test]
    fn non_string_key_is_rejected() {
        let err = RouteConstraint::from_declaration("params", &json!(["a", 1])).unwrap_err();
        match err {
            ConstraintError::InvalidKeys { name, found } => {
                assert_eq!(name, "params");
                assert_eq!(found, "number");
            }
            other => panic!("expected InvalidKeys, got {other:?}"),
        }
    }

    #[test]
    fn unknown_constraint_is_rejected() {
        let err = parse_constraints(r#"{"query": "a"}"#).unwrap_err();
        match err {
            ConstraintError::UnknownConstraint { name } => assert_eq!(name, "query"),
            other => panic!("expected UnknownConstraint, got {other:?}"),
        }
    }

    #[test]
    fn empty_key_surfaces_predicate_error() {
        let err = parse_constraints(r#"{"params!": ["a", ""]}"#).unwrap_err();
        match err {
            ConstraintError::Predicate(PredicateError::EmptyKey { index }) => {
                assert_eq!(index, 1)
            }
            other => panic!("expected EmptyKey, got {other:?}"),
        }
    }

    #[test]
    fn top_level_must_be_object() {
        let err = parse_constraints(r#"["params"]"#).unwrap_err();
        match err {
            ConstraintError::NotAnObject { found } => assert_eq!(found, "array"),
            other => panic!("expected NotAnObject, got {other:?}"),
        }
    }
}

use serde_json::Value;
use crate::errors::{Result, TwclsxError};

/// Arguments of a dynamic call after resolving which slot holds what.
///
/// The first argument may be the shared classes or, when there are none, the
/// responsive object itself. Resolution happens once, before any flattening,
/// and validates every responsive value so a call either fails up front or
/// produces a full result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs<'a> {
    /// Classes applied to all breakpoints
    pub base: &'a str,
    /// `(breakpoint, classes)` pairs in the responsive object's order
    pub entries: Vec<(&'a str, &'a str)>,
}

impl<'a> ResolvedArgs<'a> {
    /// Resolve the `(base, params)` pair of a dynamic call.
    ///
    /// * a missing `base` fails with [`TwclsxError::ParametersRequired`]
    /// * a string `base` is the shared classes, a missing `params` is an empty object
    /// * any other `base` is the responsive object and `params` is ignored
    /// * a `null` responsive object fails with [`TwclsxError::NullParams`]
    pub fn resolve(base: Option<&'a Value>, params: Option<&'a Value>) -> Result<Self> {
        let base = base.ok_or(TwclsxError::ParametersRequired)?;

        let (base, params) = match base {
            Value::String(classes) => (classes.as_str(), params),
            responsive => ("", Some(responsive)),
        };

        let entries = match params {
            None => Vec::new(),
            Some(Value::Null) => return Err(TwclsxError::NullParams),
            Some(Value::Object(map)) => map
                .iter()
                .map(|(breakpoint, value)| match value {
                    Value::String(classes) => Ok((breakpoint.as_str(), classes.as_str())),
                    other => Err(TwclsxError::IncorrectValueType {
                        breakpoint: breakpoint.clone(),
                        found: json_type(other),
                    }),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(TwclsxError::IncorrectParamsType {
                    found: json_type(other),
                })
            }
        };

        Ok(Self { base, entries })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

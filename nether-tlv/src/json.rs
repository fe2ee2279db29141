//! Conversions between `serde_json::Value` and `Value`
//!
//! JSON has no byte string or tuple, so the mapping is lossy in one
//! direction: `Bytes` become lowercase hex strings and tuples become arrays.

use serde_json::{Map, Number};

use crate::error::TlvError;
use crate::value::Value;

impl TryFrom<serde_json::Value> for Value {
    type Error = TlvError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n)?,
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => Value::Dict(
                map.into_iter()
                    .map(|(k, v)| Ok::<_, TlvError>((Value::Str(k), Value::try_from(v)?)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

fn number_to_value(n: &Number) -> Result<Value, TlvError> {
    if let Some(v) = n.as_i64() {
        return Ok(Value::Int(v));
    }
    if n.is_u64() {
        return Err(TlvError::UnsupportedType(format!(
            "integer {} does not fit in 64-bit signed range",
            n
        )));
    }
    match n.as_f64() {
        Some(v) => Ok(Value::from(v)),
        None => Err(TlvError::UnsupportedType(format!("number {}", n))),
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = TlvError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::None => serde_json::Value::Null,
            Value::Bytes(bytes) => serde_json::Value::String(hex::encode(bytes)),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(v) => serde_json::Value::Number((*v).into()),
            Value::Float(v) => Number::from_f64(*v as f64)
                .map(serde_json::Value::Number)
                .ok_or_else(|| TlvError::UnsupportedType(format!("non-finite float {}", v)))?,
            Value::Tuple(items) | Value::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Dict(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, val) in entries {
                    let Value::Str(key) = key else {
                        return Err(TlvError::UnsupportedType(format!(
                            "JSON object key {}",
                            key
                        )));
                    };
                    map.insert(key.clone(), serde_json::Value::try_from(val)?);
                }
                serde_json::Value::Object(map)
            }
        })
    }
}

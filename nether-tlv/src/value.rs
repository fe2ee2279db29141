//! The `Value` sum type

use core::fmt;

use crate::tag::TypeTag;

/// Any value the codec can serialize
///
/// Integers carry no width: `Int` is written as a 4-byte INT frame when it
/// fits in `i32` and as an 8-byte LONG frame otherwise. Floats are always
/// single precision on the wire.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value
    #[default]
    None,
    /// Raw binary blob
    Bytes(Vec<u8>),
    /// UTF-8 text
    Str(String),
    /// Boolean, never coerced to or from `Int`
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Single-precision float
    Float(f32),
    /// Fixed-arity ordered sequence
    Tuple(Vec<Value>),
    /// Variable-length ordered sequence
    List(Vec<Value>),
    /// Key/value entries in insertion order
    Dict(Vec<(Value, Value)>),
}

impl Value {
    /// Tag this value is written with
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::None => TypeTag::None,
            Value::Bytes(_) => TypeTag::Raw,
            Value::Str(_) => TypeTag::Str,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(v) if fits_int32(*v) => TypeTag::Int,
            Value::Int(_) => TypeTag::Long,
            Value::Float(_) => TypeTag::Float,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::List(_) => TypeTag::List,
            Value::Dict(_) => TypeTag::Dict,
        }
    }

    /// Whether this is the absent value
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Boolean payload; `Int` is never coerced
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Raw byte payload; `Str` is not returned as bytes
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Elements of a `Tuple` or `List`
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) | Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a dictionary entry by string key (first match wins)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict()?
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }
}

/// Whether `v` is written in the 4-byte INT form
#[inline]
pub(crate) fn fits_int32(v: i64) -> bool {
    i32::try_from(v).is_ok()
}

// =============================================================================
// Conversions
// =============================================================================

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

/// Narrows to `f32`; the wire format has no double-precision type.
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v as f32)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

// =============================================================================
// Display
// =============================================================================

/// Compact literal form: `None`, `b"\x00a"`, `"text"`, `(1,)`, `[1, 2]`,
/// `{"a": 1}`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bytes(bytes) => {
                f.write_str("b\"")?;
                for &b in bytes {
                    write!(f, "{}", core::ascii::escape_default(b))?;
                }
                f.write_str("\"")
            }
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_seq(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::List(items) => {
                f.write_str("[")?;
                write_seq(f, items)?;
                f.write_str("]")
            }
            Value::Dict(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_tag_selection() {
        assert_eq!(Value::Int(i32::MAX as i64).tag(), TypeTag::Int);
        assert_eq!(Value::Int(i32::MAX as i64 + 1).tag(), TypeTag::Long);
        assert_eq!(Value::Int(i32::MIN as i64).tag(), TypeTag::Int);
        assert_eq!(Value::Int(i32::MIN as i64 - 1).tag(), TypeTag::Long);
    }

    #[test]
    fn test_bool_is_not_int() {
        assert_eq!(Value::from(true).tag(), TypeTag::Bool);
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_eq!(Value::Bool(true).as_i64(), None);
    }

    #[test]
    fn test_f64_narrows() {
        assert_eq!(Value::from(0.1f64), Value::Float(0.1f32));
        assert_eq!(Value::from(2.0f64).as_f32(), Some(2.0));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::None);
        assert_eq!(Value::from(Some("x")), Value::Str("x".into()));
    }

    #[test]
    fn test_display() {
        let v = Value::Dict(vec![
            ("a".into(), 1.into()),
            (
                "b".into(),
                Value::List(vec![
                    true.into(),
                    Value::None,
                    Value::Tuple(vec![2.0f32.into(), Value::Bytes(b"x\x00".to_vec())]),
                ]),
            ),
        ]);
        assert_eq!(
            v.to_string(),
            r#"{"a": 1, "b": [true, None, (2.0, b"x\x00")]}"#
        );
        assert_eq!(Value::Tuple(vec![1.into()]).to_string(), "(1,)");
        assert_eq!(Value::Tuple(vec![]).to_string(), "()");
    }

    #[test]
    fn test_accessors_match_only_their_variant() {
        assert!(Value::None.is_none());
        assert!(!Value::Int(0).is_none());

        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Int(1).as_bool(), None);

        assert_eq!(Value::Bytes(b"ab".to_vec()).as_bytes(), Some(&b"ab"[..]));
        assert_eq!(Value::Str("ab".into()).as_bytes(), None);
    }

    #[test]
    fn test_get() {
        let v = Value::Dict(vec![("k".into(), 7.into()), (3.into(), 4.into())]);
        assert_eq!(v.get("k"), Some(&Value::Int(7)));
        assert_eq!(v.get("missing"), None);
        assert_eq!(Value::None.get("k"), None);
    }
}

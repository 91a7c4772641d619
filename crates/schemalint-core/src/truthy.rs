//! # JSON Truthiness
//!
//! Schema documents are loosely typed: a `required` flag may be `true`,
//! `1`, or `"yes"`, and a `type` may be an empty string left behind by a
//! generator. Rules test such fields for truthiness rather than for a
//! specific JSON type.
//!
//! | Value                         | Truthy |
//! |-------------------------------|--------|
//! | absent, `null`                | no     |
//! | `false` / `true`              | no / yes |
//! | number                        | no iff zero (`0`, `-0`, `0.0`) |
//! | string                        | no iff empty |
//! | array, object (even empty)    | yes    |

use serde_json::Value;

/// Coercion of a value to a boolean under the table above.
pub trait Truthy {
    /// Returns `true` if the value coerces to `true`.
    fn is_truthy(&self) -> bool;

    /// Returns `true` if the value coerces to `false`.
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            // Numbers outside f64 range are never zero.
            Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// An absent field is falsy.
impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_truthy())
    }
}

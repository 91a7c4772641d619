//! # Schema Node View
//!
//! Borrowed, read-only access to the fields rules care about on a schema
//! node. Only JSON objects have fields; every other JSON value behaves as
//! a node on which all fields are absent.

use serde_json::Value;

use crate::error::RuleError;
use crate::truthy::Truthy;

/// Field name marking a node as required.
pub const REQUIRED_FIELD: &str = "required";
/// Field name carrying the node's declared type.
pub const TYPE_FIELD: &str = "type";
/// Field name carrying a reference to another schema.
pub const REF_FIELD: &str = "$ref";

/// A borrowed view over one schema node.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    value: &'a Value,
}

impl<'a> SchemaNode<'a> {
    /// Wrap a node for inspection by `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NullSchema`] if `value` is `null`.
    pub fn new(value: &'a Value, rule: &str) -> Result<Self, RuleError> {
        if value.is_null() {
            return Err(RuleError::null_schema(rule));
        }
        Ok(Self { value })
    }

    /// The underlying JSON value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Look up a field; `None` for missing fields and for non-object nodes.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.value.as_object().and_then(|map| map.get(name))
    }

    /// Whether `required` is truthy.
    pub fn is_required(&self) -> bool {
        self.field(REQUIRED_FIELD).is_truthy()
    }

    /// Whether `type` is truthy.
    pub fn declares_type(&self) -> bool {
        self.field(TYPE_FIELD).is_truthy()
    }

    /// Whether `$ref` is truthy.
    pub fn declares_ref(&self) -> bool {
        self.field(REF_FIELD).is_truthy()
    }
}

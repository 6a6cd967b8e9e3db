//! Field readers over a JSON object.
//!
//! Optional readers return `None` for missing, null, or mistyped values;
//! mistyped values are logged and counted. Required readers fail with a
//! structural error carrying the field path.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::{DecodeError, FieldPath, Result};
use crate::telemetry;

pub(super) struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: &'a FieldPath,
}

impl<'a> Fields<'a> {
    pub(super) fn new(map: &'a Map<String, Value>, path: &'a FieldPath) -> Self {
        Self { map, path }
    }

    /// Read an optional field through `convert`; `None` from `convert` on a
    /// present, non-null value counts as a degraded field.
    pub(super) fn optional<T>(
        &self,
        key: &'static str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Option<T> {
        let value = match self.map.get(key) {
            None | Some(Value::Null) => return None,
            Some(value) => value,
        };
        let converted = convert(value);
        if converted.is_none() {
            degraded(&self.path.key(key), key);
        }
        converted
    }

    pub(super) fn string(&self, key: &'static str) -> Option<String> {
        self.optional(key, |v| v.as_str().map(str::to_owned))
    }

    pub(super) fn i64(&self, key: &'static str) -> Option<i64> {
        self.optional(key, Value::as_i64)
    }

    pub(super) fn u64(&self, key: &'static str) -> Option<u64> {
        self.optional(key, Value::as_u64)
    }

    pub(super) fn u32(&self, key: &'static str) -> Option<u32> {
        self.optional(key, |v| v.as_u64().and_then(|n| u32::try_from(n).ok()))
    }

    pub(super) fn object(&self, key: &'static str) -> Option<&'a Map<String, Value>> {
        self.optional(key, Value::as_object)
    }

    pub(super) fn array(&self, key: &'static str) -> Option<&'a Vec<Value>> {
        self.optional(key, Value::as_array)
    }

    pub(super) fn required_object(&self, key: &'static str) -> Result<&'a Map<String, Value>> {
        self.map
            .get(key)
            .and_then(Value::as_object)
            .ok_or_else(|| DecodeError::structural(self.path.key(key), "object"))
    }

    pub(super) fn required_array(&self, key: &'static str) -> Result<&'a Vec<Value>> {
        self.map
            .get(key)
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::structural(self.path.key(key), "array"))
    }

    pub(super) fn required_string(&self, key: &'static str) -> Result<String> {
        self.map
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| DecodeError::structural(self.path.key(key), "string"))
    }
}

/// Log and count an optional value at `field` that was dropped; `key` is
/// the wire key used as the metric label.
pub(super) fn degraded(field: &FieldPath, key: &'static str) {
    trace!(%field, "dropping mistyped optional field");
    metrics::counter!(telemetry::DEGRADED_FIELDS_TOTAL, "field" => key).increment(1);
}

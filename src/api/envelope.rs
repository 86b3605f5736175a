//! Response envelope normalization
//!
//! The backend wraps successful bodies in `{success: true, data, pagination?}`.
//! Unwrapping happens exactly once, here, for every call; endpoint
//! definitions only state the shape they expect. Bodies without the envelope
//! pass through unchanged for compatibility with older endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Pagination block attached to list responses. All fields optional; the
/// backend has not been consistent about which it sends.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// An unwrapped response: the payload plus any pagination that rode along.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    pub data: Value,
    pub pagination: Option<Value>,
}

impl Payload {
    /// Decode the payload into a concrete type.
    pub fn decode<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data)
    }

    /// Decode the pagination block, when present.
    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// Take the value under `key` if the payload is an object holding it,
    /// otherwise keep the payload as-is. Mirrors the per-endpoint
    /// `data.resellers || data` selection the backend's shapes require.
    pub fn pick(mut self, key: &str) -> Payload {
        if let Some(inner) = self.data.get_mut(key) {
            self.data = inner.take();
        }
        self
    }
}

/// Unwrap the `{success, data, pagination?}` envelope.
///
/// Only bodies that are objects with `success == true` and a `data` field
/// are unwrapped; anything else passes through untouched. Pagination is
/// taken from the envelope first, falling back to a block nested inside
/// `data`.
pub fn unwrap_envelope(body: Value) -> Payload {
    let is_envelope = body
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false)
        && body.get("data").is_some();

    if !is_envelope {
        return Payload {
            data: body,
            pagination: None,
        };
    }

    let mut body = body;
    let data = body
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null);
    let pagination = body
        .get_mut("pagination")
        .map(Value::take)
        .filter(|value| !value.is_null())
        .or_else(|| {
            data.get("pagination")
                .cloned()
                .filter(|value| !value.is_null())
        });

    Payload { data, pagination }
}

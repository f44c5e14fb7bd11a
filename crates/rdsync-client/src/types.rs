//! Raw deals page payload returned by the CRM endpoint.

use serde_json::Value;

/// One decoded JSON response for a (date, page) request.
///
/// The endpoint has been observed returning two shapes: a bare array of deal
/// records, or an object whose `deals` field holds that array. Both are
/// supported; no schema is enforced on the records themselves. The original
/// body is kept intact so the exporter can persist it byte-for-byte.
#[derive(Debug, Clone)]
pub struct DealsPage {
    body: Value,
}

impl DealsPage {
    #[must_use]
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// The extracted deal records. Unknown shapes (scalar body, missing or
    /// non-array `deals` field) extract as an empty slice.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        match &self.body {
            Value::Array(records) => records.as_slice(),
            Value::Object(map) => map
                .get("deals")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        }
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// The provider's `has_more` flag, when present. Advisory only: the flag
    /// has been observed disagreeing with the actual record count, so callers
    /// paginate on the count and at most log this hint.
    #[must_use]
    pub fn has_more_hint(&self) -> Option<bool> {
        self.body.get("has_more").and_then(Value::as_bool)
    }

    /// The full original response body, exactly as decoded.
    #[must_use]
    pub fn body(&self) -> &Value {
        &self.body
    }
}

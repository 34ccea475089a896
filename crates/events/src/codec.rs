//! JSON and map (de)serialization for envelopes.
//!
//! Everything here is a pure function over serde_json, which is stateless
//! and safe for unsynchronized concurrent use: there is no codec instance to
//! configure or lock. Unknown fields in incoming JSON are ignored, and
//! chrono's serde support emits ISO-8601 timestamps with offset.
//!
//! Plain (de)serialization never validates. The `validate_and_serialize` /
//! `deserialize_and_validate` composites bolt the explicit validator onto
//! either end; they introduce no rules of their own.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::envelope::CloudEvent;
use crate::error::EventResult;
use crate::validator::CloudEventValidator;

/// Encode an envelope as CloudEvents v1.0 JSON text.
///
/// A `None` payload is emitted as an explicit `"data": null`.
pub fn to_json<T: Serialize>(envelope: &CloudEvent<T>) -> EventResult<String> {
    Ok(serde_json::to_string(envelope)?)
}

/// Decode an envelope from JSON text.
///
/// Missing required string attributes decode to empty strings; catching
/// those is the validator's job, not a decode failure.
pub fn from_json<T: DeserializeOwned>(text: &str) -> EventResult<CloudEvent<T>> {
    Ok(serde_json::from_str(text)?)
}

/// Convert an envelope into a key→value map (wire names as keys).
///
/// Shares failure semantics with [`to_json`]: both route through the same
/// codec.
pub fn to_map<T: Serialize>(envelope: &CloudEvent<T>) -> EventResult<Map<String, Value>> {
    let value = serde_json::to_value(envelope)?;
    Ok(serde_json::from_value(value)?)
}

/// Rebuild an envelope from a key→value map produced by [`to_map`].
pub fn from_map<T: DeserializeOwned>(map: Map<String, Value>) -> EventResult<CloudEvent<T>> {
    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Re-coerce the envelope's payload into a concrete target type.
///
/// The payload may be a loosely-typed intermediate (e.g. a
/// [`serde_json::Value`] from a generic decode). Returns `None` only when
/// the payload itself is `None`; a coercion mismatch is a serialization
/// failure.
pub fn extract_data<T, R>(envelope: &CloudEvent<T>) -> EventResult<Option<R>>
where
    T: Serialize,
    R: DeserializeOwned,
{
    match envelope.data() {
        None => Ok(None),
        Some(data) => {
            let value = serde_json::to_value(data)?;
            Ok(Some(serde_json::from_value(value)?))
        }
    }
}

/// Retarget an envelope's payload type without touching its metadata.
///
/// Every attribute except `data` is carried over unchanged; `data` is
/// re-coerced via [`extract_data`].
pub fn convert_data<T, R>(envelope: CloudEvent<T>) -> EventResult<CloudEvent<R>>
where
    T: Serialize,
    R: DeserializeOwned,
{
    let data = extract_data(&envelope)?;
    Ok(envelope.with_data(data))
}

/// Validate, then serialize. Raises the validation failure (with the full
/// ordered violation list) before any encoding happens.
pub fn validate_and_serialize<T: Serialize>(
    validator: &CloudEventValidator,
    envelope: &CloudEvent<T>,
) -> EventResult<String> {
    validator.validate(envelope).raise_if_invalid()?;
    tracing::trace!(event_type = envelope.event_type(), id = envelope.id(), "serializing validated envelope");
    to_json(envelope)
}

/// Deserialize, then validate. A well-formed but rule-violating envelope
/// raises the validation failure, not a serialization failure.
pub fn deserialize_and_validate<T: DeserializeOwned>(
    validator: &CloudEventValidator,
    text: &str,
) -> EventResult<CloudEvent<T>> {
    let envelope = from_json(text)?;
    validator.validate(&envelope).raise_if_invalid()?;
    Ok(envelope)
}

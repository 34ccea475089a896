use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// CloudEvents specification version this library produces.
pub const SPEC_VERSION: &str = "1.0";

/// CloudEvents v1.0 envelope, generic over the payload type.
///
/// This is the unit handed to a publisher (outbound) or received from a
/// transport (inbound).
///
/// Notes:
/// - **Immutable**: fields are private; "mutation" means rebuilding via
///   [`CloudEvent::with_data`] or the builder.
/// - **Permissive by construction**: required attributes may be blank here.
///   Correctness is checked by the explicit validator, never at construction
///   or during plain (de)serialization. Missing required attributes in
///   incoming JSON decode to empty strings for the same reason.
/// - Wire names follow the CloudEvents JSON encoding (`specversion`, `type`,
///   `datacontenttype`, `dataschema`).
/// - `data` is always emitted, so a `None` payload serializes as an explicit
///   `"data": null` and round-trips back to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct CloudEvent<T> {
    #[serde(default)]
    id: String,

    #[serde(default)]
    source: String,

    #[serde(rename = "specversion", default)]
    spec_version: String,

    #[serde(rename = "type", default)]
    event_type: String,

    #[serde(rename = "datacontenttype", default, skip_serializing_if = "Option::is_none")]
    data_content_type: Option<String>,

    #[serde(rename = "dataschema", default, skip_serializing_if = "Option::is_none")]
    data_schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<DateTime<Utc>>,

    #[serde(default)]
    data: Option<T>,
}

impl<T> CloudEvent<T> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: String,
        source: String,
        spec_version: String,
        event_type: String,
        data_content_type: Option<String>,
        data_schema: Option<String>,
        subject: Option<String>,
        time: Option<DateTime<Utc>>,
        data: Option<T>,
    ) -> Self {
        Self {
            id,
            source,
            spec_version,
            event_type,
            data_content_type,
            data_schema,
            subject,
            time,
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn data_content_type(&self) -> Option<&str> {
        self.data_content_type.as_deref()
    }

    pub fn data_schema(&self) -> Option<&str> {
        self.data_schema.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Rebuild the envelope with a different payload, keeping every other
    /// attribute unchanged.
    pub fn with_data<R>(self, data: Option<R>) -> CloudEvent<R> {
        CloudEvent {
            id: self.id,
            source: self.source,
            spec_version: self.spec_version,
            event_type: self.event_type,
            data_content_type: self.data_content_type,
            data_schema: self.data_schema,
            subject: self.subject,
            time: self.time,
            data,
        }
    }
}

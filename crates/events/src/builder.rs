//! Envelope construction: stepwise builder plus a single-call factory.
//!
//! Both paths share one defaulting routine (`build`), so given identical
//! inputs they produce identical envelopes. Neither path validates; blank
//! required attributes are caught later by the explicit validator.

use chrono::{DateTime, Utc};

use relay_core::EventId;

use crate::envelope::{CloudEvent, SPEC_VERSION};

/// MIME type used for `datacontenttype` when the caller supplies none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Stepwise builder for [`CloudEvent`].
///
/// Defaults applied at `build()`:
/// - `id`: freshly generated (UUIDv7) unless supplied
/// - `time`: current instant unless supplied
/// - `specversion`: always `"1.0"`
/// - `datacontenttype`: `application/json` unless supplied
#[derive(Debug, Clone)]
pub struct CloudEventBuilder<T> {
    id: Option<String>,
    source: Option<String>,
    event_type: Option<String>,
    subject: Option<String>,
    data_content_type: Option<String>,
    data_schema: Option<String>,
    time: Option<DateTime<Utc>>,
    data: Option<T>,
}

impl<T> Default for CloudEventBuilder<T> {
    fn default() -> Self {
        Self {
            id: None,
            source: None,
            event_type: None,
            subject: None,
            data_content_type: None,
            data_schema: None,
            time: None,
            data: None,
        }
    }
}

impl<T> CloudEventBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn data_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.data_content_type = Some(content_type.into());
        self
    }

    pub fn data_schema(mut self, schema: impl Into<String>) -> Self {
        self.data_schema = Some(schema.into());
        self
    }

    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Assemble the envelope, applying defaults. Always succeeds.
    pub fn build(self) -> CloudEvent<T> {
        CloudEvent::from_parts(
            self.id.unwrap_or_else(|| EventId::new().to_string()),
            self.source.unwrap_or_default(),
            SPEC_VERSION.to_owned(),
            self.event_type.unwrap_or_default(),
            Some(
                self.data_content_type
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned()),
            ),
            self.data_schema,
            self.subject,
            Some(self.time.unwrap_or_else(Utc::now)),
            self.data,
        )
    }
}

impl<T> CloudEvent<T> {
    pub fn builder() -> CloudEventBuilder<T> {
        CloudEventBuilder::new()
    }

    /// Single-call factory for the common case: generated `id`, current
    /// `time`, default content type. Use the builder for the remaining
    /// optional attributes.
    pub fn of(source: impl Into<String>, event_type: impl Into<String>, data: T) -> Self {
        Self::builder()
            .source(source)
            .event_type(event_type)
            .data(data)
            .build()
    }

    /// Closure form of the builder. Purely ergonomic sugar over
    /// [`CloudEvent::builder`], no additional semantics.
    pub fn build_with(f: impl FnOnce(CloudEventBuilder<T>) -> CloudEventBuilder<T>) -> Self {
        f(Self::builder()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        "2026-03-01T10:30:00Z".parse().unwrap()
    }

    #[test]
    fn factory_and_builder_are_equivalent_for_identical_inputs() {
        let from_factory = CloudEvent::of("urn:svc:order", "com.example.order.created", 42);

        // Pin the generated id/time so both paths see identical inputs.
        let from_builder = CloudEvent::builder()
            .id(from_factory.id())
            .time(from_factory.time().unwrap())
            .source("urn:svc:order")
            .event_type("com.example.order.created")
            .data(42)
            .build();

        assert_eq!(from_factory, from_builder);
    }

    #[test]
    fn factory_populates_generated_defaults() {
        let event = CloudEvent::of("urn:svc:order", "com.example.order.created", 42);

        assert!(!event.id().trim().is_empty());
        assert!(event.time().is_some());
        assert_eq!(event.spec_version(), SPEC_VERSION);
        assert_eq!(event.data_content_type(), Some(DEFAULT_CONTENT_TYPE));
    }

    #[test]
    fn build_with_matches_stepwise_builder() {
        let stepwise = CloudEvent::builder()
            .id("evt-2")
            .time(fixed_time())
            .source("urn:svc:billing")
            .event_type("com.example.invoice.issued")
            .subject("inv-9")
            .data("payload")
            .build();

        let block = CloudEvent::build_with(|b| {
            b.id("evt-2")
                .time(fixed_time())
                .source("urn:svc:billing")
                .event_type("com.example.invoice.issued")
                .subject("inv-9")
                .data("payload")
        });

        assert_eq!(stepwise, block);
    }

    #[test]
    fn construction_succeeds_with_blank_required_attributes() {
        let event: CloudEvent<()> = CloudEvent::builder().id(" ").build();

        assert_eq!(event.id(), " ");
        assert_eq!(event.source(), "");
        assert_eq!(event.event_type(), "");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a: CloudEvent<()> = CloudEvent::builder().build();
        let b: CloudEvent<()> = CloudEvent::builder().build();
        assert_ne!(a.id(), b.id());
    }
}

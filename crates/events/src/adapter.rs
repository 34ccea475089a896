//! Domain-event → envelope adapter.
//!
//! A pure, side-effect-free transform: it never mutates the domain event and
//! performs no I/O. The event's identity fields map onto the envelope
//! (`id`/`time`/`type`/`subject`), the event itself becomes the payload.

use crate::envelope::CloudEvent;
use crate::event::DomainEvent;

/// Schema URN derived from an event's declared type and version.
pub fn schema_urn<E: DomainEvent>(event: &E) -> String {
    format!("urn:schema:{}:{}", event.event_type(), event.event_version())
}

/// Wrap a domain event in a CloudEvents envelope for the given producer
/// `source`.
///
/// Like every construction path this does not validate; run the envelope
/// through [`CloudEventValidator`](crate::CloudEventValidator) before
/// handing it to a publisher.
pub fn to_cloud_event<E>(event: &E, source: impl Into<String>) -> CloudEvent<E>
where
    E: DomainEvent,
{
    CloudEvent::builder()
        .id(event.event_id().to_string())
        .source(source)
        .event_type(event.event_type())
        .subject(event.aggregate_id().to_string())
        .time(event.occurred_at())
        .data_schema(schema_urn(event))
        .data(event.clone())
        .build()
}

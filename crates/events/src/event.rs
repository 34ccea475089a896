use chrono::{DateTime, Utc};

use relay_core::{AggregateId, EventId};

/// A business-level occurrence, prior to being wrapped in a transport
/// envelope.
///
/// Domain events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution via `event_version`)
/// - adapted onto a [`CloudEvent`](crate::CloudEvent) for transport; they do
///   not carry a `specversion` themselves
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Unique identity of this occurrence.
    fn event_id(&self) -> EventId;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Stable reverse-domain event type (e.g. `com.example.order.created`).
    fn event_type(&self) -> &str;

    /// Identifier of the business entity the event concerns.
    fn aggregate_id(&self) -> AggregateId;

    /// Schema version of this event type.
    fn event_version(&self) -> &str {
        "1.0"
    }

    /// Whether this event must be published to external consumers.
    ///
    /// Capability flag, not a separate hierarchy: internal-only events keep
    /// the default `false`.
    fn is_publishable(&self) -> bool {
        false
    }
}

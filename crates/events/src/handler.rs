//! Event handling contract exposed to consumers.
//!
//! Dispatch, registration, and ordering across multiple handlers are the
//! caller's responsibility; this crate only fixes the shape of a handler so
//! services agree on it.

use std::sync::Arc;

use crate::envelope::CloudEvent;

/// Consumer-side handler for envelopes carrying payload `T`.
pub trait EventHandler<T>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    /// Process one envelope. Idempotency is the implementor's concern;
    /// transports may deliver more than once.
    fn handle(&self, envelope: &CloudEvent<T>) -> Result<(), Self::Error>;

    /// Whether this handler is interested in the given event type.
    fn can_handle(&self, event_type: &str) -> bool;

    /// Relative ordering among handlers of the same event; lower runs first.
    fn priority_order(&self) -> i32 {
        0
    }
}

impl<T, H> EventHandler<T> for Arc<H>
where
    H: EventHandler<T> + ?Sized,
{
    type Error = H::Error;

    fn handle(&self, envelope: &CloudEvent<T>) -> Result<(), Self::Error> {
        (**self).handle(envelope)
    }

    fn can_handle(&self, event_type: &str) -> bool {
        (**self).can_handle(event_type)
    }

    fn priority_order(&self) -> i32 {
        (**self).priority_order()
    }
}

//! Event publishing abstraction (mechanics only).
//!
//! This library does not implement transport. The publisher is a consumed
//! seam: callers hand it well-formed envelopes (typically after
//! `validate_and_serialize` upstream) and the implementation decides how
//! they travel. Concurrency, retry, and failure isolation belong to the
//! implementation, never to this crate: there is no queueing, no dedup, and
//! no cross-call state here.

use std::sync::{Arc, Mutex};

use crate::adapter::to_cloud_event;
use crate::envelope::CloudEvent;
use crate::event::DomainEvent;

/// Transport-agnostic publisher for envelopes carrying payload `T`.
///
/// Errors are implementation-specific, therefore associated.
pub trait EventPublisher<T>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, envelope: CloudEvent<T>) -> Result<(), Self::Error>;

    /// Publish several envelopes, stopping at the first failure.
    fn publish_batch(&self, envelopes: Vec<CloudEvent<T>>) -> Result<(), Self::Error> {
        for envelope in envelopes {
            self.publish(envelope)?;
        }
        Ok(())
    }
}

impl<T, P> EventPublisher<T> for Arc<P>
where
    P: EventPublisher<T> + ?Sized,
{
    type Error = P::Error;

    fn publish(&self, envelope: CloudEvent<T>) -> Result<(), Self::Error> {
        (**self).publish(envelope)
    }

    fn publish_batch(&self, envelopes: Vec<CloudEvent<T>>) -> Result<(), Self::Error> {
        (**self).publish_batch(envelopes)
    }
}

/// Adapt a domain event into an envelope and hand it to the publisher.
pub fn publish_domain_event<P, E>(
    publisher: &P,
    event: &E,
    source: impl Into<String>,
) -> Result<(), P::Error>
where
    P: EventPublisher<E>,
    E: DomainEvent,
{
    let envelope = to_cloud_event(event, source);
    tracing::debug!(
        event_type = envelope.event_type(),
        id = envelope.id(),
        "publishing domain event"
    );
    publisher.publish(envelope)
}

#[derive(Debug)]
pub enum InMemoryPublisherError {
    /// Publish failed due to internal lock poisoning.
    Poisoned,
}

/// In-memory recording publisher for tests/dev.
///
/// - No IO / no async
/// - Envelopes are recorded in publish order
#[derive(Debug)]
pub struct InMemoryPublisher<T> {
    published: Mutex<Vec<CloudEvent<T>>>,
}

impl<T> InMemoryPublisher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Envelopes published so far, in order.
    ///
    /// A poisoned lock is surfaced, same as in `publish`; silently reporting
    /// an empty list would hide a panicked writer.
    pub fn published(&self) -> Result<Vec<CloudEvent<T>>, InMemoryPublisherError>
    where
        T: Clone,
    {
        self.published
            .lock()
            .map(|p| p.clone())
            .map_err(|_| InMemoryPublisherError::Poisoned)
    }
}

impl<T> Default for InMemoryPublisher<T> {
    fn default() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }
}

impl<T> EventPublisher<T> for InMemoryPublisher<T>
where
    T: Send + 'static,
{
    type Error = InMemoryPublisherError;

    fn publish(&self, envelope: CloudEvent<T>) -> Result<(), Self::Error> {
        let mut published = self
            .published
            .lock()
            .map_err(|_| InMemoryPublisherError::Poisoned)?;
        published.push(envelope);
        Ok(())
    }
}

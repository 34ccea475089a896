//! `relay-events` — CloudEvents v1.0 envelopes for service-to-service events.
//!
//! Production flow: domain event → envelope → validate → serialize →
//! (external publisher). Consumption flow: text → deserialize → validate →
//! envelope → (external handler dispatch).
//!
//! Construction never validates; validation is an explicit step returning a
//! [`ValidationResult`]. Serialization and validation failures are distinct
//! [`EventError`] variants and are never conflated.

pub mod adapter;
pub mod builder;
pub mod codec;
pub mod envelope;
pub mod error;
pub mod event;
pub mod handler;
pub mod publisher;
pub mod validator;

pub use adapter::to_cloud_event;
pub use builder::CloudEventBuilder;
pub use envelope::{CloudEvent, SPEC_VERSION};
pub use error::{EventError, EventResult};
pub use event::DomainEvent;
pub use handler::EventHandler;
pub use publisher::{EventPublisher, InMemoryPublisher, publish_domain_event};
pub use validator::{CloudEventValidator, SourceRule, ValidationResult};

//! Structural validation against the CloudEvents v1.0 rules.
//!
//! Rules are evaluated independently and all collected (never
//! short-circuited), in a fixed order, so one call surfaces every violation
//! and diagnostics are deterministic. Envelope rule order:
//!
//! 1. `id` non-blank
//! 2. `source` non-blank (or a parseable URI/URN, see [`SourceRule`])
//! 3. `specversion` equals `"1.0"` exactly
//! 4. `type` non-blank
//! 5. `dataschema`, when present, a parseable URI
//!
//! `time` is strongly typed on the envelope, so an unparseable timestamp
//! surfaces at decode as a serialization failure rather than here.

use url::Url;

use crate::envelope::{CloudEvent, SPEC_VERSION};
use crate::error::EventError;
use crate::event::DomainEvent;

/// Outcome of one `validate` call.
///
/// Immutable once produced: inspect it (`is_valid`, `errors`) or convert an
/// invalid result into a raised failure via [`raise_if_invalid`](Self::raise_if_invalid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// A valid result with no violations.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from collected violations; valid iff the list is
    /// empty. Insertion order is preserved.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Violations in rule-evaluation order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// No-op when valid; otherwise raises an [`EventError::Validation`]
    /// carrying the full ordered violation list.
    pub fn raise_if_invalid(self) -> Result<(), EventError> {
        if self.valid {
            Ok(())
        } else {
            Err(EventError::Validation(self.errors))
        }
    }
}

/// How strictly the `source` attribute is checked.
///
/// Whether `source` must be a parseable URI/URN or merely non-blank is a
/// project convention, so it is configurable rather than hard-coded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SourceRule {
    /// `source` must be non-blank.
    #[default]
    NonBlank,
    /// `source` must additionally parse as an absolute URI/URN
    /// (structural check only, never resolved).
    Uri,
}

/// Stateless validator for envelopes and domain events.
///
/// Safe to share freely; `validate` never mutates its input.
#[derive(Debug, Clone, Default)]
pub struct CloudEventValidator {
    source_rule: SourceRule,
}

impl CloudEventValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_rule(source_rule: SourceRule) -> Self {
        Self { source_rule }
    }

    pub fn source_rule(&self) -> SourceRule {
        self.source_rule
    }

    /// Check an envelope against the CloudEvents v1.0 structural rules.
    pub fn validate<T>(&self, event: &CloudEvent<T>) -> ValidationResult {
        let mut errors = Vec::new();

        if event.id().trim().is_empty() {
            errors.push("id must not be blank".to_owned());
        }

        if event.source().trim().is_empty() {
            errors.push("source must not be blank".to_owned());
        } else if self.source_rule == SourceRule::Uri {
            if let Err(e) = Url::parse(event.source()) {
                errors.push(format!("source is not a valid URI: {e}"));
            }
        }

        if event.spec_version() != SPEC_VERSION {
            errors.push(format!(
                "specversion must be \"{SPEC_VERSION}\" (got \"{}\")",
                event.spec_version()
            ));
        }

        if event.event_type().trim().is_empty() {
            errors.push("type must not be blank".to_owned());
        }

        if let Some(schema) = event.data_schema() {
            if let Err(e) = Url::parse(schema) {
                errors.push(format!("dataschema is not a valid URI: {e}"));
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Check a domain event against project conventions before it is
    /// adapted into an envelope. Identity and time are strongly typed, so
    /// only the textual attributes need checking: `event_type` non-blank,
    /// then `event_version` non-blank.
    pub fn validate_domain_event<E: DomainEvent>(&self, event: &E) -> ValidationResult {
        let mut errors = Vec::new();

        if event.event_type().trim().is_empty() {
            errors.push("event_type must not be blank".to_owned());
        }

        if event.event_version().trim().is_empty() {
            errors.push("event_version must not be blank".to_owned());
        }

        ValidationResult::from_errors(errors)
    }
}

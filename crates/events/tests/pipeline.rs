//! Black-box test of the full event pipeline:
//! domain event → envelope → validate → serialize → deserialize → validate →
//! handler, plus the publisher seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use relay_core::{AggregateId, EventId};
use relay_events::{
    CloudEvent, CloudEventValidator, DomainEvent, EventHandler, InMemoryPublisher, SourceRule,
    codec, publish_domain_event, to_cloud_event,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct OrderCreated {
    event_id: EventId,
    order_id: AggregateId,
    occurred_at: DateTime<Utc>,
    amount: i64,
}

impl DomainEvent for OrderCreated {
    fn event_id(&self) -> EventId {
        self.event_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &str {
        "com.example.order.created"
    }

    fn aggregate_id(&self) -> AggregateId {
        self.order_id
    }

    fn is_publishable(&self) -> bool {
        true
    }
}

fn order_created() -> OrderCreated {
    OrderCreated {
        event_id: EventId::new(),
        order_id: AggregateId::new(),
        occurred_at: Utc::now(),
        amount: 10_000,
    }
}

#[test]
fn produce_and_consume_round_trip() {
    relay_observability::init();

    let validator = CloudEventValidator::with_source_rule(SourceRule::Uri);
    let event = order_created();

    // Produce: adapt, validate, serialize.
    let envelope = to_cloud_event(&event, "urn:svc:order");
    let text = codec::validate_and_serialize(&validator, &envelope).unwrap();

    // Consume: deserialize generically, validate, re-coerce the payload.
    let received: CloudEvent<Value> = codec::deserialize_and_validate(&validator, &text).unwrap();
    let payload: Option<OrderCreated> = codec::extract_data(&received).unwrap();

    assert_eq!(payload, Some(event.clone()));
    assert_eq!(received.id(), event.event_id().to_string());
    assert_eq!(received.subject(), Some(event.order_id.to_string().as_str()));
    assert_eq!(received.spec_version(), "1.0");
}

#[test]
fn publishable_events_reach_the_publisher() {
    let publisher = InMemoryPublisher::new();
    let events = vec![order_created(), order_created()];

    for event in &events {
        assert!(event.is_publishable());
        publish_domain_event(&publisher, event, "urn:svc:order").unwrap();
    }

    let published = publisher.published().unwrap();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].data(), Some(&events[0]));
    assert_eq!(published[1].data(), Some(&events[1]));
}

#[test]
fn handlers_see_retargeted_envelopes() {
    struct AmountCheck;

    impl EventHandler<OrderCreated> for AmountCheck {
        type Error = String;

        fn handle(&self, envelope: &CloudEvent<OrderCreated>) -> Result<(), Self::Error> {
            let order = envelope.data().ok_or("missing payload")?;
            if order.amount <= 0 {
                return Err("non-positive amount".to_owned());
            }
            Ok(())
        }

        fn can_handle(&self, event_type: &str) -> bool {
            event_type == "com.example.order.created"
        }
    }

    let event = order_created();
    let text = codec::to_json(&to_cloud_event(&event, "urn:svc:order")).unwrap();

    // A generic consumer decodes loosely, then retargets for the handler.
    let loose: CloudEvent<Value> = codec::from_json(&text).unwrap();
    let typed: CloudEvent<OrderCreated> = codec::convert_data(loose).unwrap();

    let handler = AmountCheck;
    assert!(handler.can_handle(typed.event_type()));
    assert_eq!(handler.priority_order(), 0);
    handler.handle(&typed).unwrap();
}

#[test]
fn invalid_wire_input_fails_on_the_validation_side() {
    let validator = CloudEventValidator::new();
    let text = r#"{"id":"  ","source":"urn:svc:order","specversion":"1.0","type":"","data":null}"#;

    let err = codec::deserialize_and_validate::<Value>(&validator, text).unwrap_err();
    let violations = err.violations();
    assert!(violations.iter().any(|v| v.contains("id")));
    assert!(violations.iter().any(|v| v.contains("type")));
}

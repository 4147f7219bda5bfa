//! Event dispatch and order state transitions.

use domain::{Event, EventPayload, Order, OrderStatus};

use crate::observer::Observer;
use crate::registry::OrderRegistry;

/// Routes each event through the order state-transition logic and then to
/// the registered observers.
///
/// The observer list is fixed at construction and notified in order after
/// every successful application. No state machine guards transition
/// legality: later events overwrite the status unconditionally.
pub struct EventProcessor {
    registry: OrderRegistry,
    observers: Vec<Box<dyn Observer>>,
}

impl EventProcessor {
    /// Creates a processor with a fixed observer list.
    pub fn new(observers: Vec<Box<dyn Observer>>) -> Self {
        Self {
            registry: OrderRegistry::new(),
            observers,
        }
    }

    /// Returns the order registry.
    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Applies one event to the registry and notifies observers.
    ///
    /// Events referencing an unknown order (any kind but Created) are
    /// dropped: no order is materialized, nothing is appended, no observer
    /// runs. Replaying an event is not idempotent; each successful
    /// application appends one history entry.
    pub fn process_event(&mut self, event: Event) {
        match &event.payload {
            EventPayload::Created(data) => {
                let order = Order::new(
                    event.order_id.clone(),
                    data.customer_id.clone(),
                    data.items.clone(),
                    data.total_amount,
                );
                // Last-write-wins: a duplicate Created replaces the prior
                // order, history included.
                self.registry.insert(order);
            }
            EventPayload::PaymentReceived(data) => {
                let Some(order) = self.lookup(&event) else {
                    return;
                };
                let status = if data.amount_paid >= order.total_amount {
                    OrderStatus::Paid
                } else {
                    OrderStatus::PartiallyPaid
                };
                order.update_status(status);
            }
            EventPayload::ShippingScheduled(_) => {
                let Some(order) = self.lookup(&event) else {
                    return;
                };
                order.update_status(OrderStatus::Shipped);
            }
            EventPayload::Cancelled(_) => {
                let Some(order) = self.lookup(&event) else {
                    return;
                };
                order.update_status(OrderStatus::Cancelled);
            }
        }

        self.commit(event);
    }

    fn lookup(&mut self, event: &Event) -> Option<&mut Order> {
        let order = self.registry.get_mut(&event.order_id);
        if order.is_none() {
            tracing::debug!(
                order_id = %event.order_id,
                kind = %event.kind(),
                "event references unknown order, dropping"
            );
        }
        order
    }

    /// Appends the applied event to the order history, then notifies the
    /// observers with the post-transition state.
    fn commit(&mut self, event: Event) {
        let order_id = event.order_id.clone();
        if let Some(order) = self.registry.get_mut(&order_id) {
            order.record(event);
        }

        let Some(order) = self.registry.get(&order_id) else {
            return;
        };
        let Some(event) = order.history.last() else {
            return;
        };
        for observer in &self.observers {
            if let Err(err) = observer.notify(order, event) {
                tracing::warn!(observer = observer.name(), %err, "observer failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use domain::{EventKind, Item, Money, OrderId};

    use crate::error::ObserverError;

    /// Records every notification it receives.
    #[derive(Default)]
    struct RecordingObserver {
        seen: Rc<RefCell<Vec<(EventKind, OrderId, OrderStatus)>>>,
    }

    impl Observer for RecordingObserver {
        fn name(&self) -> &'static str {
            "RecordingObserver"
        }

        fn notify(&self, order: &Order, event: &Event) -> crate::Result<()> {
            self.seen
                .borrow_mut()
                .push((event.kind(), order.order_id.clone(), order.status));
            Ok(())
        }
    }

    /// Always fails.
    struct FailingObserver;

    impl Observer for FailingObserver {
        fn name(&self) -> &'static str {
            "FailingObserver"
        }

        fn notify(&self, _order: &Order, _event: &Event) -> crate::Result<()> {
            Err(ObserverError::Other("boom".to_string()))
        }
    }

    fn created(event_id: &str, order_id: &str, total_cents: i64) -> Event {
        Event::created(
            event_id,
            None,
            order_id,
            "c1",
            vec![Item::new("sku1", 2)],
            Money::from_cents(total_cents),
        )
    }

    fn recording_processor() -> (EventProcessor, Rc<RefCell<Vec<(EventKind, OrderId, OrderStatus)>>>)
    {
        let observer = RecordingObserver::default();
        let seen = Rc::clone(&observer.seen);
        (EventProcessor::new(vec![Box::new(observer)]), seen)
    }

    #[test]
    fn test_created_registers_pending_order() {
        let (mut processor, seen) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.customer_id.as_str(), "c1");
        assert_eq!(order.total_amount, Money::from_cents(10000));
        assert_eq!(order.items, vec![Item::new("sku1", 2)]);
        assert_eq!(order.history.len(), 1);

        assert_eq!(
            seen.borrow().as_slice(),
            &[(EventKind::OrderCreated, OrderId::new("o1"), OrderStatus::Pending)]
        );
    }

    #[test]
    fn test_full_payment_marks_paid() {
        let (mut processor, _) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));
        processor.process_event(Event::payment_received(
            "e2",
            None,
            "o1",
            Money::from_cents(10000),
        ));

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.history.len(), 2);
    }

    #[test]
    fn test_overpayment_marks_paid() {
        let (mut processor, _) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));
        processor.process_event(Event::payment_received(
            "e2",
            None,
            "o1",
            Money::from_cents(15000),
        ));

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
    }

    #[test]
    fn test_partial_payment_marks_partially_paid() {
        let (mut processor, _) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));
        processor.process_event(Event::payment_received(
            "e2",
            None,
            "o1",
            Money::from_cents(9999),
        ));

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status, OrderStatus::PartiallyPaid);
    }

    #[test]
    fn test_shipping_marks_shipped_unconditionally() {
        let (mut processor, _) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));
        processor.process_event(Event::shipping_scheduled("e2", None, "o1", "2024-01-01"));

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_cancel_overrides_shipped() {
        let (mut processor, _) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));
        processor.process_event(Event::shipping_scheduled("e2", None, "o1", "2024-01-01"));
        processor.process_event(Event::cancelled("e3", None, "o1", "changed mind"));

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.history.len(), 3);
    }

    #[test]
    fn test_unknown_order_is_dropped_silently() {
        let (mut processor, seen) = recording_processor();
        processor.process_event(Event::payment_received(
            "e1",
            None,
            "o99",
            Money::from_cents(100),
        ));
        processor.process_event(Event::shipping_scheduled("e2", None, "o99", "2024-01-01"));
        processor.process_event(Event::cancelled("e3", None, "o99", "test"));

        assert!(processor.registry().is_empty());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_replay_is_not_idempotent() {
        let (mut processor, seen) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));

        let cancel = Event::cancelled("e2", None, "o1", "test");
        processor.process_event(cancel.clone());
        processor.process_event(cancel);

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.history.len(), 3);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_duplicate_created_overwrites() {
        let (mut processor, _) = recording_processor();
        processor.process_event(created("e1", "o1", 10000));
        processor.process_event(Event::payment_received(
            "e2",
            None,
            "o1",
            Money::from_cents(10000),
        ));
        processor.process_event(created("e3", "o1", 20000));

        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, Money::from_cents(20000));
        assert_eq!(order.history.len(), 1);
        assert_eq!(processor.registry().len(), 1);
    }

    #[test]
    fn test_failing_observer_does_not_abort_dispatch() {
        let recorder = RecordingObserver::default();
        let seen = Rc::clone(&recorder.seen);
        let mut processor =
            EventProcessor::new(vec![Box::new(FailingObserver), Box::new(recorder)]);

        processor.process_event(created("e1", "o1", 10000));

        // The failing observer is isolated; the recorder still ran and the
        // committed state is intact.
        assert_eq!(seen.borrow().len(), 1);
        let order = processor.registry().get(&OrderId::new("o1")).unwrap();
        assert_eq!(order.history.len(), 1);
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let first = RecordingObserver::default();
        let second = RecordingObserver::default();
        let seen_first = Rc::clone(&first.seen);
        let seen_second = Rc::clone(&second.seen);
        let shared_log: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        struct TaggingObserver {
            tag: &'static str,
            log: Rc<RefCell<Vec<&'static str>>>,
        }
        impl Observer for TaggingObserver {
            fn name(&self) -> &'static str {
                "TaggingObserver"
            }
            fn notify(&self, _order: &Order, _event: &Event) -> crate::Result<()> {
                self.log.borrow_mut().push(self.tag);
                Ok(())
            }
        }

        let mut processor = EventProcessor::new(vec![
            Box::new(TaggingObserver {
                tag: "a",
                log: Rc::clone(&shared_log),
            }),
            Box::new(first),
            Box::new(TaggingObserver {
                tag: "b",
                log: Rc::clone(&shared_log),
            }),
            Box::new(second),
        ]);
        assert_eq!(processor.observer_count(), 4);

        processor.process_event(created("e1", "o1", 10000));

        assert_eq!(shared_log.borrow().as_slice(), &["a", "b"]);
        assert_eq!(seen_first.borrow().len(), 1);
        assert_eq!(seen_second.borrow().len(), 1);
    }
}

//! Typed event construction from scanned record fields.

use domain::{Event, EventKind, Item, Money};

use crate::error::{ParseError, Result};
use crate::scanner::Fields;

/// Parses one record line into at most one event.
///
/// Returns `Ok(None)` for lines whose `eventType` is missing or
/// unrecognized; those are skipped with a diagnostic, not treated as
/// errors. Malformed or missing fields for a recognized kind fail the
/// whole line.
pub fn parse_record(line: &str) -> Result<Option<Event>> {
    let fields = Fields::scan(line)?;

    let Some(tag) = fields.get("eventType") else {
        tracing::warn!(line, "record has no eventType, skipping");
        return Ok(None);
    };
    let Some(kind) = EventKind::from_tag(tag) else {
        tracing::warn!(event_type = tag, "unsupported event type, skipping");
        return Ok(None);
    };

    let event_id = require(&fields, "eventId")?;
    let order_id = require(&fields, "orderId")?;
    let timestamp = fields.get("timestamp").map(str::to_string);

    let event = match kind {
        EventKind::OrderCreated => {
            let customer_id = require(&fields, "customerId")?;
            let total_amount = money_field(&fields, "totalAmount")?;
            // The record format carries at most one item; an incomplete
            // itemId/qty pair yields an empty item list.
            let items = match (fields.get("itemId"), fields.get("qty")) {
                (Some(item_id), Some(qty)) => {
                    vec![Item::new(item_id, int_field("qty", qty)?)]
                }
                _ => Vec::new(),
            };
            Event::created(event_id, timestamp, order_id, customer_id, items, total_amount)
        }
        EventKind::PaymentReceived => {
            let amount_paid = money_field(&fields, "amountPaid")?;
            Event::payment_received(event_id, timestamp, order_id, amount_paid)
        }
        EventKind::ShippingScheduled => {
            let shipping_date = require(&fields, "shippingDate")?;
            Event::shipping_scheduled(event_id, timestamp, order_id, shipping_date)
        }
        EventKind::OrderCancelled => {
            let reason = require(&fields, "reason")?;
            Event::cancelled(event_id, timestamp, order_id, reason)
        }
    };

    Ok(Some(event))
}

fn require<'a>(fields: &Fields<'a>, key: &'static str) -> Result<&'a str> {
    fields.get(key).ok_or(ParseError::MissingField { key })
}

fn money_field(fields: &Fields<'_>, key: &'static str) -> Result<Money> {
    let raw = require(fields, key)?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

fn int_field(key: &'static str, raw: &str) -> Result<u32> {
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

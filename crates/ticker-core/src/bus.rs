//! Event bus connecting independently owned views.
//!
//! The bus is an explicit mediator with typed topics:
//! - [`Topic::QuotePriceUpdate`] carries a [`Quote`] snapshot.
//! - [`Topic::OrderExecute`] carries an [`OrderExecution`].
//!
//! `publish` fans an event out to every subscriber of its topic, in
//! subscription order, and queues the resulting deliveries. Deliveries are
//! handed out FIFO by [`EventBus::next_delivery`] (or [`dispatch`]), so an
//! event published from inside a handler is delivered only after that
//! handler has returned.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::BusError;
use crate::market::Market;
use crate::quote::Quote;
use crate::side::Side;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    QuotePriceUpdate,
    OrderExecute,
}

impl Topic {
    /// Channel name as used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Topic::QuotePriceUpdate => "quotePriceUpdate",
            Topic::OrderExecute => "orderExecute",
        }
    }
}

/// Announcement that a pending order executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderExecution {
    pub side: Side,
    pub symbol: String,
}

impl OrderExecution {
    pub fn new(side: Side, symbol: impl Into<String>) -> Self {
        OrderExecution {
            side,
            symbol: symbol.into(),
        }
    }

    pub fn is_buy(&self) -> bool {
        self.side.is_buy()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    QuotePriceUpdate(Quote),
    OrderExecute(OrderExecution),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::QuotePriceUpdate(_) => Topic::QuotePriceUpdate,
            Event::OrderExecute(_) => Topic::OrderExecute,
        }
    }
}

/// One event addressed to one subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub subscriber: SubscriberId,
    pub event: Event,
}

#[derive(Debug, Default)]
pub struct EventBus {
    next_id: u32,
    /// (subscriber, topic) pairs in registration order.
    subscriptions: Vec<(SubscriberId, Topic)>,
    queue: VecDeque<Delivery>,
    published: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber listening to `topics`.
    pub fn subscribe(&mut self, topics: &[Topic]) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        for &topic in topics {
            self.subscriptions.push((id, topic));
        }
        debug!(?id, ?topics, "bus subscribe");
        id
    }

    /// Add `topic` to an existing subscriber. Listening twice is a no-op.
    pub fn listen_to(&mut self, id: SubscriberId, topic: Topic) -> Result<(), BusError> {
        if !self.is_registered(id) {
            return Err(BusError::UnknownSubscriber(id));
        }
        if !self.subscriptions.contains(&(id, topic)) {
            self.subscriptions.push((id, topic));
        }
        Ok(())
    }

    /// Drop every subscription of `id` along with its undelivered events.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> Result<(), BusError> {
        if !self.is_registered(id) {
            return Err(BusError::UnknownSubscriber(id));
        }
        self.subscriptions.retain(|(sub, _)| *sub != id);
        self.queue.retain(|d| d.subscriber != id);
        Ok(())
    }

    fn is_registered(&self, id: SubscriberId) -> bool {
        // Ids are handed out sequentially and never reused.
        id.0 < self.next_id && self.subscriptions.iter().any(|(sub, _)| *sub == id)
    }

    /// Queue `event` for every subscriber of its topic.
    ///
    /// Returns the number of deliveries queued.
    pub fn publish(&mut self, event: Event) -> usize {
        let topic = event.topic();
        self.published += 1;

        let mut queued = 0;
        for &(subscriber, sub_topic) in &self.subscriptions {
            if sub_topic == topic {
                self.queue.push_back(Delivery {
                    subscriber,
                    event: event.clone(),
                });
                queued += 1;
            }
        }
        trace!(topic = topic.name(), queued, "bus publish");
        queued
    }

    pub fn next_delivery(&mut self) -> Option<Delivery> {
        self.queue.pop_front()
    }

    /// Number of deliveries waiting.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total number of events published since creation.
    pub fn published_count(&self) -> u64 {
        self.published
    }
}

/// A component reacting to bus events.
pub trait Subscriber {
    fn subscriber_id(&self) -> SubscriberId;

    fn on_event(&mut self, event: &Event, market: &mut Market, bus: &mut EventBus);
}

/// Drain the bus, handing each delivery to its subscriber.
///
/// Handlers run to completion one at a time; anything they publish is
/// appended to the queue and delivered in the same call. Deliveries for ids
/// not present in `subscribers` are dropped. Returns the number of
/// deliveries handled.
pub fn dispatch(
    bus: &mut EventBus,
    market: &mut Market,
    subscribers: &mut [&mut dyn Subscriber],
) -> usize {
    let mut handled = 0;
    while let Some(delivery) = bus.next_delivery() {
        match subscribers
            .iter_mut()
            .find(|s| s.subscriber_id() == delivery.subscriber)
        {
            Some(subscriber) => {
                subscriber.on_event(&delivery.event, market, bus);
                handled += 1;
            }
            None => trace!(subscriber = ?delivery.subscriber, "no handler, dropping delivery"),
        }
    }
    handled
}

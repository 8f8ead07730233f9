//! `Market`: the owned state shared by the views.
//!
//! Holds the quote list, the pending orders and the trade history. It is the
//! only place quote prices change, and every change is published on the bus
//! as `quotePriceUpdate`.

use chrono::Local;
use tracing::debug;

use crate::bus::{Event, EventBus};
use crate::collections::{OrderList, QuoteList};
use crate::error::OrderError;
use crate::order::{NewOrder, Order, OrderId};
use crate::quote::Quote;
use crate::side::Side;
use crate::simulator::{next_price, Tick};
use crate::trade::{Trade, TradeHistory, TradeOrigin};

#[derive(Debug, Clone, Default)]
pub struct Market {
    quotes: QuoteList,
    orders: OrderList,
    trades: TradeHistory,
}

impl Market {
    pub fn new(quotes: QuoteList, max_trades: usize) -> Self {
        Market {
            quotes,
            orders: OrderList::new(),
            trades: TradeHistory::with_capacity(max_trades),
        }
    }

    pub fn quotes(&self) -> &QuoteList {
        &self.quotes
    }

    pub fn orders(&self) -> &OrderList {
        &self.orders
    }

    /// Add a pending order for a quoted symbol.
    ///
    /// The candidate's quote price is replaced by the current price of its
    /// quote before validation.
    pub fn add_order(&mut self, mut candidate: NewOrder) -> Result<&Order, OrderError> {
        if candidate.symbol.trim().is_empty() {
            return Err(OrderError::MissingSymbol);
        }
        let quote = self
            .quotes
            .find(&candidate.symbol)
            .ok_or_else(|| OrderError::UnknownSymbol(candidate.symbol.clone()))?;
        candidate.quote_price = quote.price;
        self.orders.add(candidate)
    }

    pub fn remove_order(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(id)
    }

    pub fn trades(&self) -> &TradeHistory {
        &self.trades
    }

    /// Buy `symbol` at the current price (price goes up by one trade impact).
    pub fn buy_quote(&mut self, symbol: &str, bus: &mut EventBus) -> Option<Quote> {
        self.trade_quote(symbol, Side::Buy, TradeOrigin::Manual, bus)
    }

    /// Sell `symbol` at the current price (price goes down by one trade impact).
    pub fn sell_quote(&mut self, symbol: &str, bus: &mut EventBus) -> Option<Quote> {
        self.trade_quote(symbol, Side::Sell, TradeOrigin::Manual, bus)
    }

    /// Record a trade on `symbol` and apply its market impact.
    ///
    /// Returns the updated quote, or `None` for an unknown symbol.
    pub fn trade_quote(
        &mut self,
        symbol: &str,
        side: Side,
        origin: TradeOrigin,
        bus: &mut EventBus,
    ) -> Option<Quote> {
        let quote = self.quotes.find_mut(symbol)?;
        self.trades.record(Trade {
            side,
            symbol: quote.symbol.clone(),
            price: quote.price,
            origin,
            timestamp: Local::now(),
        });

        let changed = quote.trade(side);
        let snapshot = quote.clone();
        debug!(symbol, %side, price = snapshot.price, "quote traded");
        if changed {
            bus.publish(Event::QuotePriceUpdate(snapshot.clone()));
        }
        Some(snapshot)
    }

    /// Move `symbol` to `price`, publishing an update if the price changed.
    pub fn set_quote_price(&mut self, symbol: &str, price: f64, bus: &mut EventBus) -> Option<Quote> {
        let quote = self.quotes.find_mut(symbol)?;
        if quote.set_price(price) {
            bus.publish(Event::QuotePriceUpdate(quote.clone()));
        }
        Some(quote.clone())
    }

    /// Apply a simulated market tick.
    pub fn apply_tick(&mut self, tick: &Tick, bus: &mut EventBus) -> Option<Quote> {
        let current = self.quotes.find(&tick.symbol)?.price;
        self.set_quote_price(&tick.symbol, next_price(current, tick.change), bus)
    }
}

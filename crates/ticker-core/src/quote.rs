//! Quote model: current market price for a symbol.
//!
//! A manual trade moves the price by [`TRADE_IMPACT`]: buying pushes it up,
//! selling pushes it down. Prices are kept in cents precision and never go
//! negative.

use crate::side::Side;

/// Price change applied by a single `buy()` / `sell()`.
pub const TRADE_IMPACT: f64 = 1.00;

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,

    /// Delta of the most recent price change (0.0 until the first change).
    pub change: f64,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Quote {
            symbol: symbol.into(),
            price: round_cents(price),
            change: 0.0,
        }
    }

    /// Simulate the market impact of buying: price goes up.
    ///
    /// Returns `true` if the price changed.
    pub fn buy(&mut self) -> bool {
        self.set_price(self.price + TRADE_IMPACT)
    }

    /// Simulate the market impact of selling: price goes down, floored at 0.00.
    ///
    /// Returns `true` if the price changed.
    pub fn sell(&mut self) -> bool {
        self.set_price(self.price - TRADE_IMPACT)
    }

    /// Apply the impact of a trade in the given direction.
    pub fn trade(&mut self, side: Side) -> bool {
        match side {
            Side::Buy => self.buy(),
            Side::Sell => self.sell(),
        }
    }

    /// Set a new price (rounded to cents, floored at 0.00).
    ///
    /// Returns `true` if the stored price changed.
    pub fn set_price(&mut self, price: f64) -> bool {
        let price = round_cents(price.max(0.0));
        if price == self.price {
            return false;
        }
        self.change = round_cents(price - self.price);
        self.price = price;
        true
    }
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

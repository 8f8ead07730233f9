//! Trade blotter: manual quote trades and executed orders, newest first.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::side::Side;

pub const DEFAULT_MAX_TRADES: usize = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TradeOrigin {
    /// Buy/sell pressed on a quote.
    Manual,
    /// A pending order executed.
    Order,
}

#[derive(Debug, Clone)]
pub struct Trade {
    pub side: Side,
    pub symbol: String,
    /// Quote price the trade happened at (before its market impact).
    pub price: f64,
    pub origin: TradeOrigin,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct TradeHistory {
    trades: VecDeque<Trade>,
    capacity: usize,
}

impl Default for TradeHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_TRADES)
    }
}

impl TradeHistory {
    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        TradeHistory {
            trades: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, trade: Trade) {
        self.trades.push_front(trade);
        // Keep recent trades limited
        while self.trades.len() > self.capacity {
            self.trades.pop_back();
        }
    }

    /// Trades, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter()
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.front()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

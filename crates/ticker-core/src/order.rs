//! Pending limit orders.
//!
//! A [`NewOrder`] is the candidate built from form input. It only becomes an
//! [`Order`] once it passes [`NewOrder::validate`] and is accepted by
//! [`crate::collections::OrderList`], which assigns the id.

use crate::error::OrderError;
use crate::side::Side;

/// Identifier assigned by the order list on insertion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u32);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Candidate order, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub symbol: String,
    pub target_price: f64,
    /// Quote price at the time the candidate was built.
    pub quote_price: f64,
    pub side: Side,
}

impl NewOrder {
    pub fn new(symbol: impl Into<String>, target_price: f64, quote_price: f64, side: Side) -> Self {
        NewOrder {
            symbol: symbol.into(),
            target_price,
            quote_price,
            side,
        }
    }

    /// Check the candidate against the order rules:
    /// - a symbol is required
    /// - the target price must be a finite number above zero
    /// - a buy target must be below the current market price, a sell target
    ///   above it (otherwise the order would execute immediately)
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.symbol.trim().is_empty() {
            return Err(OrderError::MissingSymbol);
        }
        if !self.target_price.is_finite() || self.target_price <= 0.0 {
            return Err(OrderError::NonPositiveTargetPrice(self.target_price));
        }
        match self.side {
            Side::Buy if self.target_price >= self.quote_price => Err(OrderError::BuyAboveMarket {
                target: self.target_price,
                market: self.quote_price,
            }),
            Side::Sell if self.target_price <= self.quote_price => {
                Err(OrderError::SellBelowMarket {
                    target: self.target_price,
                    market: self.quote_price,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A validated, pending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub symbol: String,
    pub target_price: f64,
    pub quote_price: f64,
    pub side: Side,
}

impl Order {
    pub(crate) fn from_new_order(id: OrderId, candidate: NewOrder) -> Self {
        Order {
            id,
            symbol: candidate.symbol,
            target_price: candidate.target_price,
            quote_price: candidate.quote_price,
            side: candidate.side,
        }
    }

    pub fn is_buy(&self) -> bool {
        self.side.is_buy()
    }

    /// Returns `true` if a quote at `price` executes this order.
    ///
    /// Inclusive at the boundary: buy executes at `price <= target`,
    /// sell at `price >= target`.
    pub fn triggers_at(&self, price: f64) -> bool {
        match self.side {
            Side::Buy => price <= self.target_price,
            Side::Sell => price >= self.target_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(side: Side, target: f64) -> Order {
        Order::from_new_order(OrderId(1), NewOrder::new("AAPL", target, 0.0, side))
    }

    #[test]
    fn buy_triggers_at_or_below_target() {
        let buy = order(Side::Buy, 100.0);
        assert!(buy.triggers_at(99.99));
        assert!(buy.triggers_at(100.0));
        assert!(!buy.triggers_at(100.01));
    }

    #[test]
    fn sell_triggers_at_or_above_target() {
        let sell = order(Side::Sell, 50.0);
        assert!(!sell.triggers_at(49.99));
        assert!(sell.triggers_at(50.0));
        assert!(sell.triggers_at(50.01));
    }

    #[test]
    fn validation_rejects_missing_symbol() {
        let candidate = NewOrder::new("  ", 10.0, 12.0, Side::Buy);
        assert_eq!(candidate.validate(), Err(OrderError::MissingSymbol));
    }

    #[test]
    fn validation_rejects_non_positive_or_nan_targets() {
        assert!(!NewOrder::new("AAPL", 0.0, 12.0, Side::Buy).is_valid());
        assert!(!NewOrder::new("AAPL", -3.0, 12.0, Side::Buy).is_valid());
        assert!(!NewOrder::new("AAPL", f64::NAN, 12.0, Side::Sell).is_valid());
    }

    #[test]
    fn validation_checks_side_against_market() {
        assert!(NewOrder::new("AAPL", 99.0, 100.0, Side::Buy).is_valid());
        assert_eq!(
            NewOrder::new("AAPL", 100.0, 100.0, Side::Buy).validate(),
            Err(OrderError::BuyAboveMarket { target: 100.0, market: 100.0 })
        );

        assert!(NewOrder::new("AAPL", 101.0, 100.0, Side::Sell).is_valid());
        assert_eq!(
            NewOrder::new("AAPL", 95.0, 100.0, Side::Sell).validate(),
            Err(OrderError::SellBelowMarket { target: 95.0, market: 100.0 })
        );
    }

    #[test]
    fn validation_messages_are_readable() {
        let err = NewOrder::new("AAPL", 105.0, 100.0, Side::Buy)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Buy target price 105.00 must be lower than the market price 100.00"
        );
    }
}

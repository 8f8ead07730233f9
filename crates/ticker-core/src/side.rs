//! Side (Buy / Sell) for pending orders, executions and trades.

/// Direction of an order or trade.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Build from the `buy` flag carried by orders and executions.
    pub fn from_buy(buy: bool) -> Self {
        if buy {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    pub fn is_buy(self) -> bool {
        self == Side::Buy
    }

    /// Lowercase word used in status messages (`"buy"` / `"sell"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_flag_round_trips() {
        assert_eq!(Side::from_buy(true), Side::Buy);
        assert_eq!(Side::from_buy(false), Side::Sell);
        assert!(Side::Buy.is_buy());
        assert!(!Side::Sell.is_buy());
    }

    #[test]
    fn displays_as_lowercase_word() {
        assert_eq!(Side::Buy.to_string(), "buy");
        assert_eq!(Side::Sell.as_str(), "sell");
    }
}

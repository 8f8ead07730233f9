//! Error types for the core crate.
//!
//! Order validation is the only domain failure: candidate orders that fail
//! validation are discarded and their `Display` text is shown to the user.

use thiserror::Error;

use crate::bus::SubscriberId;

/// Reasons a candidate order is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Please select a symbol")]
    MissingSymbol,

    #[error("Unknown symbol {0}")]
    UnknownSymbol(String),

    #[error("Please enter a target price")]
    MissingTargetPrice,

    #[error("Target price must be a number, got \"{0}\"")]
    InvalidTargetPrice(String),

    #[error("Target price must be greater than zero")]
    NonPositiveTargetPrice(f64),

    #[error("Buy target price {target:.2} must be lower than the market price {market:.2}")]
    BuyAboveMarket { target: f64, market: f64 },

    #[error("Sell target price {target:.2} must be higher than the market price {market:.2}")]
    SellBelowMarket { target: f64, market: f64 },
}

/// Errors from [`crate::bus::EventBus`] bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("subscriber {0:?} is not registered")]
    UnknownSubscriber(SubscriberId),
}

//! ticker-core
//!
//! Pure logic behind the ticker demo:
//! - quote and pending-order models
//! - owned quote / order collections and the `Market` that holds them
//! - the event bus connecting the views
//! - trade history and the simulated price feed

pub mod side;
pub mod quote;
pub mod order;
pub mod collections;
pub mod trade;
pub mod market;
pub mod bus;
pub mod simulator;
pub mod error;

pub use side::Side;
pub use quote::Quote;
pub use order::{NewOrder, Order, OrderId};
pub use collections::{OrderList, QuoteList};
pub use trade::{Trade, TradeHistory, TradeOrigin};
pub use market::Market;

pub use bus::{
    dispatch,
    Delivery,
    Event,
    EventBus,
    OrderExecution,
    Subscriber,
    SubscriberId,
    Topic,
};

pub use simulator::{PriceFeed, Tick};
pub use error::{BusError, OrderError};

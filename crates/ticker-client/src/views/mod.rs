// crates/ticker-client/src/views/mod.rs

pub mod order_list_view;
pub mod quote_view;

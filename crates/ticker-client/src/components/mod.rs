// crates/ticker-client/src/components/mod.rs

pub mod quote_list;
pub mod order_form;
pub mod order_list;
pub mod trade_list;
pub mod status_bar;
pub mod help;

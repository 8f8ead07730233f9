//! Terminal client for the ticker demo.
//!
//! - `views`: the order list view and quote views (state, bus handlers, rendering)
//! - `components`: stateless draw helpers used by the views
//! - `app`: owns the market, the bus and the views; routes keys and ticks
//! - `feed`: simulated market feed task
//! - `config`: TOML / environment configuration

pub mod app;
pub mod components;
pub mod config;
pub mod feed;
pub mod ui;
pub mod views;

//! Simulated market feed.
//!
//! Each tick picks one symbol uniformly and moves its price by a relative
//! change drawn from `[-volatility, +volatility]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quote::round_cents;

/// Lowest price the feed will ever produce.
pub const MIN_PRICE: f64 = 0.01;

/// One simulated price move.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub symbol: String,
    /// Relative change, e.g. `0.01` for +1%.
    pub change: f64,
}

/// Price after applying a relative `change`, rounded to cents and clamped
/// to [`MIN_PRICE`].
pub fn next_price(current: f64, change: f64) -> f64 {
    round_cents(current * (1.0 + change)).max(MIN_PRICE)
}

pub struct PriceFeed<R = StdRng> {
    rng: R,
    symbols: Vec<String>,
    volatility: f64,
}

impl PriceFeed<StdRng> {
    pub fn from_os_rng(symbols: Vec<String>, volatility: f64) -> Self {
        Self::with_rng(StdRng::from_os_rng(), symbols, volatility)
    }
}

impl<R: Rng> PriceFeed<R> {
    /// Negative volatility is treated as its absolute value.
    pub fn with_rng(rng: R, symbols: Vec<String>, volatility: f64) -> Self {
        PriceFeed {
            rng,
            symbols,
            volatility: volatility.abs(),
        }
    }

    /// Next tick, or `None` when there are no symbols to move.
    pub fn next_tick(&mut self) -> Option<Tick> {
        if self.symbols.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.symbols.len());
        let change = if self.volatility > 0.0 {
            self.rng.random_range(-self.volatility..=self.volatility)
        } else {
            0.0
        };
        Some(Tick {
            symbol: self.symbols[index].clone(),
            change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_price_rounds_and_clamps() {
        assert_eq!(next_price(100.0, 0.01), 101.0);
        assert_eq!(next_price(100.0, -0.005), 99.5);
        assert_eq!(next_price(0.01, -0.9), MIN_PRICE);
    }

    #[test]
    fn ticks_stay_within_volatility() {
        let symbols = vec!["HUMOR".to_string(), "CLOTH".to_string()];
        let mut feed = PriceFeed::with_rng(StdRng::seed_from_u64(7), symbols.clone(), 0.02);

        for _ in 0..200 {
            let tick = feed.next_tick().unwrap();
            assert!(symbols.contains(&tick.symbol));
            assert!(tick.change.abs() <= 0.02);
        }
    }

    #[test]
    fn same_seed_same_ticks() {
        let symbols = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut a = PriceFeed::with_rng(StdRng::seed_from_u64(42), symbols.clone(), 0.01);
        let mut b = PriceFeed::with_rng(StdRng::seed_from_u64(42), symbols, 0.01);

        for _ in 0..20 {
            assert_eq!(a.next_tick(), b.next_tick());
        }
    }

    #[test]
    fn empty_feed_yields_nothing() {
        let mut feed = PriceFeed::with_rng(StdRng::seed_from_u64(1), Vec::new(), 0.01);
        assert!(feed.next_tick().is_none());
    }
}

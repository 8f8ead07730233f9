// crates/ticker-client/src/feed.rs

use ticker_core::{PriceFeed, Tick};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

/// Simulated market feed pushing price ticks to the UI loop.
pub struct MarketFeed {
    feed: PriceFeed,
    period: Duration,
    tx: UnboundedSender<Tick>,
}

impl MarketFeed {
    pub fn new(feed: PriceFeed, period: Duration, tx: UnboundedSender<Tick>) -> Self {
        Self { feed, period, tx }
    }

    /// Tick until the receiving side goes away.
    pub async fn run(mut self) {
        info!("market feed started, period {:?}", self.period);
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; skip it so prices hold still at startup.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let Some(tick) = self.feed.next_tick() else {
                if self.tx.is_closed() {
                    info!("market feed receiver dropped, stopping");
                    break;
                }
                continue;
            };
            debug!(symbol = %tick.symbol, change = tick.change, "feed tick");
            if self.tx.send(tick).is_err() {
                info!("market feed receiver dropped, stopping");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn sends_ticks_until_receiver_drops() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let feed = PriceFeed::from_os_rng(vec!["HUMOR".to_string()], 0.01);
        let handle = tokio::spawn(MarketFeed::new(feed, Duration::from_millis(10), tx).run());

        for _ in 0..3 {
            let tick = rx.recv().await.unwrap();
            assert_eq!(tick.symbol, "HUMOR");
        }

        drop(rx);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn feed_without_symbols_stops_when_receiver_drops() {
        let (tx, rx) = mpsc::unbounded_channel();
        let feed = PriceFeed::from_os_rng(Vec::new(), 0.01);
        let handle = tokio::spawn(MarketFeed::new(feed, Duration::from_millis(10), tx).run());

        tokio::time::sleep(Duration::from_millis(35)).await;
        assert!(!handle.is_finished());

        drop(rx);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("feed task should stop")
            .unwrap();
    }
}

// crates/ticker-core/tests/market_scenarios.rs
use rand::rngs::StdRng;
use rand::SeedableRng;
use ticker_core::{
    dispatch, Event, EventBus, Market, NewOrder, OrderError, PriceFeed, Quote, QuoteList, Side, Subscriber,
    SubscriberId, Topic,
};

fn demo_market() -> Market {
    let quotes: QuoteList = [
        Quote::new("AAPL", 105.00),
        Quote::new("MSFT", 45.00),
    ]
    .into_iter()
    .collect();
    Market::new(quotes, 50)
}

/// Records every price update it sees.
struct PriceRecorder {
    id: SubscriberId,
    seen: Vec<(String, f64)>,
}

impl Subscriber for PriceRecorder {
    fn subscriber_id(&self) -> SubscriberId {
        self.id
    }

    fn on_event(&mut self, event: &Event, _market: &mut Market, _bus: &mut EventBus) {
        if let Event::QuotePriceUpdate(quote) = event {
            self.seen.push((quote.symbol.clone(), quote.price));
        }
    }
}

#[test]
fn manual_trades_reach_price_subscribers() {
    let mut market = demo_market();
    let mut bus = EventBus::new();
    let mut recorder = PriceRecorder {
        id: bus.subscribe(&[Topic::QuotePriceUpdate]),
        seen: Vec::new(),
    };

    market.buy_quote("AAPL", &mut bus);
    market.sell_quote("MSFT", &mut bus);
    market.sell_quote("MSFT", &mut bus);

    let handled = {
        let mut subscribers: [&mut dyn Subscriber; 1] = [&mut recorder];
        dispatch(&mut bus, &mut market, &mut subscribers)
    };
    assert_eq!(handled, 3);
    assert_eq!(
        recorder.seen,
        [
            ("AAPL".to_string(), 106.0),
            ("MSFT".to_string(), 44.0),
            ("MSFT".to_string(), 43.0),
        ]
    );
    assert_eq!(market.trades().len(), 3);
}

#[test]
fn seeded_feed_is_reproducible_through_the_market() {
    let symbols: Vec<String> = demo_market().quotes().symbols().map(String::from).collect();

    let run = || {
        let mut market = demo_market();
        let mut bus = EventBus::new();
        let mut feed = PriceFeed::with_rng(StdRng::seed_from_u64(2024), symbols.clone(), 0.01);
        for _ in 0..50 {
            if let Some(tick) = feed.next_tick() {
                market.apply_tick(&tick, &mut bus);
            }
        }
        market
            .quotes()
            .iter()
            .map(|q| q.price)
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn orders_only_enter_when_valid() {
    let mut market = demo_market();
    let price = market.quotes().find("AAPL").map(|q| q.price).unwrap();

    assert!(market
        .add_order(NewOrder::new("AAPL", price + 5.0, price, Side::Buy))
        .is_err());
    assert!(market.orders().is_empty());

    market
        .add_order(NewOrder::new("AAPL", price - 5.0, price, Side::Buy))
        .unwrap();
    assert_eq!(market.orders().len(), 1);
}

#[test]
fn orders_cannot_name_unquoted_symbols() {
    let mut market = demo_market();

    let err = market
        .add_order(NewOrder::new("ZZZZ", 1.0, 2.0, Side::Buy))
        .unwrap_err();
    assert_eq!(err, OrderError::UnknownSymbol("ZZZZ".to_string()));
    assert!(market.orders().is_empty());

    market
        .add_order(NewOrder::new("MSFT", 50.0, 0.0, Side::Sell))
        .unwrap();
    assert!(market
        .orders()
        .iter()
        .all(|order| market.quotes().contains(&order.symbol)));
}

// crates/ticker-client/src/views/quote_view.rs

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Cell, Row},
};
use ticker_core::{
    Event, EventBus, Market, OrderExecution, Quote, Subscriber, SubscriberId, Topic, TradeOrigin,
};
use tracing::debug;

/// Display of a single quote, with buy / sell intents.
///
/// Also listens for `orderExecute`: an executed order for this symbol moves
/// the price like a manual trade in the same direction.
#[derive(Debug)]
pub struct QuoteView {
    id: SubscriberId,
    symbol: String,
}

impl QuoteView {
    pub fn new(symbol: impl Into<String>, bus: &mut EventBus) -> Self {
        Self {
            id: bus.subscribe(&[Topic::OrderExecute]),
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Table row for the current state of the quote.
    pub fn render(&self, market: &Market, selected: bool) -> Row<'static> {
        let base = if selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let Some(quote) = market.quotes().find(&self.symbol) else {
            return Row::new(vec![
                Cell::from(self.symbol.clone()),
                Cell::from("--"),
                Cell::from(""),
            ])
            .style(base.fg(Color::DarkGray));
        };

        Row::new(vec![
            Cell::from(quote.symbol.clone()).style(base.fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Cell::from(format!("{:.2}", quote.price)).style(base),
            Cell::from(format_change(quote.change)).style(base.fg(change_color(quote.change))),
        ])
        .style(base)
    }

    pub fn buy_price_update(&self, market: &mut Market, bus: &mut EventBus) -> Option<Quote> {
        debug!(symbol = %self.symbol, "buy pressed");
        market.buy_quote(&self.symbol, bus)
    }

    pub fn sell_price_update(&self, market: &mut Market, bus: &mut EventBus) -> Option<Quote> {
        debug!(symbol = %self.symbol, "sell pressed");
        market.sell_quote(&self.symbol, bus)
    }

    /// Apply the market impact of an executed order on this quote.
    pub fn order_execute(
        &mut self,
        execution: &OrderExecution,
        market: &mut Market,
        bus: &mut EventBus,
    ) -> Option<Quote> {
        if execution.symbol != self.symbol {
            return None;
        }
        market.trade_quote(&self.symbol, execution.side, TradeOrigin::Order, bus)
    }
}

impl Subscriber for QuoteView {
    fn subscriber_id(&self) -> SubscriberId {
        self.id
    }

    fn on_event(&mut self, event: &Event, market: &mut Market, bus: &mut EventBus) {
        if let Event::OrderExecute(execution) = event {
            self.order_execute(execution, market, bus);
        }
    }
}

fn format_change(change: f64) -> String {
    if change == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:+.2}", change)
    }
}

fn change_color(change: f64) -> Color {
    if change > 0.0 {
        Color::Green
    } else if change < 0.0 {
        Color::Red
    } else {
        Color::Gray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticker_core::{QuoteList, Side};

    fn setup() -> (Market, EventBus, QuoteView) {
        let quotes: QuoteList = [Quote::new("HUMOR", 88.50), Quote::new("CLOTH", 81.70)]
            .into_iter()
            .collect();
        let mut bus = EventBus::new();
        let view = QuoteView::new("HUMOR", &mut bus);
        (Market::new(quotes, 10), bus, view)
    }

    #[test]
    fn buy_and_sell_intents_move_the_price() {
        let (mut market, mut bus, view) = setup();

        assert_eq!(view.buy_price_update(&mut market, &mut bus).map(|q| q.price), Some(89.50));
        assert_eq!(view.sell_price_update(&mut market, &mut bus).map(|q| q.price), Some(88.50));
        assert_eq!(market.trades().len(), 2);
    }

    #[test]
    fn executions_for_other_symbols_are_ignored() {
        let (mut market, mut bus, mut view) = setup();
        let exec = OrderExecution::new(Side::Buy, "CLOTH");

        assert!(view.order_execute(&exec, &mut market, &mut bus).is_none());
        assert_eq!(market.quotes().find("CLOTH").unwrap().price, 81.70);
        assert!(market.trades().is_empty());
    }

    #[test]
    fn executions_for_this_symbol_trade_the_quote() {
        let (mut market, mut bus, mut view) = setup();
        let exec = OrderExecution::new(Side::Sell, "HUMOR");

        view.on_event(&Event::OrderExecute(exec), &mut market, &mut bus);

        assert_eq!(market.quotes().find("HUMOR").unwrap().price, 87.50);
        let trade = market.trades().latest().unwrap();
        assert_eq!(trade.origin, TradeOrigin::Order);
        assert_eq!(trade.side, Side::Sell);
    }

    #[test]
    fn change_is_signed() {
        assert_eq!(format_change(0.0), "0.00");
        assert_eq!(format_change(1.0), "+1.00");
        assert_eq!(format_change(-0.25), "-0.25");
    }
}

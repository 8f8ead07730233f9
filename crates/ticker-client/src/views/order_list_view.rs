// crates/ticker-client/src/views/order_list_view.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use ticker_core::{
    Event, EventBus, Market, NewOrder, Order, OrderError, OrderExecution, OrderId, Quote,
    QuoteList, Side, Subscriber, SubscriberId, Topic,
};
use tracing::{debug, info, warn};

use crate::components::{order_form::draw_order_form, order_list::draw_order_list};

/// Buy / sell controls of the order form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormControl {
    Buy,
    Sell,
}

impl FormControl {
    /// Class marker of the control (`btn-buy` / `btn-sell`).
    pub fn class(self) -> &'static str {
        match self {
            FormControl::Buy => "btn-buy",
            FormControl::Sell => "btn-sell",
        }
    }

    pub fn side(self) -> Side {
        match self {
            FormControl::Buy => Side::Buy,
            FormControl::Sell => Side::Sell,
        }
    }
}

/// Raw form input at the time a control was activated.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    pub symbol: Option<String>,
    pub target_price: String,
    pub control: FormControl,
}

/// Editable state of the order form.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    /// Index into the quote list of the selected symbol.
    pub symbol_index: usize,
    pub price_input: String,
}

impl OrderForm {
    pub fn selected_symbol<'a>(&self, quotes: &'a QuoteList) -> Option<&'a str> {
        quotes.get_index(self.symbol_index).map(|q| q.symbol.as_str())
    }

    pub fn next_symbol(&mut self, quotes: &QuoteList) {
        if !quotes.is_empty() {
            self.symbol_index = (self.symbol_index + 1) % quotes.len();
        }
    }

    pub fn prev_symbol(&mut self, quotes: &QuoteList) {
        if !quotes.is_empty() {
            self.symbol_index = (self.symbol_index + quotes.len() - 1) % quotes.len();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.price_input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.price_input.pop();
    }

    pub fn submission(&self, quotes: &QuoteList, control: FormControl) -> FormSubmission {
        FormSubmission {
            symbol: self.selected_symbol(quotes).map(String::from),
            target_price: self.price_input.clone(),
            control,
        }
    }

    /// Back to the first quote with an empty price.
    pub fn clear(&mut self) {
        self.symbol_index = 0;
        self.price_input.clear();
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Pending orders plus the form that creates them.
///
/// Listens for `quotePriceUpdate` and executes the orders the new price
/// reaches.
#[derive(Debug)]
pub struct OrderListView {
    id: SubscriberId,
    pub form: OrderForm,
    pub status: Option<StatusMessage>,
}

impl OrderListView {
    pub fn new(bus: &mut EventBus) -> Self {
        Self {
            id: bus.subscribe(&[Topic::QuotePriceUpdate]),
            form: OrderForm::default(),
            status: None,
        }
    }

    /// Draw the order rows (collection order) and the form.
    ///
    /// The symbol selector is rebuilt from the quote list on every draw.
    pub fn render(&self, f: &mut Frame, area: Rect, market: &Market, focused: bool, editing: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Orders
                Constraint::Length(9), // Form
            ])
            .split(area);

        draw_order_list(f, chunks[0], market.orders(), focused);
        draw_order_form(
            f,
            chunks[1],
            &self.form,
            market.quotes(),
            self.status.as_ref(),
            focused,
            editing,
        );
    }

    /// Handle activation of a form control.
    ///
    /// Valid orders are appended and the form is cleared; invalid ones are
    /// discarded. Either way the outcome is shown in the status line.
    pub fn add_order(
        &mut self,
        submission: FormSubmission,
        market: &mut Market,
    ) -> Result<OrderId, OrderError> {
        debug!(?submission, "add order");

        let result = Self::form_data(&submission, market.quotes()).and_then(|candidate| {
            market
                .add_order(candidate)
                .map(|order| (order.id, order.side, order.symbol.clone()))
        });

        match result {
            Ok((id, side, symbol)) => {
                info!(%id, %side, %symbol, "order added");
                self.set_status(
                    StatusKind::Success,
                    format!("Successfully added a {side} open order for {symbol}"),
                );
                self.form.clear();
                Ok(id)
            }
            Err(err) => {
                warn!(%err, "order rejected");
                self.set_status(StatusKind::Error, err.to_string());
                Err(err)
            }
        }
    }

    /// Build the candidate order from the submission and the current quote price.
    fn form_data(submission: &FormSubmission, quotes: &QuoteList) -> Result<NewOrder, OrderError> {
        let symbol = match submission.symbol.as_deref().map(str::trim) {
            Some(symbol) if !symbol.is_empty() => symbol,
            _ => return Err(OrderError::MissingSymbol),
        };
        let quote = quotes
            .find(symbol)
            .ok_or_else(|| OrderError::UnknownSymbol(symbol.to_string()))?;

        let raw = submission.target_price.trim();
        if raw.is_empty() {
            return Err(OrderError::MissingTargetPrice);
        }
        let target_price = raw
            .parse::<f64>()
            .map_err(|_| OrderError::InvalidTargetPrice(raw.to_string()))?;

        Ok(NewOrder::new(
            symbol,
            target_price,
            quote.price,
            submission.control.side(),
        ))
    }

    /// Execute every pending order for `quote.symbol` that its new price reaches.
    ///
    /// Returns the number of executed orders.
    pub fn order_to_quote(&mut self, quote: &Quote, market: &mut Market, bus: &mut EventBus) -> usize {
        let triggered: Vec<Order> = market
            .orders()
            .where_symbol(&quote.symbol)
            .filter(|order| order.triggers_at(quote.price))
            .cloned()
            .collect();

        for order in &triggered {
            self.trigger_and_remove(order, order.side, market, bus);
        }
        triggered.len()
    }

    /// Announce the execution on the bus, then drop the order.
    pub fn trigger_and_remove(
        &mut self,
        order: &Order,
        side: Side,
        market: &mut Market,
        bus: &mut EventBus,
    ) {
        info!(id = %order.id, %side, symbol = %order.symbol, target = order.target_price, "order executed");
        bus.publish(Event::OrderExecute(OrderExecution::new(side, order.symbol.clone())));
        market.remove_order(order.id);
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusMessage { kind, text });
    }
}

impl Subscriber for OrderListView {
    fn subscriber_id(&self) -> SubscriberId {
        self.id
    }

    fn on_event(&mut self, event: &Event, market: &mut Market, bus: &mut EventBus) {
        if let Event::QuotePriceUpdate(quote) = event {
            self.order_to_quote(quote, market, bus);
        }
    }
}

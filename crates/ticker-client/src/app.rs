// crates/ticker-client/src/app.rs

use crossterm::event::{KeyCode, KeyEvent};
use ticker_core::{dispatch, EventBus, Market, Subscriber, Tick};
use tracing::debug;

use crate::views::order_list_view::{FormControl, OrderListView};
use crate::views::quote_view::QuoteView;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the target price input.
    Editing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    Quotes,
    Orders,
}

pub struct App {
    // Shared state, handed to one view at a time
    pub market: Market,
    pub bus: EventBus,

    // Views
    pub order_list_view: OrderListView,
    pub quote_views: Vec<QuoteView>,

    // UI state
    pub input_mode: InputMode,
    pub current_panel: Panel,
    pub selected_quote: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub feed_paused: bool,

    // Statistics
    pub tick_count: u64,
}

impl App {
    pub fn new(market: Market) -> Self {
        let mut bus = EventBus::new();
        // The order list subscribes first, so it sees each price update
        // before any quote view reacts to an execution.
        let order_list_view = OrderListView::new(&mut bus);
        let quote_views = market
            .quotes()
            .symbols()
            .map(|symbol| QuoteView::new(symbol, &mut bus))
            .collect();

        Self {
            market,
            bus,
            order_list_view,
            quote_views,
            input_mode: InputMode::Normal,
            current_panel: Panel::Quotes,
            selected_quote: 0,
            should_quit: false,
            show_help: false,
            feed_paused: false,
            tick_count: 0,
        }
    }

    /// Deliver every queued bus event. Returns the number of deliveries.
    pub fn pump(&mut self) -> usize {
        let mut subscribers: Vec<&mut dyn Subscriber> = Vec::with_capacity(self.quote_views.len() + 1);
        subscribers.push(&mut self.order_list_view);
        for view in &mut self.quote_views {
            subscribers.push(view);
        }
        dispatch(&mut self.bus, &mut self.market, &mut subscribers)
    }

    /// Apply a simulated market tick unless the feed is paused.
    pub fn handle_tick(&mut self, tick: Tick) {
        if self.feed_paused {
            return;
        }
        self.tick_count += 1;
        self.market.apply_tick(&tick, &mut self.bus);
        self.pump();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::Editing => self.handle_editing_key(key.code),
        }
        self.pump();
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::F(1) | KeyCode::Esc) {
                self.show_help = false;
            } else if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                self.should_quit = true;
            }
            return;
        }

        match code {
            // Global hotkeys
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab => self.next_panel(),
            KeyCode::BackTab => self.prev_panel(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.toggle_feed(),
            KeyCode::F(1) => self.toggle_help(),

            _ => match self.current_panel {
                Panel::Quotes => self.handle_quotes_key(code),
                Panel::Orders => self.handle_orders_key(code),
            },
        }
    }

    fn handle_quotes_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
            KeyCode::Char('b') | KeyCode::Char('B') => self.buy_selected_quote(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.sell_selected_quote(),
            _ => {}
        }
    }

    fn handle_orders_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.order_list_view.form.prev_symbol(self.market.quotes());
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.order_list_view.form.next_symbol(self.market.quotes());
            }
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('b') | KeyCode::Char('B') => self.submit_order(FormControl::Buy),
            KeyCode::Char('s') | KeyCode::Char('S') => self.submit_order(FormControl::Sell),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => self.order_list_view.form.pop_char(),
            KeyCode::Char(c) => self.order_list_view.form.push_char(c),
            _ => {}
        }
    }

    pub fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Quotes => Panel::Orders,
            Panel::Orders => Panel::Quotes,
        };
    }

    pub fn prev_panel(&mut self) {
        // Only two panels for now.
        self.next_panel();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_feed(&mut self) {
        self.feed_paused = !self.feed_paused;
        debug!(paused = self.feed_paused, "market feed toggled");
    }

    pub fn move_selection_up(&mut self) {
        self.selected_quote = self.selected_quote.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_quote < self.quote_views.len().saturating_sub(1) {
            self.selected_quote += 1;
        }
    }

    pub fn buy_selected_quote(&mut self) {
        if let Some(view) = self.quote_views.get(self.selected_quote) {
            view.buy_price_update(&mut self.market, &mut self.bus);
        }
    }

    pub fn sell_selected_quote(&mut self) {
        if let Some(view) = self.quote_views.get(self.selected_quote) {
            view.sell_price_update(&mut self.market, &mut self.bus);
        }
    }

    /// Activate a form control on the order list view.
    pub fn submit_order(&mut self, control: FormControl) {
        let submission = self.order_list_view.form.submission(self.market.quotes(), control);
        // Rejections are already surfaced in the form's status line.
        let _ = self.order_list_view.add_order(submission, &mut self.market);
    }
}

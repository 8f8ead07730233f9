// crates/ticker-client/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row},
    Frame,
};

use crate::app::{App, InputMode, Panel};
use crate::components::{
    help::draw_help,
    quote_list::draw_quote_list,
    status_bar::draw_status_bar,
    trade_list::draw_trade_list,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_main_content(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    // Draw help overlay if active
    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    // Left: title and feed state
    let (feed_label, feed_color) = if app.feed_paused {
        ("paused", Color::Yellow)
    } else {
        ("live", Color::Green)
    };
    let left_text = vec![
        Span::styled("TICKER", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" - feed "),
        Span::styled(feed_label, Style::default().fg(feed_color)),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    // Center: counters
    let center_text = format!(
        "Open: {} | Trades: {} | Ticks: {}",
        app.market.orders().len(),
        app.market.trades().len(),
        app.tick_count
    );
    let center_paragraph = Paragraph::new(center_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(center_paragraph, header_chunks[1]);

    // Right: Help hints
    let right_paragraph = Paragraph::new("[F1]Help [Tab]Panel [q]Quit")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[2]);
}

fn draw_main_content(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),  // Quotes + trades
            Constraint::Percentage(55),  // Orders
        ])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.quote_views.len() as u16 + 3),
            Constraint::Min(4),
        ])
        .split(chunks[0]);

    let rows: Vec<Row<'static>> = app
        .quote_views
        .iter()
        .enumerate()
        .map(|(i, view)| view.render(&app.market, i == app.selected_quote))
        .collect();
    draw_quote_list(f, left_chunks[0], rows, app.current_panel == Panel::Quotes);
    draw_trade_list(f, left_chunks[1], app.market.trades());

    app.order_list_view.render(
        f,
        chunks[1],
        &app.market,
        app.current_panel == Panel::Orders,
        app.input_mode == InputMode::Editing,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::order_list_view::FormControl;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use ticker_core::{Market, Quote, QuoteList};

    fn app() -> App {
        let quotes: QuoteList = [Quote::new("HUMOR", 88.50), Quote::new("CLOTH", 81.70)]
            .into_iter()
            .collect();
        App::new(Market::new(quotes, 20))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_quotes_and_symbol_selector() {
        let screen = render(&app());
        assert!(screen.contains("88.50"));
        assert!(screen.contains("81.70"));
        assert!(screen.contains("No open orders"));
        // Selector options come from the quote list.
        assert!(screen.contains(" HUMOR  CLOTH "));
        assert!(screen.contains("btn-buy"));
    }

    #[test]
    fn draws_orders_and_status_message() {
        let mut app = app();
        app.order_list_view.form.price_input = "80".to_string();
        app.submit_order(FormControl::Buy);

        let screen = render(&app);
        assert!(screen.contains("Open Orders (1)"));
        assert!(screen.contains("80.00"));
        assert!(screen.contains("Successfully added a buy open order for HUMOR"));
    }

    #[test]
    fn draws_validation_errors() {
        let mut app = app();
        app.order_list_view.form.price_input = "abc".to_string();
        app.submit_order(FormControl::Sell);

        let screen = render(&app);
        assert!(screen.contains("Target price must be a number"));
        assert!(screen.contains("No open orders"));
    }

    #[test]
    fn help_overlay_lists_bindings() {
        let mut app = app();
        app.toggle_help();
        let screen = render(&app);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("Pause / Resume Market Feed"));
    }
}

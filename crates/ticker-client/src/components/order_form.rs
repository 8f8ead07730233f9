// crates/ticker-client/src/components/order_form.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ticker_core::QuoteList;

use crate::views::order_list_view::{FormControl, OrderForm, StatusKind, StatusMessage};

pub fn draw_order_form(
    f: &mut Frame,
    area: Rect,
    form: &OrderForm,
    quotes: &QuoteList,
    status: Option<&StatusMessage>,
    focused: bool,
    editing: bool,
) {
    let block = Block::default()
        .title(" New Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White }));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Symbol selector
            Constraint::Length(2),  // Target price
            Constraint::Length(1),  // Buy / sell controls
            Constraint::Min(1),     // Status message
        ])
        .split(inner);

    // Symbol selector, options rebuilt from the quote list
    let mut symbol_spans = vec![Span::raw("Symbol: ")];
    for (i, symbol) in quotes.symbols().enumerate() {
        let style = if i == form.symbol_index {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        symbol_spans.push(Span::styled(format!(" {symbol} "), style));
    }
    let selector = Paragraph::new(Line::from(symbol_spans))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(selector, chunks[0]);

    // Target price input
    let market = form
        .selected_symbol(quotes)
        .and_then(|symbol| quotes.find(symbol))
        .map(|quote| format!("  (market {:.2})", quote.price))
        .unwrap_or_default();
    let price_line = Line::from(vec![
        Span::raw("Target price: "),
        Span::styled(form.price_input.clone(), Style::default().fg(Color::Cyan)),
        if editing {
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK))
        } else {
            Span::raw("")
        },
        Span::styled(market, Style::default().fg(Color::Gray)),
    ]);
    let price = Paragraph::new(price_line)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(price, chunks[1]);

    // Controls
    let controls = Line::from(vec![
        Span::styled(
            format!("[b] {}", FormControl::Buy.class()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("[s] {}", FormControl::Sell.class()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[2],
    );

    // Status message
    if let Some(status) = status {
        let color = match status.kind {
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        let message = Paragraph::new(status.text.clone())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[3]);
    }
}

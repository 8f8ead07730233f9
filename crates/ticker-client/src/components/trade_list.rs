// crates/ticker-client/src/components/trade_list.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use ticker_core::{Side, TradeHistory, TradeOrigin};

pub fn draw_trade_list(f: &mut Frame, area: Rect, trades: &TradeHistory) {
    let header = Row::new(vec!["Time", "Symbol", "Side", "Price", "Via"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    // Only as many rows as fit (borders + header take three lines).
    let visible = area.height.saturating_sub(3) as usize;

    let rows: Vec<Row> = trades.iter().take(visible).map(|trade| {
        let side_style = match trade.side {
            Side::Buy => Style::default().fg(Color::Green),
            Side::Sell => Style::default().fg(Color::Red),
        };
        let origin = match trade.origin {
            TradeOrigin::Manual => "manual",
            TradeOrigin::Order => "order",
        };

        Row::new(vec![
            Cell::from(trade.timestamp.format("%H:%M:%S").to_string()),
            Cell::from(trade.symbol.clone()),
            Cell::from(trade.side.as_str().to_uppercase()).style(side_style),
            Cell::from(format!("{:.2}", trade.price)),
            Cell::from(origin),
        ])
    }).collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Min(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(format!(" Trades ({}) ", trades.len()))
            .borders(Borders::ALL));

    f.render_widget(table, area);
}

// crates/ticker-client/src/components/order_list.rs

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use ticker_core::{Order, OrderList, Side};

pub fn draw_order_list(f: &mut Frame, area: Rect, orders: &OrderList, focused: bool) {
    let block = Block::default()
        .title(format!(" Open Orders ({}) ", orders.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White }));

    if orders.is_empty() {
        let empty = Paragraph::new("No open orders")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "Sym", "Side", "Target", "At Entry"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = orders.iter().map(order_row).collect();

    let widths = [
        Constraint::Length(5),   // ID
        Constraint::Length(7),   // Symbol
        Constraint::Length(5),   // Side
        Constraint::Length(9),   // Target
        Constraint::Min(9),      // Quote price when placed
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block);

    f.render_widget(table, area);
}

/// One row per pending order.
fn order_row(order: &Order) -> Row<'static> {
    let side_style = match order.side {
        Side::Buy => Style::default().fg(Color::Green),
        Side::Sell => Style::default().fg(Color::Red),
    };

    Row::new(vec![
        Cell::from(order.id.to_string()),
        Cell::from(order.symbol.clone()),
        Cell::from(order.side.as_str().to_uppercase()).style(side_style),
        Cell::from(format!("{:.2}", order.target_price)),
        Cell::from(format!("{:.2}", order.quote_price)).style(Style::default().fg(Color::Gray)),
    ])
}

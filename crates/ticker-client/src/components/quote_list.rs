// crates/ticker-client/src/components/quote_list.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

/// Table around the rows rendered by the quote views.
pub fn draw_quote_list(f: &mut Frame, area: Rect, rows: Vec<Row<'static>>, focused: bool) {
    let header = Row::new(vec!["Symbol", "Price", "Chg"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Min(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(" Quotes  [b]uy [s]ell ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White })));

    f.render_widget(table, area);
}

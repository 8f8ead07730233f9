// crates/ticker-client/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, Color, &str)] = &[
    ("Tab", Color::Blue, "Next Panel"),
    ("Shift+Tab", Color::Blue, "Previous Panel"),
    ("↑/k ↓/j", Color::White, "Select Quote"),
    ("b", Color::Green, "Buy Quote / Submit Buy Order (btn-buy)"),
    ("s", Color::Red, "Sell Quote / Submit Sell Order (btn-sell)"),
    ("←/h →/l", Color::White, "Change Order Symbol"),
    ("e/Enter", Color::Cyan, "Edit Target Price"),
    ("Esc/Enter", Color::Cyan, "Stop Editing"),
    ("p", Color::Yellow, "Pause / Resume Market Feed"),
    ("F1", Color::Gray, "Toggle Help"),
    ("q", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = BINDINGS
        .iter()
        .map(|(keys, color, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{keys:>10}"), Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::raw(format!(" - {action}")),
            ]))
        })
        .collect();

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    if area.height < 3 {
        return;
    }

    // Add footer with close instruction
    let footer = Paragraph::new("Press F1 or Esc to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    f.render_widget(footer, footer_area);
}

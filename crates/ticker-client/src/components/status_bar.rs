// crates/ticker-client/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, Panel};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match app.input_mode {
        InputMode::Normal => {
            let mut shortcuts = match app.current_panel {
                Panel::Quotes => vec![
                    Span::styled("[b]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw("uy quote "),
                    Span::styled("[s]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                    Span::raw("ell quote "),
                ],
                Panel::Orders => vec![
                    Span::styled("[e]", Style::default().fg(Color::Cyan)),
                    Span::raw("dit price "),
                    Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
                    Span::raw(" symbol "),
                    Span::styled("[b]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw("uy order "),
                    Span::styled("[s]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                    Span::raw("ell order "),
                ],
            };
            shortcuts.extend([
                Span::styled("[p]", Style::default().fg(Color::Yellow)),
                Span::raw(if app.feed_paused { "resume " } else { "ause " }),
                Span::styled("[Tab]", Style::default().fg(Color::Blue)),
                Span::raw(" panel "),
                Span::styled("[q]", Style::default().fg(Color::Gray)),
                Span::raw("uit"),
            ]);
            (Line::from(shortcuts), Style::default())
        }
        InputMode::Editing => {
            let input = vec![
                Span::raw("Target price: "),
                Span::styled(app.order_list_view.form.price_input.clone(), Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                Span::raw("  [Enter/Esc] Done"),
            ];
            (Line::from(input), Style::default().fg(Color::Yellow))
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

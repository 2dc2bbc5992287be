use super::*;
use crate::state::State;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(size);

    filters(frame, rows[0], state);
    if state.is_debug_mode() {
        log(frame, rows[1], state);
    } else {
        checklist(frame, rows[1], state);
    }
    progress(frame, rows[2], state);
    footer(frame, rows[3], state);

    // Confirmation dialog renders on top of everything
    if state.has_clear_confirmation() {
        render_clear_confirmation(frame, size, state);
    }
}

fn render_clear_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    // Create a centered popup dialog using ratatui pattern
    let popup_area = centered_rect(60, 25, size);

    // Clear the area first (ratatui modal pattern)
    frame.render_widget(Clear, popup_area);

    let theme = state.get_theme();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Reset completion on every item?",
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            Style::default()
                .fg(theme.warning.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: confirm, Esc: cancel",
            Style::default().fg(theme.text_muted.to_color()),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Confirm Clear All",
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rectangle (ratatui modal pattern)
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

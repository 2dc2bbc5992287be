use super::Frame;
use crate::state::State;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();

    let hide_label = if state.hide_completed() {
        "show completed"
    } else {
        "hide completed"
    };
    let normal_controls = format!(
        " j/k: navigate, Space: toggle, h/l: category, H/L: subcategory, /: search, c: {}, D: clear all, d: logs, y: copy name, q: quit",
        hide_label
    );

    let (mode, mode_color, controls_text) = if state.is_search_mode() {
        (
            "SEARCH:",
            theme.footer_search.to_color(),
            " Type to search, Backspace: delete, Enter/Esc: done".to_string(),
        )
    } else if state.has_clear_confirmation() {
        (
            "CLEAR:",
            theme.footer_confirm.to_color(),
            " Enter: reset every item, Esc: cancel".to_string(),
        )
    } else if state.is_debug_mode() {
        (
            "DEBUG:",
            theme.footer_debug.to_color(),
            " j/k: navigate logs, y: copy log, d/Esc: exit debug mode".to_string(),
        )
    } else {
        ("NORMAL:", theme.footer_normal.to_color(), normal_controls)
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.text.to_color())
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text,
            Style::default().fg(theme.warning.to_color()),
        ),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    // Show the search query on the right while one is active, otherwise the
    // version number
    let right_content = if state.is_search_mode() {
        let search_text = if state.get_search_query().is_empty() {
            "/".to_string()
        } else {
            format!("/{}", state.get_search_query())
        };
        Line::from(vec![Span::styled(
            search_text,
            Style::default()
                .fg(theme.text.to_color())
                .bg(theme.footer_search.to_color())
                .add_modifier(Modifier::BOLD),
        )])
    } else if !state.get_search_query().is_empty() {
        // Show query even if not in search mode (after exiting search)
        Line::from(vec![Span::styled(
            format!("/{}", state.get_search_query()),
            Style::default().fg(theme.text_muted.to_color()),
        )])
    } else {
        Line::from(vec![Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.secondary.to_color()),
        )])
    };

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

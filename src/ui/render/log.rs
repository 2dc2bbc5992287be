use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(Span::styled(
            "Log (j/k: navigate, y: copy, Esc: exit)",
            Style::default().fg(theme.info.to_color()),
        ))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    let debug_entries = state.get_debug_entries();
    let items: Vec<ListItem> = debug_entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry.clone(),
                styling::normal_text_style(theme),
            )]))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme))
        .block(block);

    let mut list_state = ListState::default();
    if !debug_entries.is_empty() {
        list_state.select(Some(state.get_debug_index()));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}

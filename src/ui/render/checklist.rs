use super::widgets::spinner;
use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BLOCK_TITLE: &str = "Checklist";

/// Render checklist widget according to state.
///
pub fn checklist(frame: &mut Frame, size: Rect, state: &mut State) {
    let display_items = state.display_items();

    // Show search in title while a query is active (show "/" even if the
    // query is empty while typing)
    let title_text = if state.is_search_mode() || !state.get_search_query().is_empty() {
        format!(
            "{} ({}) /{}",
            BLOCK_TITLE,
            display_items.len(),
            state.get_search_query()
        )
    } else {
        format!("{} ({})", BLOCK_TITLE, display_items.len())
    };

    let theme = state.get_theme();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if state.is_search_mode() {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                title_text.clone(),
                styling::active_block_title_style(),
            ));
    } else {
        block = block.title(title_text);
    }

    // A failed load renders its diagnostic where the list would be
    if let Some(error) = state.get_load_error() {
        let diagnostic = Paragraph::new(Line::from(Span::styled(
            format!("Failed to load checklist: {}", error),
            styling::normal_text_style(theme).fg(theme.error.to_color()),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(diagnostic, size);
        return;
    }

    // Show spinner until the initial load finishes
    if state.is_loading() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    let has_search_query = !state.get_search_query().is_empty();
    let has_loaded_items = !state.get_items().is_empty();

    let items: Vec<ListItem> = if display_items.is_empty() && has_search_query && has_loaded_items {
        // Empty search results - show "No results found"
        vec![ListItem::new("No results found")]
    } else {
        display_items
            .iter()
            .map(|item| {
                let (marker, style) = if item.completed {
                    ("✔", styling::completed_item_style(theme))
                } else {
                    (" ", styling::normal_text_style(theme))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", marker), styling::normal_text_style(theme)),
                    Span::styled(item.name.clone(), style),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme))
        .block(block);

    frame.render_stateful_widget(list, size, state.get_list_state());
}

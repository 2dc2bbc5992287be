use super::Frame;
use crate::state::{CategorySelection, State, SubcategorySelection};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Tabs},
};

/// Render the category and subcategory selector tabs according to state.
///
pub fn filters(frame: &mut Frame, size: Rect, state: &mut State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(size);

    let theme = state.get_theme();
    let filter = state.filter();

    let category_index = CategorySelection::ORDER
        .iter()
        .position(|s| *s == filter.category)
        .unwrap_or(0);
    let category_tabs = Tabs::new(
        CategorySelection::ORDER
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>(),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Category")
            .border_style(styling::normal_block_border_style(theme)),
    )
    .style(styling::normal_text_style(theme))
    .highlight_style(styling::selected_tab_style(theme))
    .select(category_index);
    frame.render_widget(category_tabs, columns[0]);

    let subcategory_index = SubcategorySelection::ORDER
        .iter()
        .position(|s| *s == filter.subcategory)
        .unwrap_or(0);
    let subcategory_tabs = Tabs::new(
        SubcategorySelection::ORDER
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>(),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Subcategory")
            .border_style(styling::normal_block_border_style(theme)),
    )
    .style(styling::normal_text_style(theme))
    .highlight_style(styling::selected_tab_style(theme))
    .select(subcategory_index);
    frame.render_widget(subcategory_tabs, columns[1]);
}

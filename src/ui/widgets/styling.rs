use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the currently highlighted list row.
///
pub fn highlight_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for completed checklist items.
///
pub fn completed_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text_muted.to_color())
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Return the style for the selector tab of the active selection.
///
pub fn selected_tab_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the progress gauge bar.
///
pub fn gauge_style(theme: &Theme) -> Style {
    Style::default().fg(theme.success.to_color())
}

use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Gauge},
};

/// Render the progress gauge for the selected scope according to state.
/// Completion counts the whole selected category/subcategory, not only the
/// rows left visible by search or hide-completed.
///
pub fn progress(frame: &mut Frame, size: Rect, state: &mut State) {
    let (completed, total) = state.progress();
    let ratio = if total > 0 {
        completed as f64 / total as f64
    } else {
        0.0
    };
    let label = format!(
        "{}/{} ({}%) Complete",
        completed,
        total,
        (ratio * 100.0).round() as u16
    );

    let theme = state.get_theme();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Progress")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .gauge_style(styling::gauge_style(theme))
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, size);
}

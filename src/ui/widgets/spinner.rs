use crate::state::State;
use ratatui::{
    layout::Alignment,
    text::Line,
    widgets::Paragraph,
};

/// Braille frames cycled by the terminal tick.
///
pub const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠇"];

/// Return a paragraph widget showing the loading spinner, vertically
/// centered for the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..(height / 2).saturating_sub(1) {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(format!("{} Loading...", frame)));
    Paragraph::new(lines).alignment(Alignment::Center)
}

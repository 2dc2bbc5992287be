use crate::state::State;
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                // The clear-all confirmation swallows every key until it is
                // answered
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } if state.has_clear_confirmation() => {
                    state.confirm_clear_all();
                }
                KeyEvent {
                    code: KeyCode::Esc, ..
                } if state.has_clear_confirmation() => {
                    debug!("Clear-all declined.");
                    state.cancel_clear_all();
                }
                KeyEvent { .. } if state.has_clear_confirmation() => {}
                // Search mode captures character keys first
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_search_mode() => {
                    state.add_search_char(c);
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } if state.is_search_mode() => {
                    state.add_search_char(c);
                }
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } if state.is_search_mode() => {
                    state.remove_search_char();
                }
                KeyEvent {
                    code: KeyCode::Esc, ..
                } if state.is_search_mode() => {
                    debug!("Processing exit search mode event '{:?}'...", event);
                    state.exit_search_mode();
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } if state.is_search_mode() => {
                    state.exit_search_mode();
                }
                // Debug mode navigation and copying
                KeyEvent {
                    code: KeyCode::Char('j'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_debug_mode() => {
                    state.next_debug();
                }
                KeyEvent {
                    code: KeyCode::Char('k'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_debug_mode() => {
                    state.previous_debug();
                }
                KeyEvent {
                    code: KeyCode::Char('y'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_debug_mode() => {
                    if let Some(entry) = state.get_current_debug() {
                        copy_to_clipboard(entry.clone(), "Debug log entry");
                    }
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_debug_mode() => {
                    state.exit_debug_mode();
                }
                KeyEvent {
                    code: KeyCode::Esc, ..
                } if state.is_debug_mode() => {
                    state.exit_debug_mode();
                }
                // Normal mode
                KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('/'),
                    ..
                } => {
                    state.enter_search_mode();
                }
                KeyEvent {
                    code: KeyCode::Char('j'),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Down,
                    ..
                } => {
                    state.next_item();
                }
                KeyEvent {
                    code: KeyCode::Char('k'),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Up, ..
                } => {
                    state.previous_item();
                }
                KeyEvent {
                    code: KeyCode::Char('h'),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Left,
                    ..
                } => {
                    state.previous_category();
                }
                KeyEvent {
                    code: KeyCode::Char('l'),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Right,
                    ..
                } => {
                    state.next_category();
                }
                KeyEvent {
                    code: KeyCode::Char('H'),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } => {
                    state.previous_subcategory();
                }
                KeyEvent {
                    code: KeyCode::Char('L'),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } => {
                    state.next_subcategory();
                }
                KeyEvent {
                    code: KeyCode::Char(' '),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => {
                    state.toggle_selected();
                }
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    state.toggle_hide_completed();
                }
                KeyEvent {
                    code: KeyCode::Char('D'),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } => {
                    state.request_clear_all();
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    state.enter_debug_mode();
                }
                KeyEvent {
                    code: KeyCode::Char('y'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if let Some(item) = state.selected_item() {
                        copy_to_clipboard(item.name, "Item name");
                    }
                }
                _ => {}
            },
            Event::Tick => {
                state.advance_spinner_index();
            }
        }
        Ok(true)
    }
}

/// Copy text to the system clipboard, logging the outcome.
///
fn copy_to_clipboard(text: String, label: &str) {
    match ClipboardContext::new() {
        Ok(mut context) => match context.set_contents(text) {
            Ok(_) => {
                info!("{} copied to clipboard", label);
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
            }
        },
        Err(e) => {
            warn!("Failed to initialize clipboard: {}", e);
        }
    }
}

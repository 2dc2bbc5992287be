use crate::app::StorageSaveSender;
use crate::grail::Item;
use crate::state::filter::FilterState;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::widgets::ListState;

/// Houses data representative of application state: the item sequence, the
/// active filter selections, and the transient UI flags. The state owns the
/// items exclusively; the rendering layer only reads them.
///
pub struct State {
    save_sender: Option<StorageSaveSender>,
    items: Vec<Item>,
    filter: FilterState,
    search_mode: bool,
    list_state: ListState,
    loading: bool,
    load_error: Option<String>,
    clear_confirmation: bool,
    spinner_index: usize,
    debug_mode: bool,
    debug_index: usize,
    debug_entries: Vec<String>,
    theme: crate::ui::Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            save_sender: None,
            items: vec![],
            filter: FilterState::default(),
            search_mode: false,
            list_state: ListState::default(),
            loading: true,
            load_error: None,
            clear_confirmation: false,
            spinner_index: 0,
            debug_mode: false,
            debug_index: 0,
            debug_entries: vec![],
            theme: crate::ui::Theme::default(),
        }
    }
}

impl State {
    pub fn new(
        save_sender: StorageSaveSender,
        hide_completed: bool,
        theme: crate::ui::Theme,
    ) -> Self {
        State {
            save_sender: Some(save_sender),
            filter: FilterState {
                hide_completed,
                ..FilterState::default()
            },
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Whether the initial load is still in flight.
    ///
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Return the load failure diagnostic, if any.
    ///
    pub fn get_load_error(&self) -> Option<&String> {
        self.load_error.as_ref()
    }

    /// Record a load failure. The item sequence stays empty.
    ///
    pub fn set_load_error(&mut self, error: String) -> &mut Self {
        self.load_error = Some(error);
        self.loading = false;
        self
    }

    /// Install the loaded item sequence and select the first visible item.
    ///
    pub fn set_items(&mut self, items: Vec<Item>) -> &mut Self {
        self.items = items;
        self.loading = false;
        self.load_error = None;
        self.reset_selection();
        self
    }

    /// Return the full item sequence in load order.
    ///
    pub fn get_items(&self) -> &[Item] {
        &self.items
    }

    /// Return the active filter selections.
    ///
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Positions of the visible items within the underlying sequence.
    ///
    fn display_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.display_matches(item))
            .map(|(index, _)| index)
            .collect()
    }

    /// Return the visible items after applying every active filter, in
    /// underlying sequence order.
    ///
    pub fn display_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| self.filter.display_matches(item))
            .cloned()
            .collect()
    }

    /// Return completed and total counts over the selected
    /// category/subcategory scope. Search and hide-completed are deliberately
    /// ignored: progress reflects the selected scope, not the visible rows.
    ///
    pub fn progress(&self) -> (usize, usize) {
        let in_scope = self
            .items
            .iter()
            .filter(|item| self.filter.scope_matches(item));
        let mut total = 0;
        let mut completed = 0;
        for item in in_scope {
            total += 1;
            if item.completed {
                completed += 1;
            }
        }
        (completed, total)
    }

    /// Return the checklist list state.
    ///
    pub fn get_list_state(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Activate the next visible item.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        let visible = self.display_indices().len();
        if visible == 0 {
            self.list_state.select(None);
            return self;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < visible => Some(i + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
        self.list_state.select(next);
        self
    }

    /// Activate the previous visible item.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        let visible = self.display_indices().len();
        if visible == 0 {
            self.list_state.select(None);
            return self;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => Some(visible - 1),
            Some(i) => Some(i - 1),
        };
        self.list_state.select(previous);
        self
    }

    /// Return the currently selected visible item.
    ///
    pub fn selected_item(&self) -> Option<Item> {
        let indices = self.display_indices();
        self.list_state
            .selected()
            .and_then(|selected| indices.get(selected).copied())
            .map(|index| self.items[index].clone())
    }

    /// Toggle completion of the selected visible item. The selection is
    /// resolved to its position in the underlying sequence, so duplicate
    /// names toggle independently.
    ///
    pub fn toggle_selected(&mut self) -> &mut Self {
        let indices = self.display_indices();
        if let Some(selected) = self.list_state.selected() {
            if let Some(&index) = indices.get(selected) {
                self.items[index].completed = !self.items[index].completed;
                self.request_save();
                self.validate_selection();
            }
        }
        self
    }

    /// Whether completed items are hidden from the list.
    ///
    pub fn hide_completed(&self) -> bool {
        self.filter.hide_completed
    }

    /// Flip the hide-completed flag and persist it.
    ///
    pub fn toggle_hide_completed(&mut self) -> &mut Self {
        self.filter.hide_completed = !self.filter.hide_completed;
        self.request_save();
        self.validate_selection();
        self
    }

    /// Ask for confirmation before resetting the checklist.
    ///
    pub fn request_clear_all(&mut self) -> &mut Self {
        self.clear_confirmation = true;
        self
    }

    /// Check if there's a pending clear-all confirmation.
    ///
    pub fn has_clear_confirmation(&self) -> bool {
        self.clear_confirmation
    }

    /// Decline the pending clear-all confirmation. Leaves every item as is.
    ///
    pub fn cancel_clear_all(&mut self) -> &mut Self {
        self.clear_confirmation = false;
        self
    }

    /// Reset completion on every item in the full sequence, not just the
    /// visible ones, and persist.
    ///
    pub fn confirm_clear_all(&mut self) -> &mut Self {
        if !self.clear_confirmation {
            return self;
        }
        self.clear_confirmation = false;
        for item in &mut self.items {
            item.completed = false;
        }
        info!("Cleared completion on {} items.", self.items.len());
        self.request_save();
        self.validate_selection();
        self
    }

    /// Activate the next category selection.
    ///
    pub fn next_category(&mut self) -> &mut Self {
        self.filter.category = self.filter.category.next();
        self.reset_selection();
        self
    }

    /// Activate the previous category selection.
    ///
    pub fn previous_category(&mut self) -> &mut Self {
        self.filter.category = self.filter.category.previous();
        self.reset_selection();
        self
    }

    /// Activate the next subcategory selection.
    ///
    pub fn next_subcategory(&mut self) -> &mut Self {
        self.filter.subcategory = self.filter.subcategory.next();
        self.reset_selection();
        self
    }

    /// Activate the previous subcategory selection.
    ///
    pub fn previous_subcategory(&mut self) -> &mut Self {
        self.filter.subcategory = self.filter.subcategory.previous();
        self.reset_selection();
        self
    }

    /// Enter search mode.
    ///
    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.search_mode = true;
        self
    }

    /// Exit search mode. Keeps the query active for the visible list.
    ///
    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.search_mode = false;
        self
    }

    /// Check if in search mode.
    ///
    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    /// Get search query.
    ///
    pub fn get_search_query(&self) -> &str {
        &self.filter.search
    }

    /// Add a character to the search query.
    ///
    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.filter.search.push(c);
        self.validate_selection();
        self
    }

    /// Remove the last character from the search query.
    ///
    pub fn remove_search_char(&mut self) -> &mut Self {
        self.filter.search.pop();
        self.validate_selection();
        self
    }

    /// Enter debug mode for navigating and copying logs.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        if !self.debug_entries.is_empty() {
            self.debug_index = self.debug_entries.len() - 1;
        } else {
            self.debug_index = 0;
        }
        self
    }

    /// Exit debug mode.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    /// Check if in debug mode.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Get current debug index.
    ///
    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Navigate to next log entry.
    ///
    pub fn next_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            self.debug_index = (self.debug_index + 1) % self.debug_entries.len();
        }
        self
    }

    /// Navigate to previous log entry.
    ///
    pub fn previous_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            if self.debug_index == 0 {
                self.debug_index = self.debug_entries.len() - 1;
            } else {
                self.debug_index -= 1;
            }
        }
        self
    }

    /// Get the currently selected log entry.
    ///
    pub fn get_current_debug(&self) -> Option<&String> {
        self.debug_entries.get(self.debug_index)
    }

    /// Add a log entry to the debug buffer.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.debug_entries.push(entry);
        // Keep only the last 1000 log entries to prevent memory issues
        if self.debug_entries.len() > 1000 {
            self.debug_entries.remove(0);
            if self.debug_index > 0 {
                self.debug_index -= 1;
            }
        }
        if !self.debug_mode && !self.debug_entries.is_empty() {
            self.debug_index = self.debug_entries.len() - 1;
        }
    }

    /// Get debug entries for rendering (read-only access).
    ///
    pub fn get_debug_entries(&self) -> &[String] {
        &self.debug_entries
    }

    /// Request a persistence pass over the item sequence and view flag.
    ///
    fn request_save(&self) {
        if let Some(save_sender) = &self.save_sender {
            if let Err(err) = save_sender.send(()) {
                error!("Received error from save dispatch: {}", err);
            }
        }
    }

    /// Reset selection to the first visible item, or none when the display
    /// set is empty.
    ///
    fn reset_selection(&mut self) {
        if self.display_indices().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Clamp the selection after the display set shrank.
    ///
    fn validate_selection(&mut self) {
        let visible = self.display_indices().len();
        if visible == 0 {
            self.list_state.select(None);
        } else {
            match self.list_state.selected() {
                Some(selected) if selected < visible => {}
                _ => self.list_state.select(Some(0)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grail::{Category, Subcategory};
    use fake::{Fake, Faker};

    fn item(name: &str, category: Category, subcategory: Subcategory, completed: bool) -> Item {
        Item {
            name: name.to_string(),
            category,
            subcategory,
            completed,
        }
    }

    fn two_item_state() -> State {
        let mut state = State::default();
        state.set_items(vec![
            item("Shako", Category::TieredUniques, Subcategory::Armor, false),
            item("Stone of Jordan", Category::Sets, Subcategory::Misc, true),
        ]);
        state
    }

    #[test]
    fn set_items_selects_first_and_clears_loading() {
        let mut state = State::default();
        assert!(state.is_loading());
        let items: Vec<Item> = vec![Faker.fake(), Faker.fake(), Faker.fake()];
        state.set_items(items.clone());
        assert!(!state.is_loading());
        assert_eq!(state.get_items(), items.as_slice());
    }

    #[test]
    fn display_applies_all_clauses_progress_ignores_view_clauses() {
        let mut state = two_item_state();
        state.toggle_hide_completed();

        let display = state.display_items();
        assert_eq!(display.len(), 1);
        assert_eq!(display[0].name, "Shako");

        // Progress still counts the hidden completed item: 1/2
        assert_eq!(state.progress(), (1, 2));
    }

    #[test]
    fn scoped_selection_empties_both_sets_on_mismatch() {
        let mut state = two_item_state();
        state.next_category(); // Tiered
        state.next_subcategory(); // Weapons

        assert!(state.display_items().is_empty());
        assert_eq!(state.progress(), (0, 0));
    }

    #[test]
    fn search_narrows_display_not_progress() {
        let mut state = two_item_state();
        for c in "stone".chars() {
            state.add_search_char(c);
        }

        let display = state.display_items();
        assert_eq!(display.len(), 1);
        assert_eq!(display[0].name, "Stone of Jordan");
        assert_eq!(state.progress(), (1, 2));
    }

    #[test]
    fn display_is_pure_and_repeatable() {
        let state = two_item_state();
        let before = state.get_items().to_vec();
        let first = state.display_items();
        let second = state.display_items();
        assert_eq!(first, second);
        assert_eq!(state.get_items(), before.as_slice());
    }

    #[test]
    fn toggle_selected_flips_by_position() {
        // Duplicate names: identity must be positional
        let mut state = State::default();
        state.set_items(vec![
            item("Zod", Category::Runes, Subcategory::Misc, false),
            item("Zod", Category::Runes, Subcategory::Misc, false),
        ]);
        state.next_item(); // select second entry

        state.toggle_selected();
        assert!(!state.get_items()[0].completed);
        assert!(state.get_items()[1].completed);
    }

    #[test]
    fn toggle_twice_restores_original() {
        let mut state = two_item_state();
        let before = state.get_items().to_vec();
        state.toggle_selected();
        assert_ne!(state.get_items(), before.as_slice());
        state.toggle_selected();
        assert_eq!(state.get_items(), before.as_slice());
    }

    #[test]
    fn toggle_respects_active_filters() {
        let mut state = two_item_state();
        for c in "stone".chars() {
            state.add_search_char(c);
        }
        // Only Stone of Jordan is visible; selection 0 resolves to position 1
        state.toggle_selected();
        assert!(!state.get_items()[0].completed);
        assert!(!state.get_items()[1].completed);
    }

    #[test]
    fn toggle_with_empty_display_is_noop() {
        let mut state = two_item_state();
        state.next_category(); // Tiered
        state.next_subcategory(); // Weapons
        let before = state.get_items().to_vec();
        state.toggle_selected();
        assert_eq!(state.get_items(), before.as_slice());
    }

    #[test]
    fn clear_all_requires_confirmation() {
        let mut state = two_item_state();

        // Declined: nothing changes
        state.request_clear_all();
        assert!(state.has_clear_confirmation());
        state.cancel_clear_all();
        assert!(!state.has_clear_confirmation());
        assert!(state.get_items()[1].completed);

        // Without a pending request, confirm is a no-op
        state.confirm_clear_all();
        assert!(state.get_items()[1].completed);
    }

    #[test]
    fn clear_all_resets_every_item_regardless_of_filter() {
        let mut state = two_item_state();
        // Narrow the view to the first item only
        state.next_category();
        for c in "shako".chars() {
            state.add_search_char(c);
        }

        state.request_clear_all();
        state.confirm_clear_all();
        assert!(state.get_items().iter().all(|i| !i.completed));
    }

    #[test]
    fn hide_completed_flag_starts_from_constructor() {
        let (save_tx, _save_rx) = std::sync::mpsc::channel();
        let state = State::new(save_tx, true, crate::ui::Theme::default());
        assert!(state.hide_completed());
    }

    #[test]
    fn toggle_requests_persistence() {
        let (save_tx, save_rx) = std::sync::mpsc::channel();
        let mut state = State::new(save_tx, false, crate::ui::Theme::default());
        state.set_items(vec![item(
            "Shako",
            Category::TieredUniques,
            Subcategory::Armor,
            false,
        )]);

        state.toggle_selected();
        state.toggle_selected();
        assert!(save_rx.try_recv().is_ok());
        assert!(save_rx.try_recv().is_ok());
        assert!(save_rx.try_recv().is_err());
    }

    #[test]
    fn navigation_wraps_over_visible_items() {
        let mut state = two_item_state();
        assert_eq!(state.selected_item().unwrap().name, "Shako");
        state.next_item();
        assert_eq!(state.selected_item().unwrap().name, "Stone of Jordan");
        state.next_item();
        assert_eq!(state.selected_item().unwrap().name, "Shako");
        state.previous_item();
        assert_eq!(state.selected_item().unwrap().name, "Stone of Jordan");
    }

    #[test]
    fn shrinking_display_resets_selection() {
        let mut state = two_item_state();
        state.next_item(); // second item selected
        state.toggle_hide_completed(); // completed second item vanishes
        assert_eq!(state.selected_item().unwrap().name, "Shako");
    }

    #[test]
    fn load_error_clears_loading_and_keeps_items_empty() {
        let mut state = State::default();
        state.set_load_error("Seed resource 'sets' returned status 404".to_string());
        assert!(!state.is_loading());
        assert!(state.get_items().is_empty());
        assert!(state.get_load_error().unwrap().contains("404"));
    }

    #[test]
    fn debug_navigation_wraps() {
        let mut state = State::default();
        state.add_log_entry("first".to_string());
        state.add_log_entry("second".to_string());
        state.enter_debug_mode();
        assert_eq!(state.get_current_debug().unwrap(), "second");
        state.next_debug();
        assert_eq!(state.get_current_debug().unwrap(), "first");
        state.previous_debug();
        assert_eq!(state.get_current_debug().unwrap(), "second");
    }
}

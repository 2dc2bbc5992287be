use crate::grail::Grail;
use crate::state::State;
use crate::storage::Storage;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    LoadChecklist,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    grail: &'a Grail,
    storage: &'a Storage,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, grail: &'a Grail, storage: &'a Storage) -> Self {
        Handler {
            state,
            grail,
            storage,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadChecklist => self.load_checklist().await?,
        }
        Ok(())
    }

    /// Install the persisted checklist when one exists; otherwise fetch the
    /// seed lists, persist the assembled checklist, and install it. Any
    /// failure leaves the checklist empty and surfaces a diagnostic.
    ///
    async fn load_checklist(&mut self) -> Result<()> {
        info!("Loading checklist items...");
        match self.storage.load_items() {
            Ok(Some(items)) if !items.is_empty() => {
                info!("Restored {} items from storage.", items.len());
                let mut state = self.state.lock().await;
                state.set_items(items);
                return Ok(());
            }
            Ok(_) => {
                // Nothing persisted yet (or an empty sequence): seed below
            }
            Err(e) => {
                error!("Failed to restore persisted checklist: {}", e);
                let mut state = self.state.lock().await;
                state.set_load_error(e.to_string());
                return Err(e.into());
            }
        }

        info!("No persisted checklist found, fetching seed data...");
        match self.grail.checklist().await {
            Ok(items) => {
                if let Err(e) = self.storage.save_items(&items) {
                    error!("Failed to persist seeded checklist: {}", e);
                }
                info!("Seeded checklist with {} items.", items.len());
                let mut state = self.state.lock().await;
                state.set_items(items);
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch seed data: {}", e);
                let mut state = self.state.lock().await;
                state.set_load_error(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grail::{Category, Item, Subcategory};
    use httpmock::MockServer;
    use serde_json::json;
    use tempfile::TempDir;

    fn item(name: &str, completed: bool) -> Item {
        Item {
            name: name.to_string(),
            category: Category::Sets,
            subcategory: Subcategory::Misc,
            completed,
        }
    }

    fn open_temp() -> (TempDir, Storage) {
        let temp = TempDir::new().unwrap();
        let storage = Storage::open(temp.path().to_str()).unwrap();
        (temp, storage)
    }

    #[tokio::test]
    async fn load_restores_persisted_items_without_fetching() -> Result<()> {
        let (_temp, storage) = open_temp();
        let items = vec![item("Stone of Jordan", true), item("Angelic Wings", false)];
        storage.save_items(&items)?;

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.path_contains(".json");
                then.status(200).json_body(json!([]));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let grail = Grail::new(&server.base_url());
        let mut handler = Handler::new(&state, &grail, &storage);
        handler.handle(Event::LoadChecklist).await?;

        // Restored verbatim, and no seed request went out
        let state = state.lock().await;
        assert_eq!(state.get_items(), items.as_slice());
        assert_eq!(mock.hits_async().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn load_seeds_and_persists_when_storage_empty() -> Result<()> {
        let (_temp, storage) = open_temp();

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.path_contains(".json");
                then.status(200).json_body(json!(["Seeded item"]));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let grail = Grail::new(&server.base_url());
        let mut handler = Handler::new(&state, &grail, &storage);
        handler.handle(Event::LoadChecklist).await?;

        // 2 categories x 3 subcategory lists + 3 flat lists
        let state = state.lock().await;
        assert_eq!(state.get_items().len(), 9);
        assert!(state.get_items().iter().all(|i| !i.completed));

        // The seeded checklist is persisted for the next session
        let persisted = storage.load_items()?.unwrap();
        assert_eq!(persisted, state.get_items().to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn load_failure_leaves_state_empty_with_diagnostic() {
        let (_temp, storage) = open_temp();

        // Nothing mocked: every seed request responds 404
        let server = MockServer::start_async().await;

        let state = Arc::new(Mutex::new(State::default()));
        let grail = Grail::new(&server.base_url());
        let mut handler = Handler::new(&state, &grail, &storage);
        let result = handler.handle(Event::LoadChecklist).await;

        assert!(result.is_err());
        let state = state.lock().await;
        assert!(state.get_items().is_empty());
        assert!(state.get_load_error().is_some());
        assert!(!state.is_loading());
    }
}

mod client;
mod error;
mod resource;

pub use error::GrailError;
pub use resource::*;

use client::Client;
use log::*;

/// Responsible for asynchronous retrieval of the published item lists and
/// their assembly into the full checklist.
///
pub struct Grail {
    client: Client,
}

impl Grail {
    /// Returns a new instance for the given data set base URL.
    ///
    pub fn new(base_url: &str) -> Grail {
        debug!("Initializing seed client for {}...", base_url);
        Grail {
            client: Client::new(base_url),
        }
    }

    /// Returns the freshly seeded checklist: every category list fetched
    /// concurrently, flattened per category in weapons/armor/misc order,
    /// concatenated in declared category order, with every item incomplete.
    /// Any unreachable or unparseable list aborts the whole fetch.
    ///
    pub async fn checklist(&self) -> Result<Vec<Item>, GrailError> {
        debug!("Requesting seed lists for all categories...");

        let (tiered, sacred, sets, runes, charms) = tokio::try_join!(
            self.split_category(Category::TieredUniques),
            self.split_category(Category::SacredUniques),
            self.flat_category(Category::Sets),
            self.flat_category(Category::Runes),
            self.flat_category(Category::CharmsTrophies),
        )?;

        let mut items = tiered;
        items.extend(sacred);
        items.extend(sets);
        items.extend(runes);
        items.extend(charms);

        info!("Assembled {} checklist items from seed data.", items.len());
        Ok(items)
    }

    /// Returns the items of a category that publishes one list per
    /// subcategory, fetching the three lists concurrently.
    ///
    async fn split_category(&self, category: Category) -> Result<Vec<Item>, GrailError> {
        let [weapons, armor, misc] = Subcategory::ALL
            .map(|subcategory| format!("{}-{}", category.as_str(), subcategory.as_str()));

        let (weapons, armor, misc) = tokio::try_join!(
            self.client.names(&weapons),
            self.client.names(&armor),
            self.client.names(&misc),
        )?;

        let mut items = Self::tag(weapons, category, Subcategory::Weapons);
        items.extend(Self::tag(armor, category, Subcategory::Armor));
        items.extend(Self::tag(misc, category, Subcategory::Misc));
        Ok(items)
    }

    /// Returns the items of a category that publishes a single list. Its
    /// items always carry the misc subcategory.
    ///
    async fn flat_category(&self, category: Category) -> Result<Vec<Item>, GrailError> {
        let names = self.client.names(category.as_str()).await?;
        Ok(Self::tag(names, category, Subcategory::Misc))
    }

    fn tag(names: Vec<String>, category: Category, subcategory: Subcategory) -> Vec<Item> {
        names
            .into_iter()
            .map(|name| Item {
                name,
                category,
                subcategory,
                completed: false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    async fn mock_list(server: &MockServer, resource: &str, names: &[&str]) {
        let path = format!("/{}.json", resource);
        server
            .mock_async(|when, then| {
                when.method("GET").path(path);
                then.status(200).json_body(json!(names));
            })
            .await;
    }

    async fn mock_split_lists(server: &MockServer, category: Category) {
        for subcategory in Subcategory::ALL {
            let resource = format!("{}-{}", category.as_str(), subcategory.as_str());
            let name = format!("{} item", resource);
            mock_list(server, &resource, &[name.as_str()]).await;
        }
    }

    #[tokio::test]
    async fn checklist_success() -> Result<(), GrailError> {
        let server = MockServer::start_async().await;
        mock_list(&server, "tiered-uniques-weapons", &["Windforce"]).await;
        mock_list(&server, "tiered-uniques-armor", &["Shako"]).await;
        mock_list(&server, "tiered-uniques-misc", &["Raven Frost"]).await;
        mock_list(&server, "sacred-uniques-weapons", &["Grandfather"]).await;
        mock_list(&server, "sacred-uniques-armor", &["Templar's Might"]).await;
        mock_list(&server, "sacred-uniques-misc", &["Mara's Kaleidoscope"]).await;
        mock_list(&server, "sets", &["Tal Rasha's Guardianship"]).await;
        mock_list(&server, "runes", &["Zod", "Cham"]).await;
        mock_list(&server, "charms-trophies", &["Annihilus"]).await;

        let grail = Grail::new(&server.base_url());
        let items = grail.checklist().await?;

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Windforce",
                "Shako",
                "Raven Frost",
                "Grandfather",
                "Templar's Might",
                "Mara's Kaleidoscope",
                "Tal Rasha's Guardianship",
                "Zod",
                "Cham",
                "Annihilus",
            ]
        );
        assert!(items.iter().all(|i| !i.completed));
        Ok(())
    }

    #[tokio::test]
    async fn checklist_tags_subcategories() -> Result<(), GrailError> {
        let server = MockServer::start_async().await;
        mock_list(&server, "tiered-uniques-weapons", &["Windforce"]).await;
        mock_list(&server, "tiered-uniques-armor", &["Shako"]).await;
        mock_list(&server, "tiered-uniques-misc", &["Raven Frost"]).await;
        mock_split_lists(&server, Category::SacredUniques).await;
        mock_list(&server, "sets", &["Tal Rasha's Guardianship"]).await;
        mock_list(&server, "runes", &["Zod"]).await;
        mock_list(&server, "charms-trophies", &["Annihilus"]).await;

        let grail = Grail::new(&server.base_url());
        let items = grail.checklist().await?;

        assert_eq!(items[0].subcategory, Subcategory::Weapons);
        assert_eq!(items[1].subcategory, Subcategory::Armor);
        assert_eq!(items[2].subcategory, Subcategory::Misc);

        // Every flat-category item lands in misc
        assert!(items
            .iter()
            .filter(|i| !i.category.has_subcategories())
            .all(|i| i.subcategory == Subcategory::Misc));
        Ok(())
    }

    #[tokio::test]
    async fn checklist_missing_resource() {
        // Nothing mocked: every seed request responds 404
        let server = MockServer::start_async().await;

        let grail = Grail::new(&server.base_url());
        assert!(grail.checklist().await.is_err());
    }

    #[tokio::test]
    async fn checklist_unparseable_resource() {
        let server = MockServer::start_async().await;
        mock_split_lists(&server, Category::TieredUniques).await;
        mock_split_lists(&server, Category::SacredUniques).await;
        mock_list(&server, "runes", &["Zod"]).await;
        mock_list(&server, "charms-trophies", &["Annihilus"]).await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/sets.json");
                then.status(200).json_body(json!({ "not": "a name list" }));
            })
            .await;

        let grail = Grail::new(&server.base_url());
        let result = grail.checklist().await;
        assert!(matches!(result, Err(GrailError::Unparseable { .. })));
    }
}

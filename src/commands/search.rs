// Search command: free-text project search against Modrinth

use crate::config::ConfigStore;
use crate::error::FetchError;
use crate::modrinth::api;
use crate::ui;

pub async fn search(query: Vec<String>) -> anyhow::Result<()> {
    let store = ConfigStore::initialize()?;
    let game_version = &store.doc.current_game_ver;

    let query = query.join(" ");
    let results = match api::search(&query).await {
        Ok(results) => results,
        Err(FetchError::NotFound) => {
            ui::error(&format!("{} could not be found", query));
            return Ok(());
        }
        Err(e) => {
            ui::error(&format!(
                "there was an error retrieving results for {}: {}",
                query, e
            ));
            return Ok(());
        }
    };

    for hit in &results.hits {
        ui::line(&format!(
            "{}:\t{}\t({})",
            hit.project_id, hit.title, hit.project_type
        ));
        ui::line(&format!("\tAuthor:\t{}", hit.author));
        ui::line(&format!("\t\t{}", hit.description));
        if !hit.versions.contains(game_version) {
            ui::warning(&format!(
                "version {} not compatible with this mod",
                game_version
            ));
        }
        ui::blank();
    }

    Ok(())
}

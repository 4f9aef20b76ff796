// List command: show registered mods with their installed versions

use crate::config::ConfigStore;
use crate::modrinth::api;
use crate::ui;

/// Print one line per registered mod. Title and description are cached
/// in the mod record the first time they are fetched, so later calls
/// stay off the network.
pub async fn list(verbose: bool) -> anyhow::Result<()> {
    let mut store = ConfigStore::initialize()?;
    let mod_ids: Vec<String> = store.doc.mods.keys().cloned().collect();

    for mod_id in &mod_ids {
        let entry = store.doc.mods.get(mod_id).cloned().unwrap_or_default();

        let installed = entry
            .current_version
            .clone()
            .unwrap_or_else(|| "not installed?".to_string());
        let fname = entry
            .fname
            .clone()
            .unwrap_or_else(|| "does not seem to be installed".to_string());

        let (title, description) = match (entry.title, entry.description) {
            (Some(title), Some(description)) => (title, description),
            _ => {
                let project = match api::fetch_project(mod_id).await {
                    Ok(project) => project,
                    Err(e) => {
                        ui::error(&format!("could not fetch metadata for {}: {}", mod_id, e));
                        continue;
                    }
                };
                store.reload()?;
                let entry = store.doc.mods.entry(mod_id.clone()).or_default();
                entry.title = Some(project.title.clone());
                entry.description = Some(project.description.clone());
                store.save()?;
                (project.title, project.description)
            }
        };

        ui::line(&format!("{}\t{}\t{}", mod_id, title, installed));
        if verbose {
            ui::line(&format!("\t{}", fname));
            ui::line(&format!("\t{}", description));
            ui::blank();
        }
    }

    Ok(())
}

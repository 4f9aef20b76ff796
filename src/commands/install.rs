// Install command: register mods by project ID, then run an update pass

use crate::commands::update;
use crate::config::{ConfigStore, ModEntry};
use crate::error::FetchError;
use crate::modrinth::api;
use crate::modrinth::version_matcher::{GameTarget, matches_game_version};
use crate::ui;

/// Register each requested mod ID and, if anything was added (or a
/// registered mod's file went missing), run the update flow. With
/// `force`, compatibility is not checked and the update pass installs
/// the newest release of the requested ids.
pub async fn install(mod_ids: Vec<String>, force: bool) -> anyhow::Result<()> {
    let mut store = ConfigStore::initialize()?;
    let target = GameTarget::parse(&store.doc.current_game_ver)?;
    let dest_dir = store.dest_dir();

    let mut changed = false;

    for mod_id in &mod_ids {
        ui::action(&format!("checking status for mod {}", mod_id));

        // Already registered: never re-add the key. If its file is gone
        // from the install directory, let the update pass reinstall it.
        if let Some(entry) = store.doc.mods.get(mod_id) {
            let present = entry
                .fname
                .as_ref()
                .is_some_and(|f| dest_dir.join(f).exists());
            if present {
                ui::dim(&format!("{} is already in the list", mod_id));
            } else {
                changed = true;
            }
            continue;
        }

        let versions = match api::fetch_versions(mod_id).await {
            Ok(versions) => versions,
            Err(FetchError::NotFound) => {
                ui::error(&format!("{} could not be found; double check the ID", mod_id));
                continue;
            }
            Err(e) => {
                ui::error(&format!(
                    "there was an error retrieving information for {}: {}",
                    mod_id, e
                ));
                continue;
            }
        };

        let compatible = versions.iter().any(|v| matches_game_version(v, &target));
        if compatible || force {
            store.reload()?;
            ui::action(&format!("adding {} to the installation queue...", mod_id));
            store.doc.mods.insert(mod_id.clone(), ModEntry::default());
            store.save()?;
            changed = true;
        } else {
            ui::warning(&format!(
                "{} does not match the game version: {}",
                mod_id, target.full
            ));
        }
    }

    if changed {
        let force_ids = if force { mod_ids } else { Vec::new() };
        update::update(&force_ids).await?;
    }

    Ok(())
}

// Update command: re-resolve every registered mod and replace stale files

use crate::config::ConfigStore;
use crate::modrinth::api;
use crate::modrinth::http;
use crate::modrinth::version_matcher::{GameTarget, select};
use crate::ui;
use log::debug;
use std::fs;

/// Bring every registered mod up to the release matching the configured
/// game version. `force_ids` bypass the compatibility filter and take
/// the newest release unconditionally.
///
/// Per-mod failures (fetch, download, write) are reported and skipped;
/// the rest of the registry still gets processed. The config is
/// persisted after each successful install so partial progress survives
/// a crash.
pub async fn update(force_ids: &[String]) -> anyhow::Result<()> {
    let mut store = ConfigStore::initialize()?;
    let target = GameTarget::parse(&store.doc.current_game_ver)?;
    let dest_dir = store.dest_dir();
    let mod_ids: Vec<String> = store.doc.mods.keys().cloned().collect();

    ui::header("Updating mods...");
    for mod_id in &mod_ids {
        let versions = match api::fetch_versions(mod_id).await {
            Ok(versions) => versions,
            Err(e) => {
                ui::error(&format!(
                    "retrieving {} failed: {}",
                    api::versions_url(mod_id),
                    e
                ));
                Vec::new()
            }
        };

        let forced = force_ids.contains(mod_id);
        let Some(version) = select(&versions, &target, forced) else {
            let title = store
                .doc
                .mods
                .get(mod_id)
                .and_then(|m| m.title.as_deref())
                .unwrap_or("?");
            ui::warning(&format!(
                "{} ({}) has no release for game version {} on an accepted loader",
                mod_id, title, target.full
            ));
            continue;
        };

        if forced {
            ui::action(&format!("{}: forcing installation", mod_id));
        }

        let Some(file) = version.files.first() else {
            ui::warning(&format!(
                "{}: release {} has no files",
                mod_id, version.version_number
            ));
            continue;
        };

        let old_file = store.doc.mods.get(mod_id).and_then(|m| m.fname.clone());

        // Same file name and still on disk: nothing to do
        if old_file.as_deref() == Some(file.filename.as_str())
            && dest_dir.join(&file.filename).exists()
        {
            ui::success(&format!(
                "{}: {} is up to date: {}",
                mod_id, file.filename, version.version_number
            ));
            continue;
        }

        // Download the new file before touching the old one
        let pb = ui::spinner(&format!("downloading {}...", file.filename));
        let data = match http::download(&file.url).await {
            Ok(data) => data,
            Err(e) => {
                ui::finish_spinner_error(&pb, &format!("{}\n  {}", e, file.url));
                continue;
            }
        };
        if let Err(e) = fs::write(dest_dir.join(&file.filename), &data) {
            ui::finish_spinner_error(&pb, &format!("writing {} failed: {}", file.filename, e));
            continue;
        }
        ui::finish_spinner_success(
            &pb,
            &format!("installed {} ({})", file.filename, version.version_number),
        );

        // Superseded file goes away only after the new one landed
        if let Some(old) = &old_file {
            let old_path = dest_dir.join(old);
            if old != &file.filename && old_path.exists() {
                ui::dim(&format!("removing {}...", old));
                if let Err(e) = fs::remove_file(&old_path) {
                    ui::warning(&format!("could not remove {}: {}", old, e));
                }
            }
        }

        // Pick up any external edits made since the last mod, then
        // record only this mod's new state.
        store.reload()?;
        let entry = store.doc.mods.entry(mod_id.clone()).or_default();
        entry.current_version = Some(version.version_number.clone());
        entry.fname = Some(file.filename.clone());
        store.save()?;
        debug!("recorded {} -> {}", mod_id, version.version_number);
    }

    Ok(())
}

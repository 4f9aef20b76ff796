// Config store for the persisted mod registry
//
// The JSON document on disk is the single source of truth for both the
// desired state (game version, install directory, registered mod IDs)
// and the last-installed state (version number and file name per mod).
// It is read at the start of every command and rewritten in full after
// every mutation. There is no locking and no atomic rename; concurrent
// invocations against the same file can race, which is accepted for a
// single-user local tool.

use crate::constants;
use crate::ui;
use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub current_game_ver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_dir: Option<String>,
    #[serde(default)]
    pub mods: BTreeMap<String, ModEntry>,
}

/// Per-mod state. Every field is optional; a record with no fields is a
/// registered mod that has not been installed yet and serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Config {
    /// Template written on first run. Local-mode configs omit `dest_dir`
    /// and default to the working directory at install time.
    pub fn template(local: bool) -> Self {
        let mut mods = BTreeMap::new();
        mods.insert(constants::EXAMPLE_MOD_ID.to_string(), ModEntry::default());
        Self {
            current_game_ver: constants::DEFAULT_GAME_VERSION.to_string(),
            dest_dir: (!local).then(|| constants::PLACEHOLDER_DEST_DIR.to_string()),
            mods,
        }
    }
}

pub struct ConfigStore {
    dir: PathBuf,
    path: PathBuf,
    local: bool,
    pub doc: Config,
}

impl ConfigStore {
    /// Resolve where the config lives: a `mods.json` in the working
    /// directory wins (local mode), otherwise the per-user config
    /// directory of the platform.
    fn resolve_paths() -> Result<(PathBuf, PathBuf, bool)> {
        let local_file = Path::new(constants::LOCAL_CONFIG_FILE);
        if local_file.is_file() {
            return Ok((PathBuf::from("."), local_file.to_path_buf(), true));
        }

        let base = dirs::config_dir()
            .ok_or_else(|| anyhow!("platform {} is not supported", std::env::consts::OS))?;
        let dir = base.join(constants::CONFIG_DIR_NAME);
        let file = dir.join(constants::CONFIG_FILE_NAME);
        Ok((dir, file, false))
    }

    /// Load and validate the config, bootstrapping a template on first
    /// run. Any failure here is fatal to the whole command; nothing has
    /// touched the network yet.
    pub fn initialize() -> Result<Self> {
        let (dir, path, local) = Self::resolve_paths()?;
        debug!("config file: {}", path.display());

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let store = Self {
                    dir,
                    path,
                    local,
                    doc: Config::template(local),
                };
                store.save()?;
                ui::warning("config file did not exist");
                return Err(store.edit_me_error());
            }
            Err(e) => {
                return Err(anyhow!(e).context(format!("could not read {}", path.display())));
            }
        };

        let doc = match parse_document(&text).with_context(|| {
            format!("something was wrong with your config: {}", path.display())
        })? {
            Some(doc) => doc,
            None => {
                let store = Self {
                    dir,
                    path,
                    local,
                    doc: Config::template(local),
                };
                store.save()?;
                ui::warning("config was empty");
                return Err(store.edit_me_error());
            }
        };

        let store = Self {
            dir,
            path,
            local,
            doc,
        };

        match &store.doc.dest_dir {
            Some(dest) if !Path::new(dest).exists() => {
                ui::warning(&format!("your dest_dir: {} does not seem to exist", dest));
                return Err(store.edit_me_error());
            }
            None if !store.local => {
                bail!(
                    "something was wrong with your config: {} (missing \"dest_dir\")",
                    store.path.display()
                );
            }
            _ => {}
        }

        // Rewrite once so a hand-edited file comes out normalized.
        store.save()?;
        Ok(store)
    }

    /// Re-read the document from disk, keeping the resolved paths.
    /// Called before each mutation inside multi-mod commands so edits
    /// made between mods are not clobbered wholesale.
    pub fn reload(&mut self) -> Result<()> {
        let text = fs::read_to_string(&self.path)?;
        if let Some(doc) = parse_document(&text)? {
            self.doc = doc;
        }
        Ok(())
    }

    /// Serialize the in-memory document back to disk. Full overwrite;
    /// a crash mid-write can corrupt the file (known risk).
    pub fn save(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let text = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, text)
            .with_context(|| format!("could not write {}", self.path.display()))?;
        Ok(())
    }

    /// Create a fresh local-mode config in the working directory.
    /// The caller is expected to have checked for an existing file.
    pub fn create_local(game_version: &str) -> Result<Self> {
        let mut doc = Config::template(true);
        doc.current_game_ver = game_version.to_string();
        let store = Self {
            dir: PathBuf::from("."),
            path: PathBuf::from(constants::LOCAL_CONFIG_FILE),
            local: true,
            doc,
        };
        store.save()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Install directory; local-mode configs without `dest_dir` install
    /// into the working directory.
    pub fn dest_dir(&self) -> PathBuf {
        PathBuf::from(self.doc.dest_dir.as_deref().unwrap_or("."))
    }

    fn edit_me_error(&self) -> anyhow::Error {
        anyhow!(
            "edit {} and configure \"dest_dir\" to use",
            self.path.display()
        )
    }
}

pub fn local_config_exists() -> bool {
    Path::new(constants::LOCAL_CONFIG_FILE).is_file()
}

/// Parse the raw document. `Ok(None)` means the file held an empty JSON
/// object, which triggers the same bootstrap path as a missing file.
fn parse_document(text: &str) -> Result<Option<Config>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.as_object().is_some_and(|o| o.is_empty()) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_empty_object() {
        assert!(parse_document("{}").unwrap().is_none());
    }

    #[test]
    fn test_parse_document_full() {
        let text = r#"{
          "current_game_ver": "1.17.1",
          "dest_dir": "/tmp/mods",
          "mods": {
            "P7dR8mSH": {},
            "AANobbMI": {
              "current_version": "mc1.17.1-0.57.0",
              "fname": "sodium-fabric-mc1.17.1-0.57.0.jar"
            }
          }
        }"#;
        let doc = parse_document(text).unwrap().unwrap();
        assert_eq!(doc.current_game_ver, "1.17.1");
        assert_eq!(doc.dest_dir.as_deref(), Some("/tmp/mods"));
        assert_eq!(doc.mods.len(), 2);
        assert!(doc.mods["P7dR8mSH"].fname.is_none());
        assert_eq!(
            doc.mods["AANobbMI"].fname.as_deref(),
            Some("sodium-fabric-mc1.17.1-0.57.0.jar")
        );
    }

    #[test]
    fn test_parse_document_missing_game_version_is_error() {
        assert!(parse_document(r#"{"dest_dir": "/tmp"}"#).is_err());
    }

    #[test]
    fn test_parse_document_invalid_json_is_error() {
        assert!(parse_document("not json").is_err());
    }

    #[test]
    fn test_template_platform_mode_has_placeholder_dest() {
        let doc = Config::template(false);
        assert_eq!(doc.current_game_ver, constants::DEFAULT_GAME_VERSION);
        assert_eq!(
            doc.dest_dir.as_deref(),
            Some(constants::PLACEHOLDER_DEST_DIR)
        );
        assert!(doc.mods.contains_key(constants::EXAMPLE_MOD_ID));
    }

    #[test]
    fn test_template_local_mode_omits_dest_dir() {
        let doc = Config::template(true);
        assert!(doc.dest_dir.is_none());
        let text = serde_json::to_string(&doc).unwrap();
        assert!(!text.contains("dest_dir"));
    }

    #[test]
    fn test_fresh_entry_serializes_empty() {
        let text = serde_json::to_string(&ModEntry::default()).unwrap();
        assert_eq!(text, "{}");
    }
}

// Initlocal command: create a mods.json in the working directory

use crate::config::{self, ConfigStore};
use crate::constants;
use crate::ui;
use anyhow::{Context, bail};
use std::io::{self, Write};

/// Interactively create a local-mode config. Refuses to overwrite an
/// existing one.
pub fn init_local() -> anyhow::Result<()> {
    if config::local_config_exists() {
        ui::error(&format!("{} exists", constants::LOCAL_CONFIG_FILE));
        bail!("{} already present, not overwriting", constants::LOCAL_CONFIG_FILE);
    }

    let game_version = prompt("input game version: ")?;
    ConfigStore::create_local(&game_version)?;
    ui::success(&format!(
        "created {} for game version {}",
        constants::LOCAL_CONFIG_FILE,
        game_version
    ));
    Ok(())
}

#[allow(clippy::print_stdout)]
fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("could not read game version from stdin")?;
    Ok(line.trim().to_string())
}

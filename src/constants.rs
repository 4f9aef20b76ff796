// Constants module for shared string constants

pub const API_BASE: &str = "https://api.modrinth.com/v2";

pub const CONFIG_DIR_NAME: &str = "modrinthUpdater";
pub const CONFIG_FILE_NAME: &str = "data.json";
pub const LOCAL_CONFIG_FILE: &str = "mods.json";

pub const DEFAULT_GAME_VERSION: &str = "1.17.1";
pub const PLACEHOLDER_DEST_DIR: &str = "your_install_destination";

/// Fabric API, used as the example entry in a freshly created config.
pub const EXAMPLE_MOD_ID: &str = "P7dR8mSH";

/// Loader tags a release must carry to be considered compatible.
pub const ACCEPTED_LOADERS: &[&str] = &["fabric", "quilt"];

/// The CDN rejects downloads without a browser-like User-Agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

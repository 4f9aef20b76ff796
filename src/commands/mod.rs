// Subcommand implementations

pub mod init_local;
pub mod install;
pub mod list;
pub mod search;
pub mod update;

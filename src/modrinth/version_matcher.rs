// Version matching against the configured game version

use crate::constants;
use crate::modrinth::api::Version;
use anyhow::{Result, bail};

/// The configured game version plus its `major.minor` short form.
/// Release listings often tag only "1.17" for a "1.17.1" install, so
/// both spellings count as compatible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTarget {
    pub full: String,
    pub short: String,
}

impl GameTarget {
    /// Extract the leading `digits.digits` short form. A version string
    /// that does not start that way is a configuration error and must
    /// fail before any version endpoint is contacted.
    pub fn parse(version: &str) -> Result<Self> {
        let bytes = version.as_bytes();

        let mut i = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == 0 || bytes.get(i) != Some(&b'.') {
            bail!(
                "game version {} is unexpected; it should look something like 1.12.3",
                version
            );
        }
        i += 1;

        let minor_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == minor_start {
            bail!(
                "game version {} is unexpected; it should look something like 1.12.3",
                version
            );
        }

        Ok(Self {
            full: version.to_string(),
            short: version[..i].to_string(),
        })
    }
}

/// Loader-unaware compatibility test, used when registering a mod.
pub fn matches_game_version(record: &Version, target: &GameTarget) -> bool {
    record
        .game_versions
        .iter()
        .any(|v| v == &target.full || v == &target.short)
}

fn has_accepted_loader(record: &Version) -> bool {
    record
        .loaders
        .iter()
        .any(|l| constants::ACCEPTED_LOADERS.contains(&l.as_str()))
}

/// Pick the release to install: the first record, in the order the API
/// returned (assumed newest first), that matches the game version and
/// is built for an accepted loader. First match wins; no scoring.
pub fn select_compatible<'a>(versions: &'a [Version], target: &GameTarget) -> Option<&'a Version> {
    versions
        .iter()
        .find(|v| matches_game_version(v, target) && has_accepted_loader(v))
}

/// Selection entry point for the update flow. A forced mod takes the
/// newest release (index 0) with both the game-version and loader
/// filters bypassed.
pub fn select<'a>(
    versions: &'a [Version],
    target: &GameTarget,
    forced: bool,
) -> Option<&'a Version> {
    if forced {
        versions.first()
    } else {
        select_compatible(versions, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modrinth::api::VersionFile;

    fn record(version: &str, game_versions: &[&str], loaders: &[&str]) -> Version {
        Version {
            version_number: version.to_string(),
            game_versions: game_versions.iter().map(|s| s.to_string()).collect(),
            loaders: loaders.iter().map(|s| s.to_string()).collect(),
            files: vec![VersionFile {
                url: format!("https://cdn.modrinth.com/{}.jar", version),
                filename: format!("{}.jar", version),
            }],
        }
    }

    #[test]
    fn test_parse_target() {
        let t = GameTarget::parse("1.17.1").unwrap();
        assert_eq!(t.full, "1.17.1");
        assert_eq!(t.short, "1.17");

        let t = GameTarget::parse("1.20").unwrap();
        assert_eq!(t.short, "1.20");
    }

    #[test]
    fn test_parse_target_rejects_malformed() {
        assert!(GameTarget::parse("snapshot-23w01a").is_err());
        assert!(GameTarget::parse("1.").is_err());
        assert!(GameTarget::parse(".17").is_err());
        assert!(GameTarget::parse("").is_err());
    }

    #[test]
    fn test_matches_full_and_short_form() {
        let t = GameTarget::parse("1.17.1").unwrap();
        assert!(matches_game_version(&record("a", &["1.17.1"], &[]), &t));
        assert!(matches_game_version(&record("b", &["1.17"], &[]), &t));
        assert!(!matches_game_version(&record("c", &["1.16.5"], &[]), &t));
        // Substrings are not prefixes: "1.17.2" tags do not match "1.17.1"
        assert!(!matches_game_version(&record("d", &["1.17.2"], &[]), &t));
    }

    #[test]
    fn test_select_requires_accepted_loader() {
        let t = GameTarget::parse("1.17.1").unwrap();
        let versions = vec![
            record("2.0", &["1.17.1"], &["forge"]),
            record("1.9", &["1.17.1"], &["fabric"]),
        ];
        assert_eq!(
            select_compatible(&versions, &t).unwrap().version_number,
            "1.9"
        );
    }

    #[test]
    fn test_select_takes_first_match_in_api_order() {
        let t = GameTarget::parse("1.17.1").unwrap();
        let versions = vec![
            record("3.0", &["1.18"], &["fabric"]),
            record("2.0", &["1.17"], &["quilt"]),
            record("1.0", &["1.17.1"], &["fabric"]),
        ];
        assert_eq!(
            select_compatible(&versions, &t).unwrap().version_number,
            "2.0"
        );
    }

    #[test]
    fn test_select_none_when_incompatible() {
        let t = GameTarget::parse("1.17.1").unwrap();
        let versions = vec![record("3.0", &["1.18"], &["fabric"])];
        assert!(select_compatible(&versions, &t).is_none());
        assert!(select_compatible(&[], &t).is_none());
    }

    #[test]
    fn test_forced_select_takes_index_zero_unconditionally() {
        let t = GameTarget::parse("1.17.1").unwrap();
        // Newest release is incompatible on both axes; forced still wins
        let versions = vec![
            record("3.0", &["1.19"], &["forge"]),
            record("1.0", &["1.17.1"], &["fabric"]),
        ];
        assert_eq!(select(&versions, &t, true).unwrap().version_number, "3.0");
        // Unforced falls back to the compatibility filter
        assert_eq!(select(&versions, &t, false).unwrap().version_number, "1.0");
    }

    #[test]
    fn test_forced_select_with_no_releases_is_none() {
        let t = GameTarget::parse("1.17.1").unwrap();
        assert!(select(&[], &t, true).is_none());
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chatroom/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::clock::ClockFormat;
use crate::core::state::{DEFAULT_DISPLAY_NAME, DEFAULT_ROOM_TITLE};
use crate::core::user::{self, User};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub display_name: Option<String>,
    pub room_title: Option<String>,
    pub clock: Option<ClockFormat>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserEntry {
    pub name: String,
    /// Defaults to online when omitted.
    pub online: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub display_name: String,
    pub room_title: String,
    pub clock: ClockFormat,
    pub users: Vec<User>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub display_name: Option<&'a str>,
    pub room_title: Option<&'a str>,
    pub clock: Option<ClockFormat>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.chatroom/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chatroom").join("config.toml"))
}

/// Load config from `~/.chatroom/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChatConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChatConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChatConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ChatConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ChatConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ChatConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Chatroom Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# display_name = "You"        # Or set CHATROOM_NAME / pass --name
# room_title = "Chat Room"
# clock = "24h"               # "24h" or "12h"; defaults to your locale's convention

# Roster shown in the sidebar. Without any entries, a sample roster is used.
# [[users]]
# name = "Alice"
# online = true

# [[users]]
# name = "Bob"
# online = false
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ChatConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with(config, cli, non_empty_env)
}

/// `resolve` with the environment lookup passed in.
fn resolve_with(
    config: &ChatConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Display name: CLI → env → config → default
    let display_name = cli
        .display_name
        .map(str::to_string)
        .or_else(|| env("CHATROOM_NAME"))
        .or_else(|| config.general.display_name.clone())
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    let room_title = cli
        .room_title
        .map(str::to_string)
        .or_else(|| config.general.room_title.clone())
        .unwrap_or_else(|| DEFAULT_ROOM_TITLE.to_string());

    // Clock: CLI → env → config → locale
    let clock = cli
        .clock
        .or_else(|| {
            env("CHATROOM_CLOCK").and_then(|value| match value.parse() {
                Ok(clock) => Some(clock),
                Err(e) => {
                    warn!("Ignoring CHATROOM_CLOCK: {}", e);
                    None
                }
            })
        })
        .or(config.general.clock)
        .unwrap_or_else(ClockFormat::from_env);

    ResolvedConfig {
        display_name,
        room_title,
        clock,
        users: resolve_users(&config.users),
    }
}

/// Turn config entries into roster users, numbering ids in file order.
/// An empty list falls back to the sample roster.
fn resolve_users(entries: &[UserEntry]) -> Vec<User> {
    if entries.is_empty() {
        return user::default_roster();
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| User::new((i + 1).to_string(), entry.name.clone(), entry.online.unwrap_or(true)))
        .collect()
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ChatConfig::default();
        assert!(config.users.is_empty());
        assert!(config.general.display_name.is_none());
    }

    #[test]
    fn test_resolve_cli_values_win() {
        let config = ChatConfig {
            general: GeneralConfig {
                display_name: Some("From File".to_string()),
                room_title: Some("File Room".to_string()),
                clock: Some(ClockFormat::TwentyFourHour),
            },
            ..Default::default()
        };
        let resolved = resolve_with(
            &config,
            &CliOverrides {
                display_name: Some("Dana"),
                room_title: Some("Standup"),
                clock: Some(ClockFormat::TwelveHour),
            },
            |_| None,
        );
        assert_eq!(resolved.display_name, "Dana");
        assert_eq!(resolved.room_title, "Standup");
        assert_eq!(resolved.clock, ClockFormat::TwelveHour);
    }

    fn file_config() -> ChatConfig {
        ChatConfig {
            general: GeneralConfig {
                display_name: Some("From File".to_string()),
                room_title: Some("File Room".to_string()),
                clock: Some(ClockFormat::TwentyFourHour),
            },
            ..Default::default()
        }
    }

    fn env_of(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_resolve_env_beats_file() {
        let resolved = resolve_with(
            &file_config(),
            &CliOverrides::default(),
            env_of(&[("CHATROOM_NAME", "Env Name"), ("CHATROOM_CLOCK", "12h")]),
        );
        assert_eq!(resolved.display_name, "Env Name");
        assert_eq!(resolved.clock, ClockFormat::TwelveHour);
        assert_eq!(resolved.room_title, "File Room");
    }

    #[test]
    fn test_resolve_cli_beats_env() {
        let resolved = resolve_with(
            &file_config(),
            &CliOverrides {
                display_name: Some("Dana"),
                clock: Some(ClockFormat::TwentyFourHour),
                ..Default::default()
            },
            env_of(&[("CHATROOM_NAME", "Env Name"), ("CHATROOM_CLOCK", "12h")]),
        );
        assert_eq!(resolved.display_name, "Dana");
        assert_eq!(resolved.clock, ClockFormat::TwentyFourHour);
    }

    #[test]
    fn test_resolve_bad_env_clock_falls_back_to_file() {
        let resolved = resolve_with(
            &file_config(),
            &CliOverrides::default(),
            env_of(&[("CHATROOM_CLOCK", "noon")]),
        );
        assert_eq!(resolved.clock, ClockFormat::TwentyFourHour);
        assert_eq!(resolved.display_name, "From File");
    }

    #[test]
    fn test_resolve_defaults_without_file_or_env() {
        let resolved = resolve_with(&ChatConfig::default(), &CliOverrides::default(), |_| None);
        assert_eq!(resolved.display_name, DEFAULT_DISPLAY_NAME);
        assert_eq!(resolved.room_title, DEFAULT_ROOM_TITLE);
    }

    #[test]
    fn test_resolve_empty_roster_uses_sample() {
        let resolved = resolve_with(&ChatConfig::default(), &CliOverrides::default(), |_| None);
        assert_eq!(resolved.users, user::default_roster());
    }

    #[test]
    fn test_resolve_numbers_configured_users() {
        let config = ChatConfig {
            users: vec![
                UserEntry { name: "Eve".to_string(), online: Some(false) },
                UserEntry { name: "Frank".to_string(), online: None },
            ],
            ..Default::default()
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), |_| None);
        assert_eq!(
            resolved.users,
            vec![User::new("1", "Eve", false), User::new("2", "Frank", true)]
        );
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
display_name = "Dana"
room_title = "Standup"
clock = "12h"

[[users]]
name = "Alice"
online = true

[[users]]
name = "Bob"
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.display_name.as_deref(), Some("Dana"));
        assert_eq!(config.general.room_title.as_deref(), Some("Standup"));
        assert_eq!(config.general.clock, Some(ClockFormat::TwelveHour));
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[1].online, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
room_title = "Lobby"
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.room_title.as_deref(), Some("Lobby"));
        assert!(config.general.display_name.is_none());
        assert!(config.general.clock.is_none());
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_bad_clock_value_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("chatroom-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general]\nclock = \"noon\"\n").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("chatroom-missing-{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_default_template_is_valid_toml() {
        let dir = std::env::temp_dir().join(format!("chatroom-template-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");
        generate_default_config(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.users.is_empty());
        assert!(config.general.display_name.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}

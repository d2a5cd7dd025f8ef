//! Configuration file persistence for criticmd
//!
//! This module handles loading and saving the settings file in the
//! platform-specific config directory, with graceful fallback to defaults
//! on a missing or corrupted file.
//!
//! It also hosts the single "set and apply" operation for the deletion
//! toggle: mutating `showDeletion` and persisting it happen in one step,
//! and the `--deletion-display` CSS value is always derived from the
//! current settings at render time, so no separate "apply" call exists to
//! fall out of sync.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "criticmd";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Backup configuration file name (used during atomic writes)
const CONFIG_BACKUP_NAME: &str = "config.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\criticmd\`
/// - **macOS**: `~/Library/Application Support/criticmd/`
/// - **Linux**: `~/.config/criticmd/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be
/// determined (e.g., if the HOME environment variable is not set).
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Ensure the configuration directory exists, creating it if necessary.
fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;

    if !config_dir.exists() {
        debug!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(&config_dir).map_err(|e| Error::ConfigSave {
            path: config_dir.clone(),
            source: Box::new(e),
        })?;
    }

    Ok(config_dir)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from the default config file location.
///
/// # Behavior
///
/// 1. If the config file exists and is valid JSON, load it (missing keys
///    merge with defaults)
/// 2. If the config file doesn't exist or is empty, return default settings
/// 3. If the config file is corrupted, log a warning and return defaults
pub fn load_config() -> Settings {
    load_config_internal()
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Internal implementation of config loading.
fn load_config_internal() -> Result<Settings> {
    let config_path = get_config_file_path()?;

    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    debug!("Loading config from: {}", config_path.display());

    let contents = fs::read_to_string(&config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    // Handle empty file
    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            config_path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Configuration loaded successfully from {}",
        config_path.display()
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save settings to the default config file location.
///
/// This function performs an atomic write by:
/// 1. Writing to a temporary backup file
/// 2. Replacing the original file with the backup
///
/// # Errors
///
/// - `Error::ConfigDirNotFound`: Config directory cannot be determined
/// - `Error::ConfigSave`: Failed to write the config file
pub fn save_config(settings: &Settings) -> Result<()> {
    let config_dir = ensure_config_dir()?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let backup_path = config_dir.join(CONFIG_BACKUP_NAME);

    debug!("Saving config to: {}", config_path.display());

    // Serialize to pretty JSON
    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    // Write to backup file first (atomic write pattern)
    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    // Replace original with backup
    fs::rename(&backup_path, &config_path).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    info!(
        "Configuration saved successfully to {}",
        config_path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Deletion Toggle (set and apply)
// ─────────────────────────────────────────────────────────────────────────────

/// Set `show_deletion` and persist it in one operation.
pub fn set_show_deletion(settings: &mut Settings, value: bool) -> Result<()> {
    settings.show_deletion = value;
    save_config(settings)
}

/// Flip `show_deletion`, persist it, and return the resulting value of the
/// `--deletion-display` CSS custom property.
pub fn toggle_show_deletion(settings: &mut Settings) -> Result<&'static str> {
    let value = !settings.show_deletion;
    set_show_deletion(settings, value)?;
    Ok(settings.deletion_display())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a test environment with a temporary config directory.
    struct TestEnv {
        _temp_dir: TempDir,
        config_file: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let config_dir = temp_dir.path().join(APP_NAME);
            let config_file = config_dir.join(CONFIG_FILE_NAME);
            fs::create_dir_all(&config_dir).expect("Failed to create config dir");
            Self {
                _temp_dir: temp_dir,
                config_file,
            }
        }

        fn write_config(&self, content: &str) {
            fs::write(&self.config_file, content).expect("Failed to write config");
        }

        fn read_config(&self) -> String {
            fs::read_to_string(&self.config_file).expect("Failed to read config")
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Platform directory tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_get_config_dir_returns_path() {
        let result = get_config_dir();
        assert!(result.is_ok());
        assert!(result.unwrap().to_string_lossy().contains(APP_NAME));
    }

    #[test]
    fn test_get_config_file_path() {
        let result = get_config_file_path();
        assert!(result.is_ok());
        assert!(result
            .unwrap()
            .to_string_lossy()
            .contains(CONFIG_FILE_NAME));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load tests with temp directory
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_valid_config() {
        let env = TestEnv::new();
        let settings = Settings {
            show_deletion: false,
            theme: Theme::Dark,
            ..Settings::default()
        };
        env.write_config(&serde_json::to_string_pretty(&settings).unwrap());

        let contents = env.read_config();
        let loaded: Settings = serde_json::from_str(&contents).unwrap();

        assert!(!loaded.show_deletion);
        assert_eq!(loaded.theme, Theme::Dark);
    }

    #[test]
    fn test_load_partial_config_uses_defaults_for_missing() {
        let env = TestEnv::new();
        env.write_config(r#"{"theme": "dark"}"#);

        let contents = env.read_config();
        let settings: Settings = serde_json::from_str(&contents).unwrap();

        assert_eq!(settings.theme, Theme::Dark);
        // Missing showDeletion defaults to true
        assert!(settings.show_deletion);
    }

    #[test]
    fn test_load_corrupted_config_returns_error() {
        let env = TestEnv::new();
        env.write_config("{ invalid json }");

        let contents = env.read_config();
        let result: std::result::Result<Settings, _> = serde_json::from_str(&contents);
        assert!(result.is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save tests with temp directory
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_and_load_roundtrip() {
        let env = TestEnv::new();
        let original = Settings {
            show_deletion: false,
            theme: Theme::Dark,
            open_after_export: true,
        };

        let json = serde_json::to_string_pretty(&original).unwrap();
        fs::write(&env.config_file, &json).unwrap();

        let loaded: Settings = serde_json::from_str(&env.read_config()).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_saved_config_uses_camel_case_key() {
        let env = TestEnv::new();
        let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
        fs::write(&env.config_file, &json).unwrap();

        let contents = env.read_config();
        assert!(contents.contains("\"showDeletion\": true"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toggle semantics tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_flips_flag_in_memory() {
        // The toggle mutates before persisting; persistence failure would
        // surface as an error, but the in-memory semantics are what the
        // render path consumes.
        let mut settings = Settings::default();
        assert!(settings.show_deletion);

        settings.show_deletion = !settings.show_deletion;
        assert_eq!(settings.deletion_display(), "none");

        settings.show_deletion = !settings.show_deletion;
        assert_eq!(settings.deletion_display(), "inline-block");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Integration tests (use actual config directory)
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_config_graceful_fallback() {
        // The public API always returns valid settings, even if the file
        // doesn't exist or cannot be read
        let settings = load_config();
        let _ = settings.deletion_display();
    }

    #[test]
    fn test_constants() {
        assert_eq!(APP_NAME, "criticmd");
        assert_eq!(CONFIG_FILE_NAME, "config.json");
    }
}

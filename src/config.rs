//! Settings store for color overrides.
//!
//! Persists the chosen variant and per-slot color values in TOML with
//! platform-specific directory resolution. Stored values are plain strings;
//! everything read back out passes through the sanitizer before it can
//! reach the stylesheet generator.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ColorScheme, HexColor, SlotKey, Variant};

/// Application settings.
///
/// # File Location
///
/// - Linux: `~/.config/AdminColorManager/config.toml`
/// - macOS: `~/Library/Application Support/AdminColorManager/config.toml`
/// - Windows: `%APPDATA%\AdminColorManager\config.toml`
///
/// An empty string value is the explicit "unset" marker, mirroring a
/// cleared form field. Unknown slot keys in the file are a parse error;
/// a stored value that no longer passes sanitization is dropped at read
/// time rather than failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Which chrome surfaces are themed
    #[serde(default)]
    pub variant: Variant,
    /// Stored color values, keyed by slot
    #[serde(default)]
    pub colors: BTreeMap<SlotKey, String>,
}

impl Config {
    /// Creates a new Config with default values (no overrides).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("AdminColorManager");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads settings from the default location.
    ///
    /// Returns default settings if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads settings from an explicit file path.
    ///
    /// A missing file yields default settings; unreadable or unparsable
    /// content is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves settings to the default location using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves settings to an explicit file path using atomic write.
    ///
    /// Uses temp file + rename so the file is never left half-written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Returns the stored string for a slot ("" when unset).
    #[must_use]
    pub fn stored_value(&self, slot: SlotKey) -> &str {
        self.colors.get(&slot).map_or("", String::as_str)
    }

    /// Stores a sanitized value for a slot.
    ///
    /// `None` stores the empty string, the explicit unset marker a cleared
    /// or rejected submission leaves behind.
    pub fn store(&mut self, slot: SlotKey, value: Option<&HexColor>) {
        let stored = value.map_or_else(String::new, |color| color.as_str().to_string());
        self.colors.insert(slot, stored);
    }

    /// Builds the validated scheme from the stored values.
    ///
    /// This is the only path from storage into the generator: every value
    /// is re-sanitized here, and anything that fails is dropped to unset
    /// with a warning log.
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_raw(self.colors.iter().map(|(slot, raw)| (*slot, raw.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new_has_no_overrides() {
        let config = Config::new();
        assert_eq!(config.variant, Variant::AdminBarMenu);
        assert!(config.colors.is_empty());
        assert!(config.scheme().is_empty());
        assert_eq!(config.stored_value(SlotKey::MenuBackground), "");
    }

    #[test]
    fn test_store_and_stored_value() {
        let mut config = Config::new();

        let color = HexColor::parse("#0073aa").unwrap();
        config.store(SlotKey::MenuHoverBackground, Some(&color));
        assert_eq!(config.stored_value(SlotKey::MenuHoverBackground), "#0073aa");

        config.store(SlotKey::MenuHoverBackground, None);
        assert_eq!(config.stored_value(SlotKey::MenuHoverBackground), "");
        // The unset marker is stored, not removed.
        assert!(config.colors.contains_key(&SlotKey::MenuHoverBackground));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.variant = Variant::Menu;
        config.store(
            SlotKey::MenuBackground,
            Some(&HexColor::parse("#23282d").unwrap()),
        );
        config.store(SlotKey::MenuText, None);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.stored_value(SlotKey::MenuBackground), "#23282d");
        assert_eq!(loaded.stored_value(SlotKey::MenuText), "");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_load_from_rejects_unknown_slot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[colors]\nsidebar-glow = \"#123456\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_from_rejects_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "variant = [broken\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_scheme_drops_tampered_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[colors]\nmenu-background = \"#23282d\"\nmenu-text = \"totally-bogus\"\n",
        )
        .unwrap();

        // The file loads; the bogus value is dropped at scheme build time.
        let config = Config::load_from(&path).unwrap();
        let scheme = config.scheme();
        assert_eq!(scheme.len(), 1);
        assert!(scheme.get(SlotKey::MenuText).is_none());
        assert_eq!(
            scheme.get(SlotKey::MenuBackground).unwrap().as_str(),
            "#23282d"
        );
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        Config::new().save_to(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}

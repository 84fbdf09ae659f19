//! Catalog path resolution (settings file + CLI override).
//!
//! The settings file is `~/.config/ludex/settings.toml`; the CLI `--data`
//! override always wins so scripts can point at any catalog export.

use std::io;
use std::path::{Path, PathBuf};

/// Catalog file used when nothing is configured.
pub const DEFAULT_DATA_FILE: &str = "steam_games_trimmed.csv";

/// Canonical path to the settings file: `~/.config/ludex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ludex").join("settings.toml")
}

/// Resolve the catalog CSV path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.data_file` in `settings.toml`
/// 3. [`DEFAULT_DATA_FILE`] in the working directory
pub fn resolve_data_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_data_path() {
        return p;
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Read `catalog.data_file` from `settings.toml`, if set.
pub fn load_data_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let file = doc.get("catalog")?.get("data_file")?.as_str()?;
    if file.is_empty() {
        None
    } else {
        Some(PathBuf::from(file))
    }
}

/// Save (or clear) the catalog path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are
/// preserved. Returns the settings file path.
pub fn save_data_path(path: Option<&Path>) -> io::Result<PathBuf> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [catalog] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;

    match path {
        Some(p) => {
            catalog_table.insert(
                "data_file".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            catalog_table.remove("data_file");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(settings)
}

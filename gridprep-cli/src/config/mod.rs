//! Job settings: rename mapping and zone groups
//!
//! Settings load from a TOML file given with `--settings`, else from
//! `<config dir>/gridprep/settings.toml` if present, else from the built-in
//! ERCOT defaults. A settings file may override either table independently.
//!
//! ```toml
//! [rename]
//! "TRE_WEST_wind_1" = "TRE_WEST_landbasedwind_class1_moderate_1"
//!
//! [[zones]]
//! name = "TRE_WEST"
//! members = ["FAR_WEST", "NORTH", "WEST"]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// One derived zone column and the load columns it aggregates
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneGroup {
    /// Output column name
    pub name: String,
    /// Input columns summed row-wise
    pub members: Vec<String>,
}

/// Settings shared by the rename, replace, and zone-derivation jobs
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Column rename mapping applied by `rename-columns`
    pub rename: HashMap<String, String>,
    /// Zone aggregation groups used by `derive-zones`
    pub zones: Vec<ZoneGroup>,
}

impl Settings {
    /// Load settings from `path`, the default location, or the built-in
    /// defaults, in that order
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    log::debug!("No settings file, using built-in defaults");
                    return Ok(Settings::default());
                }
            },
        };
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The rename mapping's target names, sorted; the replace job's default
    /// column list
    pub fn renamed_columns(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rename.values().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let rename = [
            ("TRE_WEST_wind_1", "TRE_WEST_landbasedwind_class1_moderate_1"),
            ("TRE_WEST_wind_2", "TRE_WEST_landbasedwind_class1_moderate_2"),
            ("TRE_WEST_wind_3", "TRE_WEST_landbasedwind_class1_moderate_3"),
            ("TRE_wind_4", "TRE_landbasedwind_class1_moderate_4"),
            ("TRE_wind_5", "TRE_landbasedwind_class1_moderate_5"),
            ("TRE_wind_6", "TRE_landbasedwind_class1_moderate_6"),
            ("TRE_WEST_solar_pv_7", "TRE_WEST_utilitypv_class1_moderate_1"),
            ("TRE_WEST_solar_pv_8", "TRE_WEST_utilitypv_class1_moderate_2"),
            ("TRE_WEST_solar_pv_9", "TRE_WEST_utilitypv_class1_moderate_3"),
            ("TRE_solar_pv_10", "TRE_utilitypv_class1_moderate_4"),
            ("TRE_solar_pv_11", "TRE_utilitypv_class1_moderate_5"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

        let zones = vec![
            ZoneGroup {
                name: "TRE_WEST".to_string(),
                members: ["FAR_WEST", "NORTH", "WEST"]
                    .map(String::from)
                    .to_vec(),
            },
            ZoneGroup {
                name: "TRE".to_string(),
                members: ["COAST", "EAST", "NORTH_C", "SOUTHERN", "SOUTH_C"]
                    .map(String::from)
                    .to_vec(),
            },
        ];

        Settings { rename, zones }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridprep").join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_cover_both_tables() {
        let settings = Settings::default();
        assert_eq!(settings.rename.len(), 11);
        assert_eq!(settings.zones.len(), 2);
        assert_eq!(
            settings.rename.get("TRE_WEST_wind_1").map(String::as_str),
            Some("TRE_WEST_landbasedwind_class1_moderate_1")
        );
        assert_eq!(settings.zones[0].name, "TRE_WEST");
    }

    #[test]
    fn test_partial_file_keeps_default_for_missing_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[[zones]]\nname = \"HOUSTON\"\nmembers = [\"COAST\"]\n",
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.zones.len(), 1);
        assert_eq!(settings.zones[0].name, "HOUSTON");
        assert_eq!(settings.rename, Settings::default().rename);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "unknown = 1\n").unwrap();
        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn test_renamed_columns_sorted() {
        let names = Settings::default().renamed_columns();
        assert_eq!(names.len(), 11);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

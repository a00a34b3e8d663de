use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strip::{FolkGroup, FolkName};
use crate::{map, navbar, starfield};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StarsConfig {
    pub count: usize,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: starfield::STAR_COUNT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom_step: f64,
    pub max_scale: f64,
}

impl MapConfig {
    pub fn zoom_rule(&self) -> map::ZoomRule {
        map::ZoomRule {
            step: self.zoom_step,
            max_scale: self.max_scale,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom_step: map::ZOOM_STEP,
            max_scale: map::MAX_SCALE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub reveal_delay_ms: u64,
}

impl NavbarConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: navbar::REVEAL_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DebounceConfig {
    pub timeline_ms: u64,
    pub strip_ms: u64,
}

impl DebounceConfig {
    pub fn timeline(&self) -> Duration {
        Duration::from_millis(self.timeline_ms)
    }

    pub fn strip(&self) -> Duration {
        Duration::from_millis(self.strip_ms)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            timeline_ms: 120,
            strip_ms: 150,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FolkEntry {
    pub group: FolkGroup,
    pub name: FolkName,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StripConfig {
    pub folk: Vec<FolkEntry>,
}

impl StripConfig {
    pub fn roster(&self, group: FolkGroup) -> impl Iterator<Item = &FolkEntry> {
        self.folk.iter().filter(move |f| f.group == group)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub stars: StarsConfig,
    pub map: MapConfig,
    pub navbar: NavbarConfig,
    pub debounce: DebounceConfig,
    pub strip: StripConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "aelther", "aelther").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<SiteConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("AELTHER"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> SiteConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to built-in config: {}", e);
            SiteConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> SiteConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let cfg = parse("");
        assert_eq!(cfg.stars.count, starfield::STAR_COUNT);
        assert_eq!(cfg.map.max_scale, map::MAX_SCALE);
        assert_eq!(cfg.map.zoom_rule(), map::ZoomRule::default());
        assert_eq!(cfg.navbar.reveal_delay(), navbar::REVEAL_DELAY);
        assert_eq!(cfg.debounce.timeline(), Duration::from_millis(120));
        assert_eq!(cfg.debounce.strip(), Duration::from_millis(150));
        assert!(cfg.strip.folk.is_empty());
    }

    #[test]
    fn shipped_default_config_parses() {
        let cfg = parse(DEFAULT_CONFIG);
        assert_eq!(cfg.stars.count, 200);
        assert_eq!(cfg.strip.roster(FolkGroup::Awakened).count(), 10);
        assert_eq!(cfg.strip.roster(FolkGroup::Watchers).count(), 6);
    }

    #[test]
    fn folk_group_deserialization() {
        let cases = vec![
            ("\"awakened\"", FolkGroup::Awakened),
            ("\"Awakened\"", FolkGroup::Awakened),
            ("\"AWAKENED\"", FolkGroup::Awakened),
            ("\"watcher\"", FolkGroup::Watchers),
            ("\"Watchers\"", FolkGroup::Watchers),
        ];

        for (json, expected) in cases {
            let deserialized: FolkGroup = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }
}

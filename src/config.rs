use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;
use crate::mapper::GeoPosition;
use crate::render::MarkerColor;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid observer coordinates: {0:?}")]
    Coordinates(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub observer: ObserverConfig,
    pub assets: AssetsConfig,
    pub canvas: CanvasConfig,
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObserverConfig {
    #[serde(default = "default_observer_name")]
    pub name: String,
    #[serde(default = "default_observer_coordinates")]
    pub coordinates: String,
    #[serde(default)]
    pub color: MarkerColor,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            name: default_observer_name(),
            coordinates: default_observer_coordinates(),
            color: MarkerColor::default(),
        }
    }
}

fn default_observer_name() -> String {
    "Indianapolis".to_string()
}

fn default_observer_coordinates() -> String {
    "39.768403,-86.158068".to_string()
}

impl ObserverConfig {
    pub fn position(&self) -> Result<GeoPosition, ConfigError> {
        GeoPosition::from_coordinates(&self.coordinates)
            .ok_or_else(|| ConfigError::Coordinates(self.coordinates.clone()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_icon")]
    pub icon: PathBuf,
    #[serde(default = "default_map")]
    pub map: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            icon: default_icon(),
            map: default_map(),
        }
    }
}

fn default_icon() -> PathBuf {
    PathBuf::from("iss.gif")
}

fn default_map() -> PathBuf {
    PathBuf::from("map.gif")
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    720
}

fn default_height() -> u32 {
    360
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:0".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.observer.position()?;
        Ok(config)
    }
}

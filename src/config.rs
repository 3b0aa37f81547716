use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gradient::GradientRenderer;
use crate::state::ColorState;

/// Base directory: ~/.config/hsl-picker/
pub fn base_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("hsl-picker"))
}

pub fn settings_path() -> Option<PathBuf> {
    base_dir().map(|b| b.join("config.json"))
}

pub fn default_log_path() -> Option<PathBuf> {
    base_dir().map(|b| b.join("hsl-picker.log"))
}

/// Log verbosity, stored lowercase in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Color the picker opens with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Default for InitialColor {
    fn default() -> Self {
        Self {
            hue: ColorState::DEFAULT_HUE,
            saturation: ColorState::DEFAULT_SATURATION,
            lightness: ColorState::DEFAULT_LIGHTNESS,
        }
    }
}

/// Startup settings. Read once at launch; the picked color is never written
/// back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub initial: InitialColor,
    /// Gradient samples per channel unit.
    pub samples_per_unit: u32,
    /// Indicator outline width, in strip cells.
    pub indicator_width: f64,
    pub log_level: LogLevel,
    /// Where the TUI writes its log. Defaults to a file next to the settings.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let renderer = GradientRenderer::default();
        Self {
            initial: InitialColor::default(),
            samples_per_unit: renderer.samples_per_unit,
            indicator_width: renderer.indicator_width,
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn renderer(&self) -> GradientRenderer {
        GradientRenderer::new(self.samples_per_unit, self.indicator_width)
    }

    pub fn initial_state(&self) -> ColorState {
        ColorState::new(
            self.initial.hue,
            self.initial.saturation,
            self.initial.lightness,
        )
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_path)
    }
}

/// Load settings from the default location. A missing file gives defaults.
pub fn load_settings() -> Result<Settings> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Like [`load_settings_from`], but an unreadable or malformed file falls
/// back to defaults and the error is handed back for the caller to report.
pub fn load_settings_or_default_from(path: &Path) -> (Settings, Option<Error>) {
    match load_settings_from(path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    }
}

/// Write `settings` to `path`, creating parent directories.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a default settings file unless one already exists.
pub fn init_settings() -> Result<PathBuf> {
    let path = settings_path().ok_or(Error::NoConfigDir)?;
    if path.exists() {
        return Err(Error::AlreadyExists(path));
    }
    save_settings_to(&Settings::default(), &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hsl-picker-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn defaults_match_startup_color() {
        let s = Settings::default();
        assert_eq!(s.initial.hue, 40.0);
        assert_eq!(s.samples_per_unit, 10);
        assert_eq!(s.indicator_width, 6.0);
        assert_eq!(s.log_level, LogLevel::Warn);
        assert_eq!(s.initial_state(), ColorState::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let s: Settings =
            serde_json::from_str(r#"{ "initial": { "hue": 200 }, "log_level": "debug" }"#).unwrap();
        assert_eq!(s.initial.hue, 200.0);
        assert_eq!(s.initial.saturation, 50.0);
        assert_eq!(s.samples_per_unit, 10);
        assert_eq!(s.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_initial_is_normalized() {
        let s: Settings =
            serde_json::from_str(r#"{ "initial": { "hue": 370, "lightness": 140 } }"#).unwrap();
        let state = s.initial_state();
        assert_eq!(state.hue(), crate::state::hue_ceiling());
        assert_eq!(state.lightness(), 100.0);

        let s: Settings = serde_json::from_str(r#"{ "initial": { "hue": -20 } }"#).unwrap();
        assert_eq!(s.initial_state().hue(), 0.0);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_path("does-not-exist.json");
        assert_eq!(load_settings_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("saved.json");
        let mut s = Settings::default();
        s.samples_per_unit = 4;
        s.log_file = Some(PathBuf::from("/tmp/picker.log"));
        save_settings_to(&s, &path).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), s);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(Error::Json(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_can_fall_back_to_defaults() {
        let path = temp_path("broken-lenient.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ \"samples_per_unit\": ").unwrap();
        let (settings, err) = load_settings_or_default_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(matches!(err, Some(Error::Json(_))));

        fs::write(&path, r#"{ "samples_per_unit": 3 }"#).unwrap();
        let (settings, err) = load_settings_or_default_from(&path);
        assert_eq!(settings.samples_per_unit, 3);
        assert!(err.is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn renderer_guards_bad_values() {
        let mut s = Settings::default();
        s.samples_per_unit = 0;
        s.indicator_width = f64::NAN;
        let r = s.renderer();
        assert_eq!(r.samples_per_unit, 1);
        assert_eq!(r.indicator_width, 0.0);
    }
}

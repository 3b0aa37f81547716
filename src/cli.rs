use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{LogLevel, Settings};
use crate::state::Channel;

#[derive(Parser)]
#[command(
    name = "hsl-picker",
    version,
    about = "Pick a color by hue, saturation and lightness"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Starting hue in degrees (0-360)
    #[arg(long)]
    pub hue: Option<f64>,
    /// Starting saturation in percent (0-100)
    #[arg(long)]
    pub saturation: Option<f64>,
    /// Starting lightness in percent (0-100)
    #[arg(long)]
    pub lightness: Option<f64>,
    /// Channel the arrow keys adjust first (hue, sat, light)
    #[arg(long)]
    pub focus: Option<Channel>,
    /// Gradient samples per channel unit
    #[arg(long)]
    pub samples: Option<u32>,
    /// Log verbosity
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
    /// Write the log here instead of the default location
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line overrides on top of file settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(h) = self.hue {
            settings.initial.hue = h;
        }
        if let Some(s) = self.saturation {
            settings.initial.saturation = s;
        }
        if let Some(l) = self.lightness {
            settings.initial.lightness = l;
        }
        if let Some(n) = self.samples {
            settings.samples_per_unit = n;
        }
        if let Some(level) = self.log_level {
            settings.log_level = level;
        }
        if let Some(ref path) = self.log_file {
            settings.log_file = Some(path.clone());
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the hex, rgb and hsl forms of a color and exit
    #[command(allow_negative_numbers = true)]
    Convert {
        hue: f64,
        saturation: f64,
        lightness: f64,
        /// Opacity (0-1)
        #[arg(long, default_value_t = 1.0)]
        alpha: f64,
    },
    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Print the settings file location
    Path,
    /// Write a settings file with default values
    Init,
}

//! Configuration loading and discovery for `encoderize.toml`
//!
//! Every section is optional; a missing file means built-in defaults.
//!
//! ```toml
//! [output]
//! root = "renders"
//!
//! [palette.dark]
//! foreground = "#eeeeee"
//!
//! [encoders.binary_stripe]
//! bar_width = 10
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{Color, DotGrid, EncoderSet, Palette, Theme};

/// File name searched for during discovery.
pub const CONFIG_FILE: &str = "encoderize.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse encoderize.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Where output folders are created.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Parent directory of `output_<text>/`
    pub root: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Per-theme color overrides. Unset colors keep the theme's built-in value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverride {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub highlight: Option<Color>,
}

impl PaletteOverride {
    fn apply(&self, base: Palette) -> Palette {
        Palette {
            foreground: self.foreground.unwrap_or(base.foreground),
            background: self.background.unwrap_or(base.background),
            highlight: self.highlight.unwrap_or(base.highlight),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub light: PaletteOverride,
    pub dark: PaletteOverride,
}

/// Root of `encoderize.toml`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub palette: PaletteConfig,
    pub encoders: EncoderSet,
}

impl Config {
    /// The palette for a theme, with any configured overrides applied.
    pub fn palette(&self, theme: Theme) -> Palette {
        let overrides = match theme {
            Theme::Light => &self.palette.light,
            Theme::Dark => &self.palette.dark,
        };
        overrides.apply(theme.palette())
    }

    /// Check encoder geometry, returning one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut check = Checker::default();
        let e = &self.encoders;

        check.positive("binary_stripe.bar_width", e.binary_stripe.bar_width);
        check.positive("binary_stripe.bar_height", e.binary_stripe.bar_height);
        check.non_negative("binary_stripe.spacing", e.binary_stripe.spacing);

        check.positive("morse_code_band.dot_diameter", e.morse_code_band.dot_diameter);
        check.positive("morse_code_band.dash_width", e.morse_code_band.dash_width);
        check.positive("morse_code_band.height", e.morse_code_band.height);
        check.non_negative("morse_code_band.symbol_spacing", e.morse_code_band.symbol_spacing);
        check.non_negative("morse_code_band.letter_spacing", e.morse_code_band.letter_spacing);

        let circuit = &e.circuit_trace_silhouette;
        check.positive("circuit_trace_silhouette.pad_radius", circuit.pad_radius);
        check.positive("circuit_trace_silhouette.pad_spacing", circuit.pad_spacing);
        check.positive("circuit_trace_silhouette.trace_width", circuit.trace_width);

        let grid = &e.dot_grid_steganography;
        check.grid_side("dot_grid_steganography.rows", grid.rows);
        check.grid_side("dot_grid_steganography.cols", grid.cols);
        check.non_negative("dot_grid_steganography.spacing", grid.spacing);
        check.positive("dot_grid_steganography.dot_radius", grid.dot_radius);
        check.positive("dot_grid_steganography.highlight_radius", grid.highlight_radius);

        check.positive("semaphore_flags.icon_size", e.semaphore_flags.icon_size);
        check.non_negative("semaphore_flags.spacing", e.semaphore_flags.spacing);
        check.positive("semaphore_flags.ring_width", e.semaphore_flags.ring_width);

        check.positive("a1z26_stripe.font_size", e.a1z26_stripe.font_size);
        check.non_negative("a1z26_stripe.padding", e.a1z26_stripe.padding);
        if e.a1z26_stripe.font_family.trim().is_empty() {
            check.fail("a1z26_stripe.font_family must not be empty");
        }

        check.at_least_one("code128_barcode.module_width", e.code128_barcode.module_width as usize);
        check.at_least_one("code128_barcode.bar_height", e.code128_barcode.bar_height as usize);

        let wave = &e.waveform_stripe;
        check.positive("waveform_stripe.width", wave.width);
        check.positive("waveform_stripe.height", wave.height);
        check.at_least_one("waveform_stripe.samples_per_char", wave.samples_per_char);
        check.non_negative("waveform_stripe.margin", wave.margin);
        check.positive("waveform_stripe.stroke_width", wave.stroke_width);
        if wave.margin * 2.0 >= wave.height {
            check.fail("waveform_stripe.margin must be less than half the height");
        }

        check.positive("chevron_stripe.unit_width", e.chevron_stripe.unit_width);
        check.positive("chevron_stripe.unit_height", e.chevron_stripe.unit_height);
        check.non_negative("chevron_stripe.spacing", e.chevron_stripe.spacing);

        check.positive("braille_stripe.cell_size", e.braille_stripe.cell_size);
        check.positive("braille_stripe.dot_radius", e.braille_stripe.dot_radius);
        check.non_negative("braille_stripe.spacing", e.braille_stripe.spacing);

        check.errors
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<String>,
}

impl Checker {
    fn fail(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn positive(&mut self, name: &str, value: f32) {
        if !(value.is_finite() && value > 0.0) {
            self.fail(format!("{name} must be a positive number, got {value}"));
        }
    }

    fn non_negative(&mut self, name: &str, value: f32) {
        if !(value.is_finite() && value >= 0.0) {
            self.fail(format!("{name} must not be negative, got {value}"));
        }
    }

    fn at_least_one(&mut self, name: &str, value: usize) {
        if value == 0 {
            self.fail(format!("{name} must be at least 1"));
        }
    }

    fn grid_side(&mut self, name: &str, value: usize) {
        if !(1..=DotGrid::MAX_SIDE).contains(&value) {
            self.fail(format!(
                "{name} must be between 1 and {}, got {value}",
                DotGrid::MAX_SIDE
            ));
        }
    }
}

/// Find encoderize.toml by walking up from the current working directory,
/// falling back to the XDG config directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find encoderize.toml in XDG config directory.
///
/// Checks XDG_CONFIG_HOME/encoderize/encoderize.toml or ~/.config/encoderize/encoderize.toml
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("encoderize").join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Find encoderize.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an encoderize.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [find_config] to locate one. If no config file is found, returns the
/// default configuration.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => {
            tracing::debug!("no {CONFIG_FILE} found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(config)
}

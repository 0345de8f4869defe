//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treedraw/treedraw.toml`
//! 3. Local config: `<dir>/.treedraw.toml`
//! 4. Environment variables: `TREEDRAW_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::RenderRules;

/// Connector preset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `│  ` `├──` `└──`
    #[default]
    Unicode,
    /// `|  ` `|--` `` `-- ``
    Ascii,
    /// `| ` repeated per level, then `+ `
    Depth,
}

impl Style {
    pub fn rules(self) -> RenderRules {
        match self {
            Style::Unicode => RenderRules::unicode(),
            Style::Ascii => RenderRules::ascii(),
            Style::Depth => RenderRules::depth_only("| ", "+ "),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Unicode => "unicode",
            Style::Ascii => "ascii",
            Style::Depth => "depth",
        };
        f.write_str(name)
    }
}

impl FromStr for Style {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Style::Unicode),
            "ascii" => Ok(Style::Ascii),
            "depth" => Ok(Style::Depth),
            other => Err(ApplicationError::Config {
                message: format!("unknown style '{other}' (expected unicode, ascii or depth)"),
            }),
        }
    }
}

/// Effective configuration for treedraw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Connector preset
    pub style: Style,
    /// Width hint for node labels (None: unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
    /// Overrides for the preset's connector strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blank: Option<String>,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub style: Option<Style>,
    pub max_width: Option<usize>,
    pub vertical: Option<String>,
    pub continuous: Option<String>,
    pub last: Option<String>,
    pub blank: Option<String>,
}

/// Get the XDG config directory for treedraw.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treedraw").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treedraw.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".treedraw.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Resolve the preset and overrides into drawing rules.
    ///
    /// The depth style draws only `vertical` and `continuous`; `last` and
    /// `blank` are carried along but never drawn.
    pub fn rules(&self) -> RenderRules {
        if self.style == Style::Depth && (self.last.is_some() || self.blank.is_some()) {
            debug!("style 'depth' ignores the 'last' and 'blank' overrides");
        }
        let mut rules = self.style.rules();
        if let Some(vertical) = &self.vertical {
            rules.vertical = vertical.clone();
        }
        if let Some(continuous) = &self.continuous {
            rules.continuous = continuous.clone();
        }
        if let Some(last) = &self.last {
            rules.last = last.clone();
        }
        if let Some(blank) = &self.blank {
            rules.blank = blank.clone();
        }
        rules.with_max_width(self.max_width)
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            max_width: overlay.max_width.or(self.max_width),
            vertical: overlay.vertical.clone().or_else(|| self.vertical.clone()),
            continuous: overlay
                .continuous
                .clone()
                .or_else(|| self.continuous.clone()),
            last: overlay.last.clone().or_else(|| self.last.clone()),
            blank: overlay.blank.clone().or_else(|| self.blank.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.treedraw.toml`
    #[instrument(level = "debug")]
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
                debug!("applied global config {}", global_path.display());
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
                debug!("applied local config {}", local_path.display());
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current, Self::environment())
    }

    /// `TREEDRAW_MAX_WIDTH` maps to `max_width`.
    pub fn environment() -> Environment {
        Environment::with_prefix("TREEDRAW")
            .prefix_separator("_")
            .separator("__")
    }

    /// Apply environment variables as explicit overrides.
    pub fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("style") {
            settings.style = val.parse()?;
        }
        if let Ok(val) = config.get_string("max_width") {
            let width = val.trim().parse::<usize>().map_err(|e| ApplicationError::Config {
                message: format!("invalid max_width '{val}': {e}"),
            })?;
            settings.max_width = Some(width);
        }
        if let Ok(val) = config.get_string("vertical") {
            settings.vertical = Some(val);
        }
        if let Ok(val) = config.get_string("continuous") {
            settings.continuous = Some(val);
        }
        if let Ok(val) = config.get_string("last") {
            settings.last = Some(val);
        }
        if let Ok(val) = config.get_string("blank") {
            settings.blank = Some(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treedraw configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treedraw/treedraw.toml
#   Local:  <dir>/.treedraw.toml
#   Env:    TREEDRAW_* environment variables

# Connector preset: "unicode", "ascii" or "depth"
# style = "unicode"

# Truncate node labels so that prefix + label fit this many characters
# max_width = 80

# Override single connector strings of the preset.
# The "depth" style only draws vertical and continuous; last and blank are ignored there.
# vertical = "│  "
# continuous = "├──"
# last = "└──"
# blank = "   "
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

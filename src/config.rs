use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub html: HtmlConfig,
    pub template: TemplateConfig,
}

/// Class names used by the HTML emitter. An empty string drops the attribute.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HtmlConfig {
    pub wrapper_class: String,
    pub quote_class: String,
    pub code_class: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            wrapper_class: "wa-message".to_string(),
            quote_class: "wa-quote".to_string(),
            code_class: "wa-code".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateConfig {
    /// Character count after which card summaries are cut
    pub truncate_at: usize,
    /// Shown instead of a preview when the template is empty
    pub empty_preview: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            truncate_at: 120,
            empty_preview: "Your message preview will appear here...".to_string(),
        }
    }
}

impl Config {
    /// The defaults embedded from `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(Error::ReadConfig {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

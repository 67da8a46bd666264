use std::collections::HashMap;
use std::path::PathBuf;
use std::{fmt, fs, io};

use crate::log::DEFAULT_BUFFER_SIZE;

/// Section holding the logger keys.
pub const LOGGING_SECTION: &str = "Logging";

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: String,
        source: io::Error,
    },
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "Error reading file {path}: {source}"),
            Self::InvalidValue {
                section,
                key,
                value,
            } => write!(f, "invalid value for [{section}] {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// INI-style configuration: `key = value` pairs, optional `[Section]`
/// headers, `#` comments. Keys before the first header are globals.
#[derive(Debug)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    pub fn empty() -> Self {
        Self {
            globals: HashMap::new(),
            sections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    /// Parses `[section] key` as an unsigned integer, `None` when absent.
    pub fn get_usize(&self, section: &str, key: &str) -> Result<Option<usize>, ConfigError> {
        let Some(raw) = self.get_non_empty(section, key) else {
            return Ok(None);
        };
        raw.parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                section: section.to_owned(),
                key: key.to_owned(),
                value: raw.to_owned(),
            })
    }
}

/// Logger settings read from the `[Logging]` section.
///
/// ```text
/// [Logging]
/// # empty or missing: console
/// log_file = ~/logs/app.log
/// # bytes, missing: 1024
/// buffer_size = 4096
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_file: Option<PathBuf>,
    pub buffer_size: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl LoggerConfig {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let log_file = config
            .get_non_empty(LOGGING_SECTION, "log_file")
            .map(expand_path);
        let buffer_size = config
            .get_usize(LOGGING_SECTION, "buffer_size")?
            .unwrap_or(DEFAULT_BUFFER_SIZE);

        Ok(Self {
            log_file,
            buffer_size,
        })
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with("~") {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if path_str.starts_with("~/") || path_str.starts_with("~\\") {
                home_path.push(&path_str[2..]);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}

//! Configuration loading and parsing.
//!
//! `stenox.toml` is looked up in the working directory first, then in the
//! platform config dir, unless the binary passes an explicit path. Every
//! field has a default, so a missing file, an unreadable file and a file that
//! fails to parse all yield a usable `Config`; the last two are logged. Unknown
//! fields are ignored.
//!
//! ```toml
//! [window]
//! height = 20        # text rows; default: terminal rows minus panel rows
//! width = 80         # default: terminal columns
//!
//! [editor]
//! tab_width = 4
//!
//! [phoneme]
//! dictionary = "words.toml"
//! unmatched_prefix = "discard"   # or "literal"
//! panel_rows = 3               # status line + two input panel lines
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "stenox.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub width: Option<u16>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_width() -> usize {
        4
    }
}

/// What to do with a two-key prefix that names no phoneme.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPrefixPolicy {
    /// Drop the keys; the word in progress continues.
    #[default]
    Discard,
    /// Commit the word in progress, then insert the keys as plain text.
    Literal,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PhonemeConfig {
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    #[serde(default)]
    pub unmatched_prefix: UnmatchedPrefixPolicy,
    #[serde(default = "PhonemeConfig::default_panel_rows")]
    pub panel_rows: u16,
}

impl Default for PhonemeConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            unmatched_prefix: UnmatchedPrefixPolicy::default(),
            panel_rows: Self::default_panel_rows(),
        }
    }
}

impl PhonemeConfig {
    const fn default_panel_rows() -> u16 {
        3
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub phoneme: PhonemeConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File the settings came from; `None` when running on defaults.
    pub path: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("stenox").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            warn!(target: "config", file = %path.display(), error = %e, "config_unreadable");
            return Ok(Config::default());
        }
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", file = %path.display(), "config_loaded");
            Ok(Config {
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", file = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn tab_width(&self) -> usize {
        self.file.editor.tab_width
    }

    pub fn panel_rows(&self) -> u16 {
        self.file.phoneme.panel_rows
    }

    pub fn unmatched_prefix(&self) -> UnmatchedPrefixPolicy {
        self.file.phoneme.unmatched_prefix
    }

    /// Dictionary path; relative paths resolve against the config file's
    /// directory.
    pub fn dictionary_path(&self) -> Option<PathBuf> {
        let dict = self.file.phoneme.dictionary.as_ref()?;
        if dict.is_absolute() {
            return Some(dict.clone());
        }
        match self.path.as_ref().and_then(|p| p.parent()) {
            Some(dir) if !dir.as_os_str().is_empty() => Some(dir.join(dict)),
            _ => Some(dict.clone()),
        }
    }

    /// Text window `(height, width)` for a terminal of `columns` x `rows`.
    ///
    /// The panel rows are reserved below the window. A configured size larger
    /// than what fits is clamped; both dimensions are at least 1.
    pub fn viewport_for(&self, columns: u16, rows: u16) -> (usize, usize) {
        let avail_rows = rows.saturating_sub(self.panel_rows()).max(1);
        let avail_cols = columns.max(1);
        let height = self.file.window.height.unwrap_or(avail_rows).clamp(1, avail_rows);
        let width = self.file.window.width.unwrap_or(avail_cols).clamp(1, avail_cols);
        if self.file.window.height.is_some_and(|h| h != height)
            || self.file.window.width.is_some_and(|w| w != width)
        {
            info!(
                target: "config",
                requested_height = ?self.file.window.height,
                requested_width = ?self.file.window.width,
                height,
                width,
                columns,
                rows,
                panel_rows = self.panel_rows(),
                "window_clamped"
            );
        }
        (usize::from(height), usize::from(width))
    }
}

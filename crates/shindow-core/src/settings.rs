//! Persisted host-window placement and target rectangle.
//!
//! The file is a line-oriented list of `key = value` pairs with integer
//! values. Lines starting with `#` are comments. Saving rewrites known keys
//! in place and appends any that are missing, leaving everything else
//! untouched, so repeated saves produce byte-identical output.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rect::Rect;

/// File name used next to the executable when no path is given.
pub const DEFAULT_FILE_NAME: &str = "shindow.ini";

/// Errors raised while loading or saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{} is a directory", .0.display())]
    IsDirectory(PathBuf),
    #[error("unknown key in settings file: {0}")]
    UnknownKey(String),
    #[error("parse {key}: {source}")]
    InvalidValue { key: String, source: ParseIntError },
}

/// The eight persisted integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// True when no file existed and defaults were used.
    pub is_new: bool,

    pub settings_x: i32,
    pub settings_y: i32,
    pub settings_w: i32,
    pub settings_h: i32,

    pub target_x: i32,
    pub target_y: i32,
    pub target_w: i32,
    pub target_h: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_new: false,
            settings_x: 0,
            settings_y: 0,
            settings_w: 0,
            settings_h: 0,
            target_x: 0,
            target_y: 0,
            target_w: 1920,
            target_h: 1080,
        }
    }
}

/// A recognized settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    SettingsX,
    SettingsY,
    SettingsW,
    SettingsH,
    TargetX,
    TargetY,
    TargetW,
    TargetH,
}

impl Key {
    /// Canonical order used when appending missing keys.
    const ALL: [Key; 8] = [
        Key::SettingsX,
        Key::SettingsY,
        Key::SettingsW,
        Key::SettingsH,
        Key::TargetX,
        Key::TargetY,
        Key::TargetW,
        Key::TargetH,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::SettingsX => "settings_x",
            Self::SettingsY => "settings_y",
            Self::SettingsW => "settings_w",
            Self::SettingsH => "settings_h",
            Self::TargetX => "target_x",
            Self::TargetY => "target_y",
            Self::TargetW => "target_w",
            Self::TargetH => "target_h",
        }
    }

    /// Older files name the target rectangle after the game window.
    fn legacy_name(self) -> Option<&'static str> {
        match self {
            Self::TargetX => Some("eq_window_x"),
            Self::TargetY => Some("eq_window_y"),
            Self::TargetW => Some("eq_window_w"),
            Self::TargetH => Some("eq_window_h"),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name || k.legacy_name() == Some(name.as_str()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One line of a settings file, classified.
enum Line<'a> {
    /// Comment, blank line, or anything that is not a single `key = value`.
    Verbatim(&'a str),
    Pair { key: &'a str, value: &'a str },
}

fn classify(line: &str) -> Line<'_> {
    if line.trim_start().starts_with('#') {
        return Line::Verbatim(line);
    }
    let mut parts = line.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Line::Pair {
            key: key.trim(),
            value: value.trim(),
        },
        _ => Line::Verbatim(line),
    }
}

impl Settings {
    fn get(&self, key: Key) -> i32 {
        match key {
            Key::SettingsX => self.settings_x,
            Key::SettingsY => self.settings_y,
            Key::SettingsW => self.settings_w,
            Key::SettingsH => self.settings_h,
            Key::TargetX => self.target_x,
            Key::TargetY => self.target_y,
            Key::TargetW => self.target_w,
            Key::TargetH => self.target_h,
        }
    }

    fn set(&mut self, key: Key, value: i32) {
        let slot = match key {
            Key::SettingsX => &mut self.settings_x,
            Key::SettingsY => &mut self.settings_y,
            Key::SettingsW => &mut self.settings_w,
            Key::SettingsH => &mut self.settings_h,
            Key::TargetX => &mut self.target_x,
            Key::TargetY => &mut self.target_y,
            Key::TargetW => &mut self.target_w,
            Key::TargetH => &mut self.target_h,
        };
        *slot = value;
    }

    /// The last-applied target rectangle.
    pub fn target(&self) -> Rect {
        Rect::new(self.target_x, self.target_y, self.target_w, self.target_h)
    }

    pub fn set_target(&mut self, rect: &Rect) {
        self.target_x = rect.x;
        self.target_y = rect.y;
        self.target_w = rect.width;
        self.target_h = rect.height;
    }

    /// Position and size of the host window.
    pub fn window_rect(&self) -> Rect {
        Rect::new(
            self.settings_x,
            self.settings_y,
            self.settings_w,
            self.settings_h,
        )
    }

    pub fn set_window_rect(&mut self, rect: &Rect) {
        self.settings_x = rect.x;
        self.settings_y = rect.y;
        self.settings_w = rect.width;
        self.settings_h = rect.height;
    }

    /// Parses settings file contents.
    ///
    /// Keys absent from the file keep their default values. Keys are
    /// matched case-insensitively; an unrecognized key is an error.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        for line in content.lines() {
            let Line::Pair { key, value } = classify(line) else {
                continue;
            };
            let known = Key::from_name(key).ok_or_else(|| SettingsError::UnknownKey(key.into()))?;
            let parsed = value
                .parse::<i32>()
                .map_err(|source| SettingsError::InvalidValue {
                    key: key.to_ascii_lowercase(),
                    source,
                })?;
            settings.set(known, parsed);
        }
        Ok(settings)
    }

    /// Renders these settings over the previous file contents.
    ///
    /// Comments and non-pair lines are kept verbatim. The first occurrence
    /// of each known key is rewritten under its existing name; later
    /// duplicates are dropped. Missing keys are appended in canonical order.
    pub fn render(&self, existing: &str) -> String {
        let mut written = [false; Key::ALL.len()];
        let mut out = String::new();

        for line in existing.lines() {
            match classify(line) {
                Line::Verbatim(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                Line::Pair { key, value } => match Key::from_name(key) {
                    Some(known) if written[known.index()] => {}
                    Some(known) => {
                        written[known.index()] = true;
                        out.push_str(&format!("{key} = {}\n", self.get(known)));
                    }
                    None => out.push_str(&format!("{key} = {value}\n")),
                },
            }
        }

        for key in Key::ALL {
            if !written[key.index()] {
                out.push_str(&format!("{} = {}\n", key.name(), self.get(key)));
            }
        }

        out
    }

    /// Loads settings from `path`.
    ///
    /// A missing file is not an error: defaults are returned with
    /// [`Settings::is_new`] set.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if path.is_dir() {
            return Err(SettingsError::IsDirectory(path.to_path_buf()));
        }
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self {
                is_new: true,
                ..Self::default()
            }),
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Writes settings to `path`, preserving comments already in the file.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if path.is_dir() {
            return Err(SettingsError::IsDirectory(path.to_path_buf()));
        }
        let io_err = |source: io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        let existing = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(io_err(e)),
        };
        fs::write(path, self.render(&existing)).map_err(io_err)
    }
}

/// Returns the default settings path: `shindow.ini` next to the executable.
pub fn default_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(DEFAULT_FILE_NAME))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

//! Application state and the user-facing actions built on top of it.
//!
//! [`App`] owns everything a front end edits: the process list, the
//! selected process, the four target fields and the loaded settings. Every
//! action takes its inputs from this state and returns a single
//! [`AppError`] on failure, leaving the application usable.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::OsError;
use crate::process::ProcessEntry;
use crate::rect::Rect;
use crate::settings::{Settings, SettingsError};
use crate::toggle::{self, TogglePhase, ToggleError};
use crate::window::StyledWindow;
use crate::{log_error, log_info};

/// Host services the controller needs: process listing and window lookup.
pub trait Platform {
    type Window: StyledWindow;

    /// Lists running processes whose executable name contains `filter`.
    fn list_processes(&self, filter: &str) -> Result<Vec<ProcessEntry>, OsError>;

    /// Returns the first top-level window owned by `pid`.
    fn find_window_for_process(&self, pid: u32) -> Option<Self::Window>;
}

/// A failed user action.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no matching process is running")]
    NoProcessSelected,
    #[error("{0} matching processes are running, pick one by PID")]
    AmbiguousProcess(usize),
    #[error("failed to find window for process {0}")]
    NotFound(u32),
    #[error("{context}: {source}")]
    Platform {
        context: &'static str,
        source: OsError,
    },
    #[error(transparent)]
    Toggle(#[from] ToggleError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
}

/// The four editable target fields, kept as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFields {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
}

impl TargetFields {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            x: rect.x.to_string(),
            y: rect.y.to_string(),
            width: rect.width.to_string(),
            height: rect.height.to_string(),
        }
    }

    /// Parses the fields into a rectangle.
    ///
    /// Fails with [`ToggleError::InvalidRect`] naming the first bad field.
    /// Width and height must be positive.
    pub fn parse(&self) -> Result<Rect, ToggleError> {
        let field = |name: &str, text: &str| {
            text.trim()
                .parse::<i32>()
                .map_err(|e| ToggleError::InvalidRect(format!("{name}: {e}")))
        };
        let rect = Rect::new(
            field("x", &self.x)?,
            field("y", &self.y)?,
            field("w", &self.width)?,
            field("h", &self.height)?,
        );
        if rect.width <= 0 || rect.height <= 0 {
            return Err(ToggleError::InvalidRect(format!(
                "size must be positive, got {}x{}",
                rect.width, rect.height
            )));
        }
        if !rect.edges_in_range() {
            return Err(ToggleError::InvalidRect("rectangle overflows".into()));
        }
        Ok(rect)
    }
}

/// Application controller.
pub struct App<P: Platform> {
    platform: P,
    settings: Settings,
    settings_path: PathBuf,
    name_filter: String,
    processes: Vec<ProcessEntry>,
    selected: Option<u32>,
    /// Target rectangle as currently edited.
    pub target: TargetFields,
}

impl<P: Platform> App<P> {
    pub fn new(
        platform: P,
        settings: Settings,
        settings_path: PathBuf,
        name_filter: impl Into<String>,
    ) -> Self {
        let target = TargetFields::from_rect(&settings.target());
        Self {
            platform,
            settings,
            settings_path,
            name_filter: name_filter.into(),
            processes: Vec::new(),
            selected: None,
            target,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn processes(&self) -> &[ProcessEntry] {
        &self.processes
    }

    /// Re-reads the process list.
    ///
    /// A selection whose process has disappeared is cleared. When exactly
    /// one process matches it becomes the selection.
    pub fn refresh_processes(&mut self) -> Result<&[ProcessEntry], AppError> {
        self.processes = self
            .platform
            .list_processes(&self.name_filter)
            .map_err(|source| AppError::Platform {
                context: "list processes",
                source,
            })?;

        if let Some(pid) = self.selected
            && !self.processes.iter().any(|p| p.pid == pid)
        {
            self.selected = None;
        }
        if self.selected.is_none()
            && let [only] = self.processes.as_slice()
        {
            self.selected = Some(only.pid);
        }

        Ok(&self.processes)
    }

    /// Selects a process by PID. The PID need not be in the filtered list.
    pub fn select_pid(&mut self, pid: u32) {
        self.selected = Some(pid);
    }

    /// The selected PID, falling back to the only listed process.
    pub fn selected_pid(&self) -> Result<u32, AppError> {
        if let Some(pid) = self.selected {
            return Ok(pid);
        }
        match self.processes.as_slice() {
            [] => Err(AppError::NoProcessSelected),
            [only] => Ok(only.pid),
            many => Err(AppError::AmbiguousProcess(many.len())),
        }
    }

    /// Returns the first top-level window of any process.
    pub fn window_for(&self, pid: u32) -> Option<P::Window> {
        self.platform.find_window_for_process(pid)
    }

    /// Finds the top-level window of the selected process.
    pub fn resolve_window(&self) -> Result<P::Window, AppError> {
        let pid = self.selected_pid()?;
        self.window_for(pid).ok_or(AppError::NotFound(pid))
    }

    /// Parses the target fields.
    pub fn target_rect(&self) -> Result<Rect, AppError> {
        Ok(self.target.parse()?)
    }

    pub fn set_target(&mut self, rect: &Rect) {
        self.target = TargetFields::from_rect(rect);
    }

    /// Sets the target to the full bounds of the selected window's monitor.
    pub fn fill_monitor(&mut self) -> Result<Rect, AppError> {
        let window = self.resolve_window()?;
        let rect = window
            .monitor_bounds()
            .map_err(|source| AppError::Platform {
                context: "query monitor",
                source,
            })?;
        self.set_target(&rect);
        Ok(rect)
    }

    /// Sets the target to the selected window's current client area.
    pub fn match_window(&mut self) -> Result<Rect, AppError> {
        let window = self.resolve_window()?;
        let rect = window
            .client_bounds()
            .map_err(|source| AppError::Platform {
                context: "query window",
                source,
            })?;
        self.set_target(&rect);
        Ok(rect)
    }

    /// Makes the selected window borderless at the target rectangle.
    ///
    /// The target is validated before the window is touched.
    pub fn make_borderless(&mut self) -> Result<TogglePhase, AppError> {
        let target = self.target_rect()?;
        let window = self.resolve_window()?;
        let phase = toggle::make_borderless(&window, &target).inspect_err(|e| {
            log_error!("borderless failed after {:?}: {e}", e.phase_reached());
        })?;
        self.settings.set_target(&target);
        log_info!("window made borderless at {target}");
        Ok(phase)
    }

    /// Restores the selected window's decorations in place.
    pub fn restore_borders(&mut self) -> Result<TogglePhase, AppError> {
        let window = self.resolve_window()?;
        let phase = toggle::restore_borders(&window).inspect_err(|e| {
            log_error!("restore failed: {e}");
        })?;
        log_info!("window decorations restored");
        Ok(phase)
    }

    /// Copies the target fields into the settings and writes the file.
    pub fn save(&mut self) -> Result<(), AppError> {
        let target = self.target_rect()?;
        self.settings.set_target(&target);
        self.settings.save(&self.settings_path)?;
        self.settings.is_new = false;
        Ok(())
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

pub mod borderless;
pub mod init;
pub mod list;
pub mod restore;
pub mod target;

#[cfg(not(windows))]
mod unsupported;

use std::path::PathBuf;

use clap::Args;

use shindow_core::config::Config;
use shindow_core::settings::{self, Settings, SettingsError};
use shindow_core::{App, AppError};

/// Result type shared by every subcommand.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[cfg(windows)]
pub type HostPlatform = shindow_windows::Win32Platform;
#[cfg(not(windows))]
pub type HostPlatform = unsupported::UnsupportedPlatform;

/// Process selection shared by commands that act on a window.
#[derive(Args)]
pub struct ProcessArgs {
    /// PID of the game process (optional when exactly one matches)
    #[arg(long)]
    pub pid: Option<u32>,
}

/// Inputs every command starts from.
pub struct Context {
    pub settings_path: PathBuf,
    pub config: Config,
}

impl Context {
    pub fn new(settings_path: Option<PathBuf>, config: Config) -> Self {
        let settings_path = settings_path
            .or_else(settings::default_path)
            .unwrap_or_else(|| PathBuf::from(settings::DEFAULT_FILE_NAME));
        Self {
            settings_path,
            config,
        }
    }

    pub fn load_settings(&self) -> Result<Settings, SettingsError> {
        Settings::load(&self.settings_path)
    }

    /// Builds the controller with a fresh process list and the requested
    /// selection applied.
    pub fn app(&self, process: &ProcessArgs) -> Result<App<HostPlatform>, AppError> {
        #[cfg(windows)]
        shindow_windows::dpi::enable_dpi_awareness();

        let settings = self.load_settings()?;
        let mut app = App::new(
            HostPlatform::default(),
            settings,
            self.settings_path.clone(),
            self.config.process.name_filter.clone(),
        );
        app.refresh_processes()?;
        if let Some(pid) = process.pid {
            app.select_pid(pid);
        }
        Ok(app)
    }
}

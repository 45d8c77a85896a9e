pub mod app;
pub mod config;
pub mod error;
pub mod log;
pub mod process;
pub mod rect;
pub mod settings;
pub mod style;
pub mod toggle;
pub mod window;

#[cfg(test)]
mod testing;

pub use app::{App, AppError, Platform, TargetFields};
pub use error::OsError;
pub use process::ProcessEntry;
pub use rect::Rect;
pub use settings::{Settings, SettingsError};
pub use style::{ExtendedStyle, WindowStyle};
pub use toggle::{StyleMask, TogglePhase, ToggleError, set_borderless};
pub use window::StyledWindow;

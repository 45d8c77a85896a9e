//! Win32 implementation of the Shindow platform seams.
//!
//! Everything here talks to the OS through the `windows` crate and is only
//! compiled on Windows.
#![cfg(windows)]

/// Per-monitor DPI awareness.
pub mod dpi;

/// Top-level window lookup by owning process.
pub mod enumerate;

/// Conversion of Win32 errors into `OsError`.
pub mod error;

/// Monitor bounds queries.
pub mod monitor;

/// [`shindow_core::Platform`] implementation.
pub mod platform;

/// Process listing via Toolhelp snapshots.
pub mod process;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::find_window_for_process;
pub use platform::Win32Platform;
pub use window::Window;

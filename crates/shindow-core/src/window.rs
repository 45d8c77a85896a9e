use crate::error::OsError;
use crate::rect::Rect;
use crate::style::{ExtendedStyle, WindowStyle};

/// Platform-agnostic view of a top-level window whose decorations can be
/// changed.
///
/// Each platform crate (e.g. `shindow-windows`) provides its own
/// implementation. The window is borrowed, never owned: implementors are
/// thin handles that query the OS on every call.
pub trait StyledWindow {
    /// Returns whether the window is maximized (zoomed).
    fn is_zoomed(&self) -> bool;

    /// Reads the current style bits.
    fn style(&self) -> WindowStyle;

    /// Reads the current extended style bits.
    fn ex_style(&self) -> ExtendedStyle;

    /// Replaces the style bits.
    fn set_style(&self, style: WindowStyle) -> Result<(), OsError>;

    /// Replaces the extended style bits.
    fn set_ex_style(&self, ex_style: ExtendedStyle) -> Result<(), OsError>;

    /// Full bounds of the monitor the window is on, falling back to the
    /// primary monitor.
    fn monitor_bounds(&self) -> Result<Rect, OsError>;

    /// Outer bounding rectangle of the window, frame included.
    fn bounds(&self) -> Result<Rect, OsError>;

    /// Client area in screen coordinates.
    fn client_bounds(&self) -> Result<Rect, OsError>;

    /// Moves and resizes the window in one call, notifying it that its
    /// frame changed and leaving the z-order untouched.
    fn place(&self, rect: &Rect) -> Result<(), OsError>;

    /// Invalidates the window and its frame and repaints immediately.
    fn redraw(&self) -> Result<(), OsError>;
}

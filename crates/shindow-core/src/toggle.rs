//! Borderless / bordered transition for a single window.
//!
//! The transition is modelled as a small state machine so that a failure
//! partway through is distinguishable from full success: style bits may
//! already be applied when repositioning fails, and the caller can tell
//! which step was reached from [`ToggleError::phase_reached`].

use std::fmt;

use thiserror::Error;

use crate::error::OsError;
use crate::rect::Rect;
use crate::style::{
    ExtendedStyle, WindowStyle, compose_bordered_ex_style, compose_bordered_style,
    compose_borderless_ex_style, compose_borderless_style,
};
use crate::window::StyledWindow;
use crate::{log_debug, log_info, log_warn};

/// Which of the two style bitmasks an apply step was writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMask {
    Style,
    Extended,
}

impl fmt::Display for StyleMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style => f.write_str("window style"),
            Self::Extended => f.write_str("extended window style"),
        }
    }
}

/// The last step a transition completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TogglePhase {
    /// Nothing fully applied yet.
    StylePending,
    /// Both style bitmasks written.
    StyleApplied,
    /// Window moved and resized to the target.
    PositionApplied,
    /// Window repainted with its new decorations.
    Redrawn,
}

/// Why a toggle failed. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("window is maximized, please restore it first")]
    AlreadyMaximized,
    #[error("failed to apply {mask}: {source}")]
    StyleApplyFailed { mask: StyleMask, source: OsError },
    #[error("failed to position window: {0}")]
    PositionApplyFailed(OsError),
    #[error("failed to redraw window: {0}")]
    RedrawFailed(OsError),
    #[error("invalid target rectangle: {0}")]
    InvalidRect(String),
}

impl ToggleError {
    /// The last phase fully completed before this error.
    ///
    /// A `StyleApplyFailed` on the extended mask still reports
    /// `StylePending` even though the plain style bits were already written.
    pub fn phase_reached(&self) -> TogglePhase {
        match self {
            Self::AlreadyMaximized | Self::InvalidRect(_) | Self::StyleApplyFailed { .. } => {
                TogglePhase::StylePending
            }
            Self::PositionApplyFailed(_) => TogglePhase::StyleApplied,
            Self::RedrawFailed(_) => TogglePhase::PositionApplied,
        }
    }

    /// Returns true if the window was left partially modified.
    pub fn is_partial(&self) -> bool {
        match self {
            Self::StyleApplyFailed { mask, .. } => *mask == StyleMask::Extended,
            _ => self.phase_reached() > TogglePhase::StylePending,
        }
    }
}

/// Drives one window through the toggle phases in order.
pub struct Transition<'w, W: StyledWindow + ?Sized> {
    window: &'w W,
    phase: TogglePhase,
}

impl<'w, W: StyledWindow + ?Sized> Transition<'w, W> {
    /// Starts a transition, refusing maximized windows.
    ///
    /// Changing style bits on a zoomed window leaves it in a state that is
    /// hard to recover from, so the user must restore it first.
    pub fn begin(window: &'w W) -> Result<Self, ToggleError> {
        if window.is_zoomed() {
            return Err(ToggleError::AlreadyMaximized);
        }
        Ok(Self {
            window,
            phase: TogglePhase::StylePending,
        })
    }

    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    /// Rewrites both style bitmasks with `compose_style` / `compose_ex_style`.
    pub fn apply_styles(
        &mut self,
        compose_style: impl FnOnce(WindowStyle) -> WindowStyle,
        compose_ex_style: impl FnOnce(ExtendedStyle) -> ExtendedStyle,
    ) -> Result<(), ToggleError> {
        let current = self.window.style();
        let current_ex = self.window.ex_style();
        let style = compose_style(current);
        let ex_style = compose_ex_style(current_ex);

        log_debug!(
            "style {:#010x} -> {:#010x}, ex_style {:#010x} -> {:#010x}",
            current,
            style,
            current_ex,
            ex_style
        );

        self.window
            .set_style(style)
            .map_err(|source| ToggleError::StyleApplyFailed {
                mask: StyleMask::Style,
                source,
            })?;
        self.window
            .set_ex_style(ex_style)
            .map_err(|source| ToggleError::StyleApplyFailed {
                mask: StyleMask::Extended,
                source,
            })?;

        self.phase = TogglePhase::StyleApplied;
        Ok(())
    }

    /// Moves and resizes the window to exactly `target`.
    ///
    /// Monitor bounds are consulted only to warn about targets that spill
    /// off the current monitor; the caller's rectangle always wins so that
    /// spanning and non-primary placements work.
    pub fn apply_position(&mut self, target: &Rect) -> Result<(), ToggleError> {
        match self.window.monitor_bounds() {
            Ok(monitor) if !monitor.contains(target) => {
                log_warn!("target {target} extends beyond monitor {monitor}");
            }
            Ok(monitor) => log_debug!("target {target} within monitor {monitor}"),
            Err(e) => log_warn!("could not query monitor bounds: {e}"),
        }

        let baseline = self
            .window
            .bounds()
            .map_err(ToggleError::PositionApplyFailed)?;

        // Every edge is overridden from the target.
        let rect = Rect::new(target.x, target.y, target.width, target.height);
        log_info!("placing window: {baseline} -> {rect}");

        self.window
            .place(&rect)
            .map_err(ToggleError::PositionApplyFailed)?;

        self.phase = TogglePhase::PositionApplied;
        Ok(())
    }

    /// Forces an immediate repaint of the window and its frame.
    pub fn redraw(&mut self) -> Result<(), ToggleError> {
        self.window.redraw().map_err(ToggleError::RedrawFailed)?;
        self.phase = TogglePhase::Redrawn;
        Ok(())
    }
}

/// Switches `window` between borderless and bordered presentation.
///
/// Going borderless strips decorations and places the window at `target`.
/// Going bordered restores decorations and leaves the geometry alone;
/// `target` is ignored in that direction.
///
/// Returns the final phase reached: `Redrawn` for borderless,
/// `StyleApplied` for bordered. A borderless target whose far edges
/// overflow is rejected with `InvalidRect` before any style is changed.
pub fn set_borderless<W: StyledWindow + ?Sized>(
    window: &W,
    make_borderless: bool,
    target: &Rect,
) -> Result<TogglePhase, ToggleError> {
    let mut transition = Transition::begin(window)?;

    if !make_borderless {
        transition.apply_styles(compose_bordered_style, compose_bordered_ex_style)?;
        return Ok(transition.phase());
    }

    if !target.edges_in_range() {
        return Err(ToggleError::InvalidRect(format!(
            "{target} extends past the coordinate range"
        )));
    }
    transition.apply_styles(compose_borderless_style, compose_borderless_ex_style)?;
    transition.apply_position(target)?;
    transition.redraw()?;
    Ok(transition.phase())
}

/// Makes `window` borderless and places it at `target`.
pub fn make_borderless<W: StyledWindow + ?Sized>(
    window: &W,
    target: &Rect,
) -> Result<TogglePhase, ToggleError> {
    set_borderless(window, true, target)
}

/// Gives `window` its decorations back without moving it.
pub fn restore_borders<W: StyledWindow + ?Sized>(window: &W) -> Result<TogglePhase, ToggleError> {
    set_borderless(window, false, &Rect::default())
}

#[cfg(test)]
#[path = "toggle_tests.rs"]
mod tests;

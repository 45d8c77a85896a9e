//! Stand-in platform for hosts other than Windows.
//!
//! Keeps the command code identical across hosts; every platform call
//! fails with a clear message instead.

use shindow_core::{ExtendedStyle, OsError, Platform, ProcessEntry, Rect, StyledWindow, WindowStyle};

const MESSAGE: &str = "this command requires Windows";

#[derive(Debug, Default)]
pub struct UnsupportedPlatform;

/// A window that can never exist.
pub enum NoWindow {}

impl Platform for UnsupportedPlatform {
    type Window = NoWindow;

    fn list_processes(&self, _filter: &str) -> Result<Vec<ProcessEntry>, OsError> {
        Err(OsError::new(0, MESSAGE))
    }

    fn find_window_for_process(&self, _pid: u32) -> Option<NoWindow> {
        None
    }
}

impl StyledWindow for NoWindow {
    fn is_zoomed(&self) -> bool {
        match *self {}
    }

    fn style(&self) -> WindowStyle {
        match *self {}
    }

    fn ex_style(&self) -> ExtendedStyle {
        match *self {}
    }

    fn set_style(&self, _style: WindowStyle) -> Result<(), OsError> {
        match *self {}
    }

    fn set_ex_style(&self, _ex_style: ExtendedStyle) -> Result<(), OsError> {
        match *self {}
    }

    fn monitor_bounds(&self) -> Result<Rect, OsError> {
        match *self {}
    }

    fn bounds(&self) -> Result<Rect, OsError> {
        match *self {}
    }

    fn client_bounds(&self) -> Result<Rect, OsError> {
        match *self {}
    }

    fn place(&self, _rect: &Rect) -> Result<(), OsError> {
        match *self {}
    }

    fn redraw(&self) -> Result<(), OsError> {
        match *self {}
    }
}

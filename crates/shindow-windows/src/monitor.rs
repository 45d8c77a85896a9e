use std::mem;

use shindow_core::{OsError, Rect};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTOPRIMARY, MONITORINFO, MonitorFromWindow,
};

use crate::error::last_os_error;

/// Returns the full bounds of the monitor containing the given window.
///
/// Uses the primary monitor when the window is not on any monitor. These
/// are the monitor's full bounds, taskbar included, which is what a
/// borderless fullscreen window should cover.
pub fn bounds_for_window(hwnd: HWND) -> Result<Rect, OsError> {
    // SAFETY: MonitorFromWindow never fails with MONITOR_DEFAULTTOPRIMARY.
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTOPRIMARY) };
    bounds_for_monitor(monitor)
}

fn bounds_for_monitor(monitor: HMONITOR) -> Result<Rect, OsError> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct. cbSize is set
    // as the API requires.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if !success.as_bool() {
        return Err(last_os_error());
    }

    let rc = info.rcMonitor;
    Ok(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom))
}

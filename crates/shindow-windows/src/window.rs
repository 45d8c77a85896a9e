use shindow_core::{ExtendedStyle, OsError, Rect, StyledWindow, WindowStyle};

use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    ClientToScreen, RDW_FRAME, RDW_INVALIDATE, RDW_UPDATENOW, RedrawWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, GetClientRect, GetWindowLongPtrW, GetWindowRect,
    GetWindowThreadProcessId, IsZoomed, SWP_FRAMECHANGED, SWP_NOOWNERZORDER, SWP_NOZORDER,
    SetWindowLongPtrW, SetWindowPos, WINDOW_LONG_PTR_INDEX,
};

use crate::error::{clear_last_error, last_os_error, os_error, take_last_error};
use crate::monitor;

/// A top-level window on the Windows platform, wrapping a Win32 `HWND`.
///
/// The handle is borrowed from the owning process: this struct never
/// destroys the window and queries the OS on every call.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Returns the handle as a pointer-sized integer, for display.
    pub fn handle_value(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns the PID of the process that owns this window.
    pub fn pid(&self) -> u32 {
        let mut pid = 0u32;
        // SAFETY: GetWindowThreadProcessId writes the owning PID into `pid`,
        // which outlives the call.
        unsafe { GetWindowThreadProcessId(self.hwnd, Some(&mut pid as *mut u32)) };
        pid
    }

    fn long(&self, index: WINDOW_LONG_PTR_INDEX) -> u32 {
        // SAFETY: GetWindowLongPtrW reads a window attribute; an invalid
        // HWND yields 0.
        unsafe { GetWindowLongPtrW(self.hwnd, index) as u32 }
    }

    fn set_long(&self, index: WINDOW_LONG_PTR_INDEX, value: u32) -> Result<(), OsError> {
        // SetWindowLongPtrW returns the previous value, so 0 is ambiguous:
        // clear the last error first and only treat 0 as failure if the
        // call set one.
        clear_last_error();
        // SAFETY: SetWindowLongPtrW writes a window attribute of a window
        // we do not own; the system validates the handle.
        let previous = unsafe { SetWindowLongPtrW(self.hwnd, index, value as isize) };
        match take_last_error() {
            Some(err) if previous == 0 => Err(err),
            _ => Ok(()),
        }
    }
}

impl StyledWindow for Window {
    fn is_zoomed(&self) -> bool {
        // SAFETY: IsZoomed is a simple query that returns a BOOL.
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    fn style(&self) -> WindowStyle {
        WindowStyle(self.long(GWL_STYLE))
    }

    fn ex_style(&self) -> ExtendedStyle {
        ExtendedStyle(self.long(GWL_EXSTYLE))
    }

    fn set_style(&self, style: WindowStyle) -> Result<(), OsError> {
        self.set_long(GWL_STYLE, style.0)
    }

    fn set_ex_style(&self, ex_style: ExtendedStyle) -> Result<(), OsError> {
        self.set_long(GWL_EXSTYLE, ex_style.0)
    }

    fn monitor_bounds(&self) -> Result<Rect, OsError> {
        monitor::bounds_for_window(self.hwnd)
    }

    fn bounds(&self) -> Result<Rect, OsError> {
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect fills `rc`, which outlives the call.
        unsafe { GetWindowRect(self.hwnd, &mut rc) }.map_err(os_error)?;
        Ok(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom))
    }

    fn client_bounds(&self) -> Result<Rect, OsError> {
        let mut rc = RECT::default();
        // SAFETY: GetClientRect fills `rc` in client coordinates, whose
        // origin is always (0, 0).
        unsafe { GetClientRect(self.hwnd, &mut rc) }.map_err(os_error)?;

        let mut origin = POINT::default();
        // SAFETY: ClientToScreen converts `origin` in place.
        if !unsafe { ClientToScreen(self.hwnd, &mut origin) }.as_bool() {
            return Err(last_os_error());
        }

        Ok(Rect::new(
            origin.x,
            origin.y,
            rc.right - rc.left,
            rc.bottom - rc.top,
        ))
    }

    fn place(&self, rect: &Rect) -> Result<(), OsError> {
        // SWP_FRAMECHANGED sends WM_NCCALCSIZE so the window recomputes its
        // client area for the new style. SWP_NOZORDER and SWP_NOOWNERZORDER
        // keep the window where it is in the stacking order.
        let flags = SWP_FRAMECHANGED | SWP_NOOWNERZORDER | SWP_NOZORDER;

        shindow_core::log_debug!(
            "SetWindowPos 0x{:X}: {} flags={:#x}",
            self.handle_value(),
            rect,
            flags.0
        );

        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                flags,
            )
        }
        .map_err(os_error)
    }

    fn redraw(&self) -> Result<(), OsError> {
        // SAFETY: RedrawWindow invalidates the whole window including its
        // non-client frame and repaints before returning.
        let ok = unsafe {
            RedrawWindow(
                Some(self.hwnd),
                None,
                None,
                RDW_INVALIDATE | RDW_UPDATENOW | RDW_FRAME,
            )
        };
        if ok.as_bool() {
            Ok(())
        } else {
            Err(last_os_error())
        }
    }
}

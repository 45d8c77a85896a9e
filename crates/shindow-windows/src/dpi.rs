use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without it, Windows virtualizes coordinates against the primary
/// monitor's scale and a target rectangle typed in physical pixels lands
/// in the wrong place on scaled displays.
///
/// Call once at startup, before any window is queried or moved.
pub fn enable_dpi_awareness() {
    // SAFETY: Safe to call once at startup. Failure (e.g. awareness already
    // set by a manifest) is ignored.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}

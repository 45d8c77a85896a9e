use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::window::Window;

/// State shared with the `EnumWindows` callback.
struct Search {
    pid: u32,
    found: Option<Window>,
}

/// Returns the first top-level window owned by `pid`.
///
/// Windows are visited in the order `EnumWindows` reports them and the
/// scan stops at the first match. No other ordering or tie-break applies.
pub fn find_window_for_process(pid: u32) -> Option<Window> {
    let mut search = Search { pid, found: None };

    // SAFETY: EnumWindows calls our callback synchronously for each
    // top-level window. `search` outlives the call, so handing its address
    // over as LPARAM is sound. Stopping early makes EnumWindows report an
    // error, which carries no information here and is ignored.
    unsafe {
        let _ = EnumWindows(
            Some(match_pid_callback),
            LPARAM(&mut search as *mut Search as isize),
        );
    }

    if search.found.is_none() {
        shindow_core::log_debug!("no top-level window for pid {pid}");
    }
    search.found
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration, `FALSE` to stop.
unsafe extern "system" fn match_pid_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the pointer to `Search` set in find_window_for_process().
    let search = unsafe { &mut *(lparam.0 as *mut Search) };

    let window = Window::new(hwnd);
    if window.pid() == search.pid {
        search.found = Some(window);
        return BOOL(0); // FALSE — stop, first match wins
    }

    BOOL(1) // TRUE — continue enumerating
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pid_has_no_window() {
        // Windows PIDs are multiples of four, so this one never exists.
        assert!(find_window_for_process(u32::MAX).is_none());
    }
}

use shindow_core::OsError;
use windows::Win32::Foundation::{GetLastError, SetLastError, WIN32_ERROR};

/// Converts a `windows` crate error into the platform-agnostic [`OsError`],
/// keeping the system-provided message.
pub fn os_error(e: windows::core::Error) -> OsError {
    OsError::new(e.code().0, e.message())
}

/// Builds an [`OsError`] from the calling thread's last-error value.
pub fn last_os_error() -> OsError {
    // SAFETY: GetLastError only reads thread-local state.
    let code = unsafe { GetLastError() };
    os_error(windows::core::Error::from(code.to_hresult()))
}

/// Clears the thread's last-error value.
///
/// Needed before APIs such as `SetWindowLongPtrW` whose failure can only
/// be told apart from a legitimate zero return via `GetLastError`.
pub fn clear_last_error() {
    // SAFETY: SetLastError only writes thread-local state.
    unsafe { SetLastError(WIN32_ERROR(0)) };
}

/// Returns the last-error value as an [`OsError`] if one is set.
pub fn take_last_error() -> Option<OsError> {
    // SAFETY: GetLastError only reads thread-local state.
    let code = unsafe { GetLastError() };
    if code.0 == 0 {
        None
    } else {
        Some(os_error(windows::core::Error::from(code.to_hresult())))
    }
}

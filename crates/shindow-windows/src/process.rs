use std::mem;

use shindow_core::process::filter_processes;
use shindow_core::{OsError, ProcessEntry};
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
    TH32CS_SNAPPROCESS,
};

use crate::error::os_error;

/// Lists running processes whose executable name contains `filter`.
///
/// Takes a Toolhelp snapshot of the process table, so the result is a
/// consistent point-in-time view. Matching ignores ASCII case; an empty
/// filter returns every process.
pub fn list_processes(filter: &str) -> Result<Vec<ProcessEntry>, OsError> {
    // SAFETY: CreateToolhelp32Snapshot returns an owned handle that we
    // close below on every path.
    let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }.map_err(os_error)?;

    let entries = read_snapshot(snapshot);

    // SAFETY: `snapshot` is a valid handle we own and have not closed yet.
    unsafe {
        let _ = CloseHandle(snapshot);
    }

    Ok(filter_processes(entries, filter))
}

/// Walks every entry of a process snapshot.
fn read_snapshot(snapshot: HANDLE) -> Vec<ProcessEntry> {
    let mut entries = Vec::new();
    let mut entry = PROCESSENTRY32W {
        dwSize: mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };

    // SAFETY: Process32FirstW/NextW fill `entry`, whose dwSize is set as
    // the API requires. Both fail once the snapshot is exhausted.
    unsafe {
        if Process32FirstW(snapshot, &mut entry).is_err() {
            return entries;
        }
        loop {
            entries.push(ProcessEntry::new(exe_name(&entry), entry.th32ProcessID));
            if Process32NextW(snapshot, &mut entry).is_err() {
                break;
            }
        }
    }

    entries
}

/// Decodes the null-terminated `szExeFile` buffer.
fn exe_name(entry: &PROCESSENTRY32W) -> String {
    let len = entry
        .szExeFile
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(entry.szExeFile.len());
    String::from_utf16_lossy(&entry.szExeFile[..len])
}

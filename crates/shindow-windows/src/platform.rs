use shindow_core::{OsError, Platform, ProcessEntry};

use crate::window::Window;
use crate::{enumerate, process};

/// The Win32 implementation of [`Platform`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Platform;

impl Platform for Win32Platform {
    type Window = Window;

    fn list_processes(&self, filter: &str) -> Result<Vec<ProcessEntry>, OsError> {
        process::list_processes(filter)
    }

    fn find_window_for_process(&self, pid: u32) -> Option<Window> {
        enumerate::find_window_for_process(pid)
    }
}

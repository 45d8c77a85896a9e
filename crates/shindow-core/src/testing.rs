//! In-memory window used by unit tests in place of a real `HWND`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::app::Platform;
use crate::error::OsError;
use crate::process::{ProcessEntry, filter_processes};
use crate::rect::Rect;
use crate::style::{ExtendedStyle, WindowStyle};
use crate::window::StyledWindow;

/// Steps of the toggle that a [`FakeWindow`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SetStyle,
    SetExStyle,
    Monitor,
    Bounds,
    Place,
    Redraw,
}

#[derive(Debug, Clone)]
pub struct FakeState {
    pub zoomed: bool,
    pub style: WindowStyle,
    pub ex_style: ExtendedStyle,
    pub bounds: Rect,
    pub monitor: Rect,
    pub fail_on: Option<Step>,
    pub calls: Vec<Step>,
}

#[derive(Debug)]
pub struct FakeWindow {
    pub state: RefCell<FakeState>,
}

impl FakeWindow {
    /// A visible, decorated, 1280x720 window on a 1920x1080 primary monitor.
    pub fn bordered() -> Self {
        Self {
            state: RefCell::new(FakeState {
                zoomed: false,
                style: WindowStyle(0x10CF_0000),
                ex_style: ExtendedStyle::CLIENTEDGE,
                bounds: Rect::new(100, 100, 1280, 720),
                monitor: Rect::new(0, 0, 1920, 1080),
                fail_on: None,
                calls: Vec::new(),
            }),
        }
    }

    pub fn zoomed() -> Self {
        let window = Self::bordered();
        window.state.borrow_mut().zoomed = true;
        window
    }

    pub fn failing_on(step: Step) -> Self {
        let window = Self::bordered();
        window.state.borrow_mut().fail_on = Some(step);
        window
    }

    pub fn snapshot(&self) -> FakeState {
        self.state.borrow().clone()
    }

    fn record(&self, step: Step) -> Result<(), OsError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(step);
        if state.fail_on == Some(step) {
            return Err(OsError::new(5, "Access is denied."));
        }
        Ok(())
    }
}

impl StyledWindow for FakeWindow {
    fn is_zoomed(&self) -> bool {
        self.state.borrow().zoomed
    }

    fn style(&self) -> WindowStyle {
        self.state.borrow().style
    }

    fn ex_style(&self) -> ExtendedStyle {
        self.state.borrow().ex_style
    }

    fn set_style(&self, style: WindowStyle) -> Result<(), OsError> {
        self.record(Step::SetStyle)?;
        self.state.borrow_mut().style = style;
        Ok(())
    }

    fn set_ex_style(&self, ex_style: ExtendedStyle) -> Result<(), OsError> {
        self.record(Step::SetExStyle)?;
        self.state.borrow_mut().ex_style = ex_style;
        Ok(())
    }

    fn monitor_bounds(&self) -> Result<Rect, OsError> {
        self.record(Step::Monitor)?;
        Ok(self.state.borrow().monitor)
    }

    fn bounds(&self) -> Result<Rect, OsError> {
        self.record(Step::Bounds)?;
        Ok(self.state.borrow().bounds)
    }

    fn client_bounds(&self) -> Result<Rect, OsError> {
        self.record(Step::Bounds)?;
        let b = self.state.borrow().bounds;
        // 8px frame on each side and a 31px caption, as on Windows 10.
        Ok(Rect::new(b.x + 8, b.y + 31, b.width - 16, b.height - 39))
    }

    fn place(&self, rect: &Rect) -> Result<(), OsError> {
        self.record(Step::Place)?;
        self.state.borrow_mut().bounds = *rect;
        Ok(())
    }

    fn redraw(&self) -> Result<(), OsError> {
        self.record(Step::Redraw)
    }
}

impl StyledWindow for Rc<FakeWindow> {
    fn is_zoomed(&self) -> bool {
        (**self).is_zoomed()
    }

    fn style(&self) -> WindowStyle {
        (**self).style()
    }

    fn ex_style(&self) -> ExtendedStyle {
        (**self).ex_style()
    }

    fn set_style(&self, style: WindowStyle) -> Result<(), OsError> {
        (**self).set_style(style)
    }

    fn set_ex_style(&self, ex_style: ExtendedStyle) -> Result<(), OsError> {
        (**self).set_ex_style(ex_style)
    }

    fn monitor_bounds(&self) -> Result<Rect, OsError> {
        (**self).monitor_bounds()
    }

    fn bounds(&self) -> Result<Rect, OsError> {
        (**self).bounds()
    }

    fn client_bounds(&self) -> Result<Rect, OsError> {
        (**self).client_bounds()
    }

    fn place(&self, rect: &Rect) -> Result<(), OsError> {
        (**self).place(rect)
    }

    fn redraw(&self) -> Result<(), OsError> {
        (**self).redraw()
    }
}

/// Platform double: a fixed process list and one window per PID.
#[derive(Default)]
pub struct FakePlatform {
    pub processes: Vec<ProcessEntry>,
    pub windows: HashMap<u32, Rc<FakeWindow>>,
    pub list_fails: bool,
}

impl FakePlatform {
    pub fn with_process(mut self, name: &str, pid: u32, window: FakeWindow) -> Self {
        self.processes.push(ProcessEntry::new(name, pid));
        self.windows.insert(pid, Rc::new(window));
        self
    }
}

impl Platform for FakePlatform {
    type Window = Rc<FakeWindow>;

    fn list_processes(&self, filter: &str) -> Result<Vec<ProcessEntry>, OsError> {
        if self.list_fails {
            return Err(OsError::new(5, "Access is denied."));
        }
        Ok(filter_processes(self.processes.clone(), filter))
    }

    fn find_window_for_process(&self, pid: u32) -> Option<Self::Window> {
        self.windows.get(&pid).cloned()
    }
}

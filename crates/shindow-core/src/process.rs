use std::fmt;

/// A running process offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    /// Executable file name, e.g. `eqgame.exe`.
    pub name: String,
    pub pid: u32,
}

impl ProcessEntry {
    pub fn new(name: impl Into<String>, pid: u32) -> Self {
        Self {
            name: name.into(),
            pid,
        }
    }

    /// Returns true if the executable name contains `filter`,
    /// ignoring ASCII case. An empty filter matches everything.
    pub fn matches(&self, filter: &str) -> bool {
        filter.is_empty()
            || self
                .name
                .to_ascii_lowercase()
                .contains(&filter.to_ascii_lowercase())
    }
}

impl fmt::Display for ProcessEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.pid)
    }
}

/// Keeps the entries matching `filter`, sorted by name then PID.
pub fn filter_processes(
    entries: impl IntoIterator<Item = ProcessEntry>,
    filter: &str,
) -> Vec<ProcessEntry> {
    let mut matching: Vec<ProcessEntry> = entries.into_iter().filter(|p| p.matches(filter)).collect();
    matching.sort_by(|a, b| {
        a.name
            .to_ascii_lowercase()
            .cmp(&b.name.to_ascii_lowercase())
            .then(a.pid.cmp(&b.pid))
    });
    matching
}

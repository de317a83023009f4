use std::collections::VecDeque;

/// Append-only, newest-first record of combat text.
///
/// The log never truncates itself. Hosts decide how many entries to show.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    entries: VecDeque<String>,
    logged_this_tick: bool,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a line so that index 0 is always the latest event.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.logged_this_tick = true;
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// The `count` most recent entries, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> + '_ {
        self.iter().take(count)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if a line was appended since the last [`EventLog::begin_tick`].
    pub fn logged_this_tick(&self) -> bool {
        self.logged_this_tick
    }

    pub(crate) fn begin_tick(&mut self) {
        self.logged_this_tick = false;
    }
}

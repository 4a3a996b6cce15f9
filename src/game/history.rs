//! Append-only log of committed quarters.

use serde::Serialize;

use super::state::EconomicState;

#[derive(Clone, Debug, Default, Serialize)]
pub struct HistoryLog {
    entries: Vec<EconomicState>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: EconomicState) {
        self.entries.push(state);
    }

    /// Drop everything. Only the session's reset calls this.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&EconomicState> {
        self.entries.last()
    }

    /// The last `n` entries in turn order, or `None` if fewer were logged.
    pub fn window(&self, n: usize) -> Option<&[EconomicState]> {
        self.entries.len().checked_sub(n).map(|start| &self.entries[start..])
    }

    pub fn as_slice(&self) -> &[EconomicState] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EconomicState> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a EconomicState;
    type IntoIter = std::slice::Iter<'a, EconomicState>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<EconomicState> for HistoryLog {
    fn from_iter<T: IntoIterator<Item = EconomicState>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

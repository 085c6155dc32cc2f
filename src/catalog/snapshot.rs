use super::record_sets::RecordSets;
use crate::Result;
use std::sync::OnceLock;

/// Single-assignment holder for the record sets of a session.
///
/// The first successful load is kept for the lifetime of the cell and every later request
/// returns the same sets. A failed load leaves the cell empty so it can be retried.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    cell: OnceLock<RecordSets>,
}

impl SnapshotCell {
    #[must_use]
    pub const fn new() -> Self {
        Self { cell: OnceLock::new() }
    }

    /// Return the loaded sets, running `load` only if nothing has been loaded yet.
    pub fn get_or_load(&self, load: impl FnOnce() -> Result<RecordSets>) -> Result<&RecordSets> {
        if let Some(sets) = self.cell.get() {
            return Ok(sets);
        }

        let sets = load()?;
        Ok(self.cell.get_or_init(|| sets))
    }

    #[must_use]
    pub fn get(&self) -> Option<&RecordSets> {
        self.cell.get()
    }
}

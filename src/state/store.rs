//! Record store.
//!
//! Holds every loaded record exactly once (the authoritative set) plus the
//! ordered list of ids currently displayed. Because `displayed` only stores
//! ids that index into the authoritative records, a displayed row can never
//! drift from its stored record: edits write through, and deletes remove
//! the record from both views at once.

use crate::model::{Member, Record, RecordId};
use crate::state::search::{filter_ids, SearchQuery};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Summary of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Records kept.
    pub loaded: usize,
    /// Records dropped because their id was already present.
    pub duplicates: usize,
}

/// The authoritative record set and the displayed subset.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    positions: HashMap<RecordId, usize>,
    displayed: Vec<RecordId>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with freshly fetched members.
    ///
    /// Every record starts outside edit mode and is displayed. When an id
    /// occurs more than once the first occurrence wins.
    pub fn load(&mut self, members: Vec<Member>) -> LoadReport {
        let mut report = LoadReport::default();
        self.records.clear();
        self.positions.clear();

        for member in members {
            let record = Record::from(member);
            if self.positions.contains_key(record.id()) {
                warn!(id = %record.id(), "Dropping record with duplicate id");
                report.duplicates += 1;
                continue;
            }
            self.positions.insert(record.id().clone(), self.records.len());
            self.records.push(record);
        }

        report.loaded = self.records.len();
        self.show_all();
        report
    }

    /// All records still present, in source order.
    pub fn authoritative(&self) -> &[Record] {
        &self.records
    }

    /// Ids of the displayed records, in display order.
    pub fn displayed_ids(&self) -> &[RecordId] {
        &self.displayed
    }

    /// Displayed records, in display order.
    pub fn displayed(&self) -> impl Iterator<Item = &Record> + '_ {
        self.displayed.iter().filter_map(|id| self.get(id))
    }

    /// Number of displayed records.
    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Whether `id` is currently displayed.
    pub fn is_displayed(&self, id: &RecordId) -> bool {
        self.displayed.contains(id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    pub(crate) fn get_mut(&mut self, id: &RecordId) -> Option<&mut Record> {
        match self.positions.get(id) {
            Some(&pos) => self.records.get_mut(pos),
            None => None,
        }
    }

    /// Display every record and leave edit mode everywhere.
    pub fn show_all(&mut self) {
        self.reset_editing();
        self.displayed = self.records.iter().map(|r| r.id().clone()).collect();
    }

    /// Display the records matching `query` and leave edit mode everywhere.
    pub fn show_filtered(&mut self, query: &SearchQuery) {
        self.reset_editing();
        self.displayed = filter_ids(&self.records, query);
    }

    /// Remove records from the store entirely. Unknown ids are skipped.
    ///
    /// Returns how many records were removed.
    pub fn remove(&mut self, ids: &[RecordId]) -> usize {
        let doomed: HashSet<&RecordId> = ids
            .iter()
            .filter(|id| self.positions.contains_key(*id))
            .collect();
        if doomed.is_empty() {
            return 0;
        }

        let before = self.records.len();
        self.records.retain(|r| !doomed.contains(r.id()));
        self.displayed.retain(|id| !doomed.contains(id));
        let removed = before - self.records.len();

        self.positions = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.id().clone(), pos))
            .collect();
        removed
    }

    fn reset_editing(&mut self) {
        for record in &mut self.records {
            record.set_editing(false);
        }
    }
}

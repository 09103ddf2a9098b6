//! In-memory chart store.
//!
//! The store is the shared boundary between interactive views and the
//! patient chart: a map of tooth number to tooth record with a merge-style
//! mutation entrypoint. Updates addressed to a tooth that is not present are
//! ignored rather than treated as errors — a tooth can be removed while an
//! interaction targeting it is still in flight, and robustness of the UI
//! wins over strict consistency there.

use crate::{PeriodontalRecord, ToothNumber};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The full record kept for one tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToothRecord {
    /// FDI identity of this tooth.
    pub number: ToothNumber,
    /// Periodontal probing data.
    pub periodontal: PeriodontalRecord,
}

impl ToothRecord {
    /// Create an empty record for a tooth.
    #[must_use]
    pub const fn new(number: ToothNumber) -> Self {
        Self {
            number,
            periodontal: PeriodontalRecord::new(),
        }
    }
}

/// Per-patient chart: tooth records keyed by FDI number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartStore {
    teeth: BTreeMap<ToothNumber, ToothRecord>,
}

impl ChartStore {
    /// Create an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart holding an empty record for all 32 permanent teeth.
    #[must_use]
    pub fn full_dentition() -> Self {
        Self {
            teeth: ToothNumber::all()
                .map(|n| (n, ToothRecord::new(n)))
                .collect(),
        }
    }

    /// Look up a tooth record.
    #[must_use]
    pub fn tooth(&self, number: ToothNumber) -> Option<&ToothRecord> {
        self.teeth.get(&number)
    }

    /// Insert or replace a tooth record.
    pub fn insert(&mut self, record: ToothRecord) {
        self.teeth.insert(record.number, record);
    }

    /// Remove a tooth record, returning it if present.
    pub fn remove(&mut self, number: ToothNumber) -> Option<ToothRecord> {
        self.teeth.remove(&number)
    }

    /// Apply a mutation to a tooth record.
    ///
    /// Returns `true` if the tooth exists and the mutation ran, `false` if
    /// the tooth is absent (the update is dropped silently).
    pub fn update_tooth(
        &mut self,
        number: ToothNumber,
        update: impl FnOnce(&mut ToothRecord),
    ) -> bool {
        match self.teeth.get_mut(&number) {
            Some(record) => {
                update(record);
                true
            }
            None => false,
        }
    }

    /// Number of teeth in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teeth.len()
    }

    /// Whether the chart has no teeth.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }

    /// Iterate over all tooth records in ascending FDI order.
    pub fn iter(&self) -> impl Iterator<Item = &ToothRecord> {
        self.teeth.values()
    }
}

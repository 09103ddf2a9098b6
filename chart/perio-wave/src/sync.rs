//! Store synchronization.
//!
//! Stored clinical values and the model's visual levels live on different
//! scales. Probing depth is kept as non-negative millimeters; gingival
//! margin as zero or negative (recession depth). Visually, both curves use
//! the magnitude plus a fixed per-site padding so they never collapse onto
//! the axis extremes. This module is the only code that crosses that
//! boundary, in both directions.

use crate::{Level, SiteSlot, WaveValues};
use chart_types::{ChartStore, PeriodontalRecord, SurfaceSide, ToothNumber, PROBING_DEPTH_MAX};

/// Visual padding added per site, mesial/central/distal.
pub const SITE_OFFSETS: [u8; 3] = [1, 2, 1];

fn to_visual(magnitude: u8, offset: u8) -> Level {
    (u16::from(magnitude) + u16::from(offset)).clamp(1, 12) as Level
}

/// Stored clinical values reconstructed from one site's visual levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredSite {
    /// Probing depth in mm, non-negative.
    pub probing_depth: u8,
    /// Gingival margin in mm, zero or negative.
    pub gingival_margin: i8,
}

/// Map a tooth's stored measurements to visual levels for one surface.
///
/// For each of the three sites (mesial, central, distal):
/// `visual = clamp(1, 12, magnitude + offset)`, with the gingival margin's
/// magnitude taken via absolute value.
#[must_use]
pub fn visual_values(record: &PeriodontalRecord, side: SurfaceSide) -> WaveValues {
    let keys = side.sites();
    let mut gm = [0 as Level; 3];
    let mut pd = [0 as Level; 3];
    for (i, key) in keys.into_iter().enumerate() {
        let site = record.site(key);
        let offset = SITE_OFFSETS[i];
        pd[i] = to_visual(site.probing_depth, offset);
        gm[i] = to_visual(site.gingival_margin.unsigned_abs(), offset);
    }
    WaveValues::new(gm, pd)
}

/// Like [`visual_values`], reading from the store.
///
/// A missing tooth contributes the all-zero record; absent data is never an
/// error here.
#[must_use]
pub fn visual_values_for(store: &ChartStore, number: ToothNumber, side: SurfaceSide) -> WaveValues {
    match store.tooth(number) {
        Some(tooth) => visual_values(&tooth.periodontal, side),
        None => visual_values(&PeriodontalRecord::new(), side),
    }
}

/// Map visual levels back to stored clinical values, per site.
///
/// `probing_depth = max(0, visual_pd - offset)`; the gingival margin is
/// re-signed: zero stays zero, anything above the offset becomes negative
/// recession depth.
///
/// The model accepts out-of-band levels as-is, so both magnitudes are
/// capped here at [`PROBING_DEPTH_MAX`] — the same overflow sentinel the
/// keypads use. The stored depth stays within its domain and the stored
/// margin stays zero or negative no matter what level arrives.
#[must_use]
pub fn stored_from_visual(values: &WaveValues) -> [StoredSite; 3] {
    let mut out = [StoredSite {
        probing_depth: 0,
        gingival_margin: 0,
    }; 3];
    for slot in SiteSlot::ALL {
        let i = slot.index();
        let offset = SITE_OFFSETS[i];
        let probing_depth = values.pd[i].saturating_sub(offset).min(PROBING_DEPTH_MAX);
        let gm_base = values.gm[i].saturating_sub(offset).min(PROBING_DEPTH_MAX);
        out[i] = StoredSite {
            probing_depth,
            gingival_margin: if gm_base == 0 { 0 } else { -(gm_base as i8) },
        };
    }
    out
}

/// Write the reverse-mapped values for one surface back into the store.
///
/// Only sites whose stored value would actually change are written, so a
/// notification loop between model and store settles immediately. Flags
/// (bleeding, plaque, pus, tartar) are left untouched. If the tooth record
/// is gone — removed while an interaction was still in flight — nothing
/// happens.
///
/// Returns the number of sites written.
pub fn sync_to_store(
    store: &mut ChartStore,
    number: ToothNumber,
    side: SurfaceSide,
    values: &WaveValues,
) -> usize {
    let Some(tooth) = store.tooth(number) else {
        return 0;
    };

    let keys = side.sites();
    let stored = stored_from_visual(values);
    let mut changed = [false; 3];
    let mut count = 0;
    for (i, key) in keys.into_iter().enumerate() {
        let current = tooth.periodontal.site(key);
        if current.probing_depth != stored[i].probing_depth
            || current.gingival_margin != stored[i].gingival_margin
        {
            changed[i] = true;
            count += 1;
        }
    }
    if count == 0 {
        return 0;
    }

    store.update_tooth(number, |tooth| {
        for (i, key) in keys.into_iter().enumerate() {
            if changed[i] {
                let site = tooth.periodontal.site_mut(key);
                site.probing_depth = stored[i].probing_depth;
                site.gingival_margin = stored[i].gingival_margin;
            }
        }
    });
    count
}

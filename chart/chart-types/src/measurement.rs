//! Periodontal measurements per site and per tooth.

use crate::SiteKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Probing depth value used for the ">12 mm" keypad sentinel.
pub const PROBING_DEPTH_MAX: u8 = 13;

/// Measurements recorded at a single probing site.
///
/// Probing depth is measured in millimeters from the gingival margin down to
/// the pocket base (0-12, with 13 standing in for ">12"). Gingival margin is
/// stored as a non-positive offset from the cemento-enamel junction: 0 means
/// no recession, negative values encode recession depth. The four flags are
/// independent observations with no invariant between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteMeasurement {
    /// Pocket depth in mm (0-12; 13 = ">12").
    pub probing_depth: u8,
    /// Gum line offset in mm; 0 or negative (recession).
    pub gingival_margin: i8,
    /// Bleeding on probing observed.
    pub bleeding: bool,
    /// Plaque present.
    pub plaque: bool,
    /// Suppuration observed.
    pub pus: bool,
    /// Calculus present.
    pub tartar: bool,
}

impl SiteMeasurement {
    /// Create a measurement with the given depth and margin, no flags set.
    #[must_use]
    pub const fn new(probing_depth: u8, gingival_margin: i8) -> Self {
        Self {
            probing_depth,
            gingival_margin,
            bleeding: false,
            plaque: false,
            pus: false,
            tartar: false,
        }
    }

    /// Whether the probing depth is the ">12 mm" overflow sentinel.
    #[must_use]
    pub const fn probing_depth_overflow(&self) -> bool {
        self.probing_depth >= PROBING_DEPTH_MAX
    }
}

/// The six site measurements for one tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodontalRecord {
    sites: [SiteMeasurement; 6],
}

impl PeriodontalRecord {
    /// An all-zero record (no probing data, no flags).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sites: [SiteMeasurement::new(0, 0); 6],
        }
    }

    /// The measurement at a site.
    #[must_use]
    pub const fn site(&self, key: SiteKey) -> &SiteMeasurement {
        &self.sites[key.index()]
    }

    /// Mutable access to the measurement at a site.
    pub fn site_mut(&mut self, key: SiteKey) -> &mut SiteMeasurement {
        &mut self.sites[key.index()]
    }

    /// Replace the measurement at a site.
    pub fn set_site(&mut self, key: SiteKey, measurement: SiteMeasurement) {
        self.sites[key.index()] = measurement;
    }

    /// Iterate over all sites with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (SiteKey, &SiteMeasurement)> {
        SiteKey::ALL.iter().map(move |&key| (key, self.site(key)))
    }
}

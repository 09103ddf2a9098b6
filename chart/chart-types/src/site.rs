//! Periodontal measurement sites.
//!
//! Each tooth carries six fixed probing sites: three on the buccal (outer)
//! surface and three on the lingual (inner) surface. Within a surface the
//! sites run mesial, central, distal — this ordering matches left-to-right
//! drawing order in the chart views and must never be permuted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which surface of the tooth a site (or a wave view) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurfaceSide {
    /// Outer surface, facing the cheek/lip.
    Buccal,
    /// Inner surface, facing the tongue/palate.
    Lingual,
}

impl SurfaceSide {
    /// The three sites on this surface in mesial, central, distal order.
    #[must_use]
    pub const fn sites(self) -> [SiteKey; 3] {
        match self {
            Self::Buccal => [SiteKey::MesioBuccal, SiteKey::Buccal, SiteKey::DistoBuccal],
            Self::Lingual => [
                SiteKey::MesioLingual,
                SiteKey::Lingual,
                SiteKey::DistoLingual,
            ],
        }
    }
}

/// One of the six fixed measurement sites around a tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SiteKey {
    /// Mesial corner of the buccal surface.
    MesioBuccal,
    /// Center of the buccal surface.
    Buccal,
    /// Distal corner of the buccal surface.
    DistoBuccal,
    /// Mesial corner of the lingual surface.
    MesioLingual,
    /// Center of the lingual surface.
    Lingual,
    /// Distal corner of the lingual surface.
    DistoLingual,
}

impl SiteKey {
    /// All six sites, buccal triplet first.
    pub const ALL: [Self; 6] = [
        Self::MesioBuccal,
        Self::Buccal,
        Self::DistoBuccal,
        Self::MesioLingual,
        Self::Lingual,
        Self::DistoLingual,
    ];

    /// Which surface this site lies on.
    #[must_use]
    pub const fn side(self) -> SurfaceSide {
        match self {
            Self::MesioBuccal | Self::Buccal | Self::DistoBuccal => SurfaceSide::Buccal,
            Self::MesioLingual | Self::Lingual | Self::DistoLingual => SurfaceSide::Lingual,
        }
    }

    /// Dense index into per-tooth site storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::MesioBuccal => 0,
            Self::Buccal => 1,
            Self::DistoBuccal => 2,
            Self::MesioLingual => 3,
            Self::Lingual => 4,
            Self::DistoLingual => 5,
        }
    }
}

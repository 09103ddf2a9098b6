//! Interactive wave state and its observer contract.
//!
//! A [`WaveModel`] holds the visual levels of the two curves a clinician can
//! drag — gingival margin (gm) and probing depth (pd) — at the three movable
//! sites of one tooth surface. Every mutation re-establishes the clinical
//! ordering constraint `pd[i] >= gm[i]` at the touched site and synchronously
//! notifies all subscribers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertical level on the renderer's 1-12 scale.
///
/// Distinct from (but offset-related to) the stored clinical millimeter
/// values; see the sync module for the mapping.
pub type Level = u8;

/// Which of the two draggable curves a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveKind {
    /// Gingival margin curve.
    Gm,
    /// Probing depth curve.
    Pd,
}

/// One of the three movable sites of a wave view, mesial to distal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SiteSlot {
    /// Leftmost movable point.
    Mesial,
    /// Middle movable point.
    Central,
    /// Rightmost movable point.
    Distal,
}

impl SiteSlot {
    /// All three slots in drawing order.
    pub const ALL: [Self; 3] = [Self::Mesial, Self::Central, Self::Distal];

    /// Dense array index (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Mesial => 0,
            Self::Central => 1,
            Self::Distal => 2,
        }
    }
}

/// Current levels of both curves at the three movable sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaveValues {
    /// Gingival margin levels, mesial to distal.
    pub gm: [Level; 3],
    /// Probing depth levels, mesial to distal.
    pub pd: [Level; 3],
}

impl WaveValues {
    /// Create values from the two level triplets.
    #[must_use]
    pub const fn new(gm: [Level; 3], pd: [Level; 3]) -> Self {
        Self { gm, pd }
    }

    /// The level of the given curve at the given slot.
    #[must_use]
    pub const fn level(&self, curve: CurveKind, slot: SiteSlot) -> Level {
        match curve {
            CurveKind::Gm => self.gm[slot.index()],
            CurveKind::Pd => self.pd[slot.index()],
        }
    }

    /// Whether `pd[i] >= gm[i]` holds at every slot.
    #[must_use]
    pub fn ordered(&self) -> bool {
        self.gm.iter().zip(&self.pd).all(|(gm, pd)| pd >= gm)
    }
}

impl Default for WaveValues {
    /// The resting shape a model starts with before any data sync.
    fn default() -> Self {
        Self::new([3, 3, 3], [5, 5, 5])
    }
}

/// Handle returned by [`WaveModel::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A read of the model's current state.
///
/// The `revision` counter increases exactly when a mutation method runs, so
/// consumers can compare revisions instead of values to decide whether to
/// re-render (the memoization contract an external-store binding needs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSnapshot<'a> {
    /// The current values.
    pub values: &'a WaveValues,
    /// Mutation counter at the time of the read.
    pub revision: u64,
}

type Listener = Box<dyn FnMut(&WaveValues)>;

/// Observable holder of one tooth surface's wave state.
///
/// One model instance exists per jaw-surface-side per tooth view (two per
/// tooth: buccal and lingual), owned exclusively by the view that created
/// it. All operations are synchronous; listeners run on the calling thread
/// before the mutating call returns, in subscription order.
///
/// Re-entrant subscription from inside a listener is unrepresentable here:
/// every mutating or subscribing method takes `&mut self`.
///
/// # Example
///
/// ```
/// use perio_wave::{CurveKind, SiteSlot, WaveModel, WaveValues};
///
/// let mut model = WaveModel::new(WaveValues::new([3, 3, 3], [5, 5, 5]));
/// model.update_point(CurveKind::Gm, SiteSlot::Central, 8);
///
/// // Probing depth was pulled up to keep pd >= gm.
/// let snap = model.snapshot();
/// assert_eq!(snap.values.gm, [3, 8, 3]);
/// assert_eq!(snap.values.pd, [5, 8, 5]);
/// ```
pub struct WaveModel {
    values: WaveValues,
    revision: u64,
    next_id: u64,
    listeners: Vec<(SubscriberId, Listener)>,
}

impl WaveModel {
    /// Create a model with the given starting values.
    #[must_use]
    pub fn new(values: WaveValues) -> Self {
        Self {
            values,
            revision: 0,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Read the current values and revision.
    #[must_use]
    pub fn snapshot(&self) -> WaveSnapshot<'_> {
        WaveSnapshot {
            values: &self.values,
            revision: self.revision,
        }
    }

    /// Register a listener called after every mutation.
    ///
    /// Listeners are invoked synchronously, in subscription order, with the
    /// post-mutation values. The returned id deregisters the listener via
    /// [`Self::unsubscribe`].
    pub fn subscribe(&mut self, listener: impl FnMut(&WaveValues) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replace both curves wholesale (external-data resynchronization).
    ///
    /// No ordering check is applied here: the values are trusted as given,
    /// and listeners are notified unconditionally.
    pub fn set_values(&mut self, values: WaveValues) {
        self.values = values;
        self.notify();
    }

    /// Move one control point to `level`, keeping `pd >= gm` at that site.
    ///
    /// - Moving a `Gm` point below the pd curve drags `pd` down with it.
    /// - Moving a `Pd` point above the gm curve stops at the gm level.
    ///
    /// Listeners are notified even when the clamped result equals the prior
    /// value.
    ///
    /// `level` is accepted as-is: the pixel-to-level mapping clamps to
    /// [1, 12] before calling this, and the model deliberately does not
    /// second-guess its caller. Out-of-range levels flow through unchanged.
    pub fn update_point(&mut self, curve: CurveKind, slot: SiteSlot, level: Level) {
        let i = slot.index();
        match curve {
            CurveKind::Gm => {
                self.values.gm[i] = level;
                if self.values.gm[i] > self.values.pd[i] {
                    self.values.pd[i] = self.values.gm[i];
                }
            }
            CurveKind::Pd => {
                self.values.pd[i] = level;
                if self.values.pd[i] < self.values.gm[i] {
                    self.values.pd[i] = self.values.gm[i];
                }
            }
        }
        debug_assert!(self.values.pd[i] >= self.values.gm[i]);
        self.notify();
    }

    fn notify(&mut self) {
        self.revision += 1;
        let values = self.values;
        for (_, listener) in &mut self.listeners {
            listener(&values);
        }
    }
}

impl Default for WaveModel {
    fn default() -> Self {
        Self::new(WaveValues::default())
    }
}

impl fmt::Debug for WaveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveModel")
            .field("values", &self.values)
            .field("revision", &self.revision)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

//! Pointer-event binding.
//!
//! [`DragSession`] is the state machine between a pointer-driven surface and
//! a [`WaveModel`]: press hits a control point, movement maps the pointer's
//! Y coordinate to a level and pushes it into the model, release or leaving
//! the surface ends the drag. The host view stays responsible for canvas
//! sizing, subscription lifecycle (resubscribe on model swap, unsubscribe on
//! teardown), and repainting on model notifications.

use crate::{hit_test, Hit, Viewport, WaveModel};

/// Drag state for one wave view.
///
/// Coordinates are canvas-local logical pixels. Every move event while
/// dragging maps straight into a model update — synchronous and
/// unthrottled; the model notifies per event, and throttling (if a host
/// wants it) must not change the end state.
///
/// # Example
///
/// ```
/// use perio_wave::{DragSession, Viewport, WaveDirection, WaveModel};
///
/// let mut model = WaveModel::default();
/// let viewport = Viewport::new(200.0, 120.0, WaveDirection::Down)?;
/// let mut session = DragSession::new();
///
/// // Press on the central gm point, drag it, release.
/// let xs = viewport.x_positions();
/// let y = viewport.y_for_level(model.snapshot().values.gm[1]);
/// session.pointer_down(&model, &viewport, xs[2], y);
/// assert!(session.is_dragging());
///
/// session.pointer_move(&mut model, &viewport, xs[2], viewport.y_for_level(9));
/// session.pointer_up();
///
/// assert_eq!(model.snapshot().values.gm[1], 9);
/// # Ok::<(), perio_wave::WaveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DragSession {
    active: Option<Hit>,
}

impl DragSession {
    /// Create an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Handle a pointer press at canvas-local `(x, y)`.
    ///
    /// Enters the dragging state if a control point is under the pointer;
    /// a miss leaves the session idle. Returns the hit, if any.
    pub fn pointer_down(
        &mut self,
        model: &WaveModel,
        viewport: &Viewport,
        x: f64,
        y: f64,
    ) -> Option<Hit> {
        self.active = hit_test(model.snapshot().values, viewport, x, y);
        self.active
    }

    /// Handle pointer movement.
    ///
    /// While dragging, maps `y` to a level and moves the grabbed point.
    /// Returns `true` if a model update was issued.
    pub fn pointer_move(
        &mut self,
        model: &mut WaveModel,
        viewport: &Viewport,
        _x: f64,
        y: f64,
    ) -> bool {
        match self.active {
            Some(hit) => {
                let level = viewport.level_from_y(y);
                model.update_point(hit.curve, hit.site, level);
                true
            }
            None => false,
        }
    }

    /// Handle pointer release: ends any drag unconditionally.
    pub fn pointer_up(&mut self) {
        self.active = None;
    }

    /// Handle the pointer leaving the surface: same as release.
    pub fn pointer_leave(&mut self) {
        self.active = None;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The grabbed control point, if dragging.
    #[must_use]
    pub const fn active_hit(&self) -> Option<Hit> {
        self.active
    }
}

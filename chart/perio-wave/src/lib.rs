//! Interactive periodontal wave engine.
//!
//! This crate is the interaction core of the periodontal chart: two
//! constrained curves — gingival margin (gm) and probing depth (pd) — that a
//! clinician drags across the three measurement sites of one tooth surface.
//!
//! - [`WaveModel`] - Observable state of the two curves, enforcing the
//!   clinical ordering `pd >= gm` at every site on each point move
//! - [`Viewport`] - Level (1-12) to pixel mapping, orientation, layout
//! - [`render`] / [`Frame`] - Pure draw-command rendering behind a pluggable
//!   [`DrawSink`] backend
//! - [`hit_test`] / [`DragSession`] - Pointer binding from press to release
//! - [`visual_values`] / [`sync_to_store`] - Offset mapping between stored
//!   clinical millimeters and visual levels, both directions
//!
//! # Design Philosophy
//!
//! Everything here is framework-agnostic and headless-testable. The model
//! exposes a plain subscribe/snapshot observable; the renderer emits
//! backend-neutral commands instead of touching a drawing context; the drag
//! session is a pure state machine over canvas-local coordinates. A UI shell
//! owns the canvas element, the event loop, and the subscription lifecycle.
//!
//! # Data Flow
//!
//! Store measurements map through per-site visual offsets into
//! [`WaveModel::set_values`]; [`render`] turns each snapshot into a
//! [`Frame`]; a drag maps pointer Y back to a level and into
//! [`WaveModel::update_point`]; every notification re-renders and writes
//! changed sites back through [`sync_to_store`].
//!
//! # Example
//!
//! ```
//! use chart_types::{ChartStore, SurfaceSide, ToothNumber, ToothRecord};
//! use perio_wave::{
//!     render, sync_to_store, visual_values_for, Viewport, WaveDirection, WaveModel,
//! };
//!
//! let mut chart = ChartStore::new();
//! let tooth = ToothNumber::new(16)?;
//! chart.insert(ToothRecord::new(tooth));
//!
//! // Store -> model.
//! let mut model = WaveModel::default();
//! model.set_values(visual_values_for(&chart, tooth, SurfaceSide::Buccal));
//!
//! // Model -> pixels.
//! let viewport = Viewport::new(160.0, 120.0, WaveDirection::Down)?;
//! let frame = render(model.snapshot().values, &viewport);
//! assert!(!frame.commands.is_empty());
//!
//! // Model -> store (nothing changed yet, so nothing is written).
//! let written = sync_to_store(&mut chart, tooth, SurfaceSide::Buccal, model.snapshot().values);
//! assert_eq!(written, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::uninlined_format_args
)]

mod error;
mod geometry;
mod interact;
mod model;
mod path;
mod render;
mod sync;

pub use error::WaveError;
pub use geometry::{
    Viewport, WaveDirection, HIT_RADIUS, LEVELS, VERTICAL_OFFSET, VERTICAL_SPREAD,
};
pub use interact::DragSession;
pub use model::{CurveKind, Level, SiteSlot, SubscriberId, WaveModel, WaveSnapshot, WaveValues};
pub use path::{control_points, smooth_segments, smooth_segments_reversed, BezierSegment, ENDPOINT_LEVEL};
pub use render::{
    hit_test, render, Color, DrawCommand, DrawSink, Frame, Hit, PathEvent, GM_STROKE, GRID_COLOR,
    GRID_DASH, PD_STROKE, POCKET_FILL, STROKE_WIDTH,
};
pub use sync::{
    stored_from_visual, sync_to_store, visual_values, visual_values_for, StoredSite, SITE_OFFSETS,
};

/// Result type for wave engine operations.
pub type Result<T> = std::result::Result<T, WaveError>;

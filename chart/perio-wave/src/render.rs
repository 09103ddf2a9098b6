//! Draw-command rendering and hit-testing.
//!
//! The renderer is a pure function from `(values, viewport)` to a [`Frame`]
//! of backend-neutral [`DrawCommand`]s. Any surface that can stroke a cubic
//! Bézier — HTML canvas, a software rasterizer, a GPU path renderer — plugs
//! in as a [`DrawSink`]. Keeping geometry out of the backend is what makes
//! the drawing contract testable headless.

use crate::path::{control_points, smooth_segments, smooth_segments_reversed, BezierSegment};
use crate::{CurveKind, SiteSlot, Viewport, WaveValues, HIT_RADIUS, LEVELS};
use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGBA color. Alpha is 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity, 0.0 (transparent) to 1.0 (opaque).
    pub a: f64,
}

impl Color {
    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from RGB channels and opacity.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Decorative grid line color.
pub const GRID_COLOR: Color = Color::rgba(0, 0, 0, 0.05);
/// Translucent pocket fill between the two curves.
pub const POCKET_FILL: Color = Color::rgba(0, 122, 255, 0.2);
/// Probing depth stroke.
pub const PD_STROKE: Color = Color::rgb(0, 122, 255);
/// Gingival margin stroke.
pub const GM_STROKE: Color = Color::rgb(255, 59, 48);

/// Curve stroke width in logical pixels.
pub const STROKE_WIDTH: f64 = 2.0;
/// On/off dash lengths for grid lines.
pub const GRID_DASH: [f64; 2] = [2.0, 4.0];

/// One step of a 2D path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathEvent {
    /// Begin a subpath at the point.
    MoveTo(Point2<f64>),
    /// Straight line to the point.
    LineTo(Point2<f64>),
    /// Cubic Bézier to `to` with the two control points.
    CurveTo {
        /// First control point.
        cp1: Point2<f64>,
        /// Second control point.
        cp2: Point2<f64>,
        /// Segment end point.
        to: Point2<f64>,
    },
}

/// A backend-neutral drawing operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawCommand {
    /// Clear the whole viewport.
    Clear,
    /// A dashed horizontal reference line at one level.
    GridLine {
        /// Left end of the line.
        from: Point2<f64>,
        /// Right end of the line.
        to: Point2<f64>,
        /// Line color.
        color: Color,
        /// On/off dash lengths.
        dash: [f64; 2],
    },
    /// Fill a closed outline.
    FillRegion {
        /// Closed path, first event is a `MoveTo`.
        outline: Vec<PathEvent>,
        /// Fill color.
        color: Color,
    },
    /// Stroke an open path.
    StrokeCurve {
        /// Path, first event is a `MoveTo`.
        path: Vec<PathEvent>,
        /// Stroke color.
        color: Color,
        /// Stroke width in logical pixels.
        width: f64,
    },
}

/// Receiver for draw commands; implemented by the pixel backend.
pub trait DrawSink {
    /// Apply one command to the backing surface.
    fn apply(&mut self, command: &DrawCommand);
}

/// One rendered frame: the viewport it was laid out for plus its commands,
/// in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Logical width the commands were laid out for.
    pub width: f64,
    /// Logical height the commands were laid out for.
    pub height: f64,
    /// Commands in paint order.
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Replay every command into a sink, in order.
    pub fn replay(&self, sink: &mut impl DrawSink) {
        for command in &self.commands {
            sink.apply(command);
        }
    }

    /// Backing-store size for a device pixel ratio.
    ///
    /// Geometry stays in logical pixels; a backend sizes its buffer with
    /// this and scales its context by `dpr` for crisp high-DPI output.
    #[must_use]
    pub fn device_size(&self, dpr: f64) -> (u32, u32) {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        ((self.width * dpr).round() as u32, (self.height * dpr).round() as u32)
    }
}

fn push_curve_events(events: &mut Vec<PathEvent>, segments: &[BezierSegment]) {
    for segment in segments {
        events.push(PathEvent::CurveTo {
            cp1: segment.cp1,
            cp2: segment.cp2,
            to: segment.to,
        });
    }
}

fn stroke_path(points: &[Point2<f64>; 5]) -> Vec<PathEvent> {
    let mut path = Vec::with_capacity(5);
    path.push(PathEvent::MoveTo(points[0]));
    push_curve_events(&mut path, &smooth_segments(points));
    path
}

/// Render one frame of the wave view.
///
/// Paint order: clear, the twelve dashed grid lines, the translucent pocket
/// fill bounded by the two curves, the probing depth stroke, then the
/// gingival margin stroke on top.
#[must_use]
pub fn render(values: &WaveValues, viewport: &Viewport) -> Frame {
    let mut commands = Vec::with_capacity(usize::from(LEVELS) + 4);
    commands.push(DrawCommand::Clear);

    for level in 1..=LEVELS {
        let y = viewport.y_for_level(level);
        commands.push(DrawCommand::GridLine {
            from: Point2::new(0.0, y),
            to: Point2::new(viewport.width, y),
            color: GRID_COLOR,
            dash: GRID_DASH,
        });
    }

    let gm_points = control_points(&values.gm, viewport);
    let pd_points = control_points(&values.pd, viewport);

    // Pocket fill: gm left-to-right, jump to the pd endpoint, pd
    // right-to-left, close back to the gm start.
    let mut outline = Vec::with_capacity(12);
    outline.push(PathEvent::MoveTo(gm_points[0]));
    push_curve_events(&mut outline, &smooth_segments(&gm_points));
    outline.push(PathEvent::LineTo(pd_points[4]));
    push_curve_events(&mut outline, &smooth_segments_reversed(&pd_points));
    outline.push(PathEvent::LineTo(gm_points[0]));
    commands.push(DrawCommand::FillRegion {
        outline,
        color: POCKET_FILL,
    });

    commands.push(DrawCommand::StrokeCurve {
        path: stroke_path(&pd_points),
        color: PD_STROKE,
        width: STROKE_WIDTH,
    });
    commands.push(DrawCommand::StrokeCurve {
        path: stroke_path(&gm_points),
        color: GM_STROKE,
        width: STROKE_WIDTH,
    });

    Frame {
        width: viewport.width,
        height: viewport.height,
        commands,
    }
}

/// A control point found under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hit {
    /// Which curve the point belongs to.
    pub curve: CurveKind,
    /// Which movable site it is.
    pub site: SiteSlot,
}

/// Find the movable control point within [`HIT_RADIUS`] of `(x, y)`.
///
/// The three gm points are checked before the three pd points, so gm wins
/// when both curves have a point under the pointer. Returns `None` on a
/// miss — a non-event, not an error.
#[must_use]
pub fn hit_test(values: &WaveValues, viewport: &Viewport, x: f64, y: f64) -> Option<Hit> {
    let xs = viewport.x_positions();
    let radius_sq = HIT_RADIUS * HIT_RADIUS;

    for curve in [CurveKind::Gm, CurveKind::Pd] {
        for slot in SiteSlot::ALL {
            let px = xs[slot.index() + 1];
            let py = viewport.y_for_level(values.level(curve, slot));
            let dx = x - px;
            let dy = y - py;
            if dx * dx + dy * dy < radius_sq {
                return Some(Hit { curve, site: slot });
            }
        }
    }
    None
}

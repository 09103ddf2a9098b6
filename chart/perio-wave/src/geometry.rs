//! Level-to-pixel mapping and viewport layout.
//!
//! The wave canvas maps the clinical 1-12 level scale onto a vertical band
//! occupying [`VERTICAL_SPREAD`] of the viewport height, centered and biased
//! by a fixed pixel offset. [`WaveDirection`] decides whether level 1 sits
//! near the bottom (`Down`) or the top (`Up`); it flips per jaw and per
//! buccal/lingual side so the curves always grow away from the tooth crown.

use crate::{Level, Result, WaveError};
use chart_types::{Jaw, SurfaceSide};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of discrete levels on the vertical scale.
pub const LEVELS: u8 = 12;

/// Fraction of the viewport height used by the level band.
pub const VERTICAL_SPREAD: f64 = 0.6;

/// Fixed pixel bias applied to the level band (sign flips for `Up`).
pub const VERTICAL_OFFSET: f64 = -40.0;

/// Hit-test radius around a control point, in logical pixels.
pub const HIT_RADIUS: f64 = 20.0;

/// Vertical orientation of the level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaveDirection {
    /// Level 1 near the bottom; deeper levels move up.
    Down,
    /// Level 1 near the top; deeper levels move down.
    Up,
}

impl WaveDirection {
    /// Orientation for a given jaw and tooth surface.
    ///
    /// The wave sits above the tooth image for the view drawn at the top of
    /// the stack and below it for the bottom view. The upper jaw stacks
    /// buccal on top; the lower jaw stacks lingual on top.
    #[must_use]
    pub const fn for_view(jaw: Jaw, side: SurfaceSide) -> Self {
        match (jaw, side) {
            (Jaw::Upper, SurfaceSide::Buccal) | (Jaw::Lower, SurfaceSide::Lingual) => Self::Down,
            (Jaw::Upper, SurfaceSide::Lingual) | (Jaw::Lower, SurfaceSide::Buccal) => Self::Up,
        }
    }
}

/// Logical drawing area of one wave view.
///
/// Dimensions are in logical (CSS) pixels; device-pixel-ratio scaling is the
/// drawing backend's concern (see [`Frame::device_size`](crate::Frame::device_size)).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    /// Logical width in pixels.
    pub width: f64,
    /// Logical height in pixels.
    pub height: f64,
    /// Vertical orientation of the level scale.
    pub direction: WaveDirection,
}

impl Viewport {
    /// Create a viewport, rejecting unusable dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidViewport`] if either dimension is not
    /// positive and finite.
    pub fn new(width: f64, height: f64, direction: WaveDirection) -> Result<Self> {
        if width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite() {
            Ok(Self {
                width,
                height,
                direction,
            })
        } else {
            Err(WaveError::invalid_viewport(width, height))
        }
    }

    /// Height of the level band and its top padding.
    fn vertical_band(&self) -> (f64, f64) {
        let content_height = self.height * VERTICAL_SPREAD;
        let total_padding = self.height - content_height;
        // The offset pushes the band toward the tooth; mirroring it for the
        // upward orientation keeps the two waves symmetric around the image.
        let effective_offset = match self.direction {
            WaveDirection::Up => -VERTICAL_OFFSET,
            WaveDirection::Down => VERTICAL_OFFSET,
        };
        let padding_top = total_padding / 2.0 + effective_offset;
        (content_height, padding_top)
    }

    /// Pixel Y coordinate of a level.
    ///
    /// Linear over levels; values outside [1, 12] extrapolate along the same
    /// line (the model is permissive, drawing follows it).
    #[must_use]
    pub fn y_for_level(&self, level: Level) -> f64 {
        let (content_height, padding_top) = self.vertical_band();
        let step = content_height / f64::from(LEVELS - 1);
        let offset = f64::from(level) - 1.0;
        match self.direction {
            WaveDirection::Down => (padding_top + content_height) - offset * step,
            WaveDirection::Up => padding_top + offset * step,
        }
    }

    /// Nearest level for a pixel Y coordinate, clamped to [1, 12].
    ///
    /// Exact inverse of [`Self::y_for_level`] on the valid range.
    #[must_use]
    pub fn level_from_y(&self, y: f64) -> Level {
        let (content_height, padding_top) = self.vertical_band();
        let step = content_height / f64::from(LEVELS - 1);
        let level = match self.direction {
            WaveDirection::Down => 1.0 + ((padding_top + content_height) - y) / step,
            WaveDirection::Up => 1.0 + (y - padding_top) / step,
        };
        level.round().clamp(1.0, f64::from(LEVELS)) as Level
    }

    /// The five X coordinates of a wave path.
    ///
    /// Two fixed endpoints at the canvas edges (always drawn at level 1,
    /// the mesial/distal tooth boundary) and three movable interior points
    /// in mesial, central, distal order.
    #[must_use]
    pub fn x_positions(&self) -> [f64; 5] {
        [
            0.0,
            self.width * 0.2,
            self.width * 0.5,
            self.width * 0.8,
            self.width,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[allow(clippy::unwrap_used)]
    fn viewport(width: f64, height: f64, direction: WaveDirection) -> Viewport {
        Viewport::new(width, height, direction).unwrap()
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        for (w, h) in [(0.0, 100.0), (100.0, 0.0), (-5.0, 100.0), (f64::NAN, 100.0)] {
            assert!(Viewport::new(w, h, WaveDirection::Down).is_err());
        }
    }

    #[test]
    fn test_level_roundtrip_both_directions() {
        for direction in [WaveDirection::Down, WaveDirection::Up] {
            for (w, h) in [(120.0, 180.0), (80.0, 300.0), (333.0, 121.5)] {
                let vp = viewport(w, h, direction);
                for level in 1..=LEVELS {
                    assert_eq!(
                        vp.level_from_y(vp.y_for_level(level)),
                        level,
                        "level {level} lost in {direction:?} {w}x{h}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_direction_flips_axis() {
        let down = viewport(100.0, 200.0, WaveDirection::Down);
        let up = viewport(100.0, 200.0, WaveDirection::Up);

        // Down: deeper level is higher on screen (smaller y).
        assert!(down.y_for_level(12) < down.y_for_level(1));
        // Up: deeper level is lower on screen (larger y).
        assert!(up.y_for_level(12) > up.y_for_level(1));
    }

    #[test]
    fn test_level_from_y_clamps() {
        let vp = viewport(100.0, 200.0, WaveDirection::Down);
        assert_eq!(vp.level_from_y(1e6), 1);
        assert_eq!(vp.level_from_y(-1e6), 12);
    }

    #[test]
    fn test_band_is_linear() {
        let vp = viewport(100.0, 240.0, WaveDirection::Up);
        let step = vp.y_for_level(2) - vp.y_for_level(1);
        for level in 2..=LEVELS {
            assert_relative_eq!(
                vp.y_for_level(level) - vp.y_for_level(level - 1),
                step,
                epsilon = 1e-9
            );
        }
        // Full band spans VERTICAL_SPREAD of the height.
        assert_relative_eq!(
            (vp.y_for_level(12) - vp.y_for_level(1)).abs(),
            240.0 * VERTICAL_SPREAD,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_x_positions() {
        let vp = viewport(200.0, 100.0, WaveDirection::Down);
        let xs = vp.x_positions();
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[1], 40.0);
        assert_relative_eq!(xs[2], 100.0);
        assert_relative_eq!(xs[3], 160.0);
        assert_relative_eq!(xs[4], 200.0);
    }

    #[test]
    fn test_direction_for_view() {
        assert_eq!(
            WaveDirection::for_view(Jaw::Upper, SurfaceSide::Buccal),
            WaveDirection::Down
        );
        assert_eq!(
            WaveDirection::for_view(Jaw::Upper, SurfaceSide::Lingual),
            WaveDirection::Up
        );
        assert_eq!(
            WaveDirection::for_view(Jaw::Lower, SurfaceSide::Lingual),
            WaveDirection::Down
        );
        assert_eq!(
            WaveDirection::for_view(Jaw::Lower, SurfaceSide::Buccal),
            WaveDirection::Up
        );
    }
}

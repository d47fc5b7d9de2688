//! Mapping between power values (dBm) and screen pixels.
//!
//! The plot rectangle is inclusive on both ends: `x_min` maps to the left
//! pixel column and `x_max` to the right one, `y_max` to the top row and
//! `y_min` to the bottom row (screen Y grows downward).

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use micromath::F32Ext;

/// Lower axis limit on both axes (dBm).
pub const AXIS_MIN_DBM: f32 = -110.0;

/// Upper axis limit on both axes (dBm).
pub const AXIS_MAX_DBM: f32 = -75.0;

/// Grid and tick spacing (dB).
pub const GRID_STEP_DB: f32 = 5.0;

/// Visible data window.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlotBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl PlotBounds {
    /// Both axes fixed to `[-110, -75]`.
    pub const HANDOVER: Self = Self {
        x_min: AXIS_MIN_DBM,
        x_max: AXIS_MAX_DBM,
        y_min: AXIS_MIN_DBM,
        y_max: AXIS_MAX_DBM,
    };

    #[inline]
    pub fn contains_x(
        &self,
        x: f32,
    ) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    #[inline]
    pub fn contains_y(
        &self,
        y: f32,
    ) -> bool {
        y >= self.y_min && y <= self.y_max
    }

    /// Grid positions on the X axis, `x_min` first.
    pub fn x_ticks(&self) -> impl Iterator<Item = f32> + '_ { ticks(self.x_min, self.x_max) }

    /// Grid positions on the Y axis, `y_min` first.
    pub fn y_ticks(&self) -> impl Iterator<Item = f32> + '_ { ticks(self.y_min, self.y_max) }
}

fn ticks(
    min: f32,
    max: f32,
) -> impl Iterator<Item = f32> {
    let count = ((max - min) / GRID_STEP_DB).floor() as u32;
    (0..=count).map(move |i| min + i as f32 * GRID_STEP_DB)
}

/// Screen rectangle plus the data window it shows.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlotArea {
    pub rect: Rectangle,
    pub bounds: PlotBounds,
}

impl PlotArea {
    pub const fn new(
        rect: Rectangle,
        bounds: PlotBounds,
    ) -> Self {
        Self { rect, bounds }
    }

    #[inline]
    fn x_scale(&self) -> f32 { (self.rect.size.width.saturating_sub(1)) as f32 / (self.bounds.x_max - self.bounds.x_min) }

    #[inline]
    fn y_scale(&self) -> f32 { (self.rect.size.height.saturating_sub(1)) as f32 / (self.bounds.y_max - self.bounds.y_min) }

    #[inline]
    fn right(&self) -> i32 { self.rect.top_left.x + self.rect.size.width as i32 - 1 }

    #[inline]
    fn bottom(&self) -> i32 { self.rect.top_left.y + self.rect.size.height as i32 - 1 }

    /// Pixel column for a serving power. Not clamped.
    pub fn x_to_px(
        &self,
        x: f32,
    ) -> i32 {
        self.rect.top_left.x + ((x - self.bounds.x_min) * self.x_scale()).round() as i32
    }

    /// Pixel row for a neighbor power. Not clamped.
    pub fn y_to_px(
        &self,
        y: f32,
    ) -> i32 {
        self.bottom() - ((y - self.bounds.y_min) * self.y_scale()).round() as i32
    }

    /// Serving power at the center of pixel column `px`.
    pub fn px_to_x(
        &self,
        px: i32,
    ) -> f32 {
        self.bounds.x_min + (px - self.rect.top_left.x) as f32 / self.x_scale()
    }

    /// Neighbor power at the center of pixel row `py`.
    pub fn px_to_y(
        &self,
        py: i32,
    ) -> f32 {
        self.bounds.y_min + (self.bottom() - py) as f32 / self.y_scale()
    }

    #[inline]
    pub fn to_screen(
        &self,
        x: f32,
        y: f32,
    ) -> Point {
        Point::new(self.x_to_px(x), self.y_to_px(y))
    }

    /// Pixel column range `[left, right]` covered by the plot.
    #[inline]
    pub fn columns(&self) -> core::ops::RangeInclusive<i32> { self.rect.top_left.x..=self.right() }

    #[inline]
    pub const fn top(&self) -> i32 { self.rect.top_left.y }

    #[inline]
    pub fn bottom_row(&self) -> i32 { self.bottom() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea::new(Rectangle::new(Point::new(100, 50), Size::new(351, 351)), PlotBounds::HANDOVER);

    #[test]
    fn test_corners_map_to_rectangle_corners() {
        assert_eq!(AREA.to_screen(-110.0, -110.0), Point::new(100, 400));
        assert_eq!(AREA.to_screen(-75.0, -75.0), Point::new(450, 50));
        assert_eq!(AREA.to_screen(-110.0, -75.0), Point::new(100, 50));
    }

    #[test]
    fn test_ten_pixels_per_db() {
        // 350 px / 35 dB
        assert_eq!(AREA.x_to_px(-100.0), 200);
        assert_eq!(AREA.y_to_px(-100.0), 300);
        assert_eq!(AREA.x_to_px(-99.5), 205);
    }

    #[test]
    fn test_inverse_mapping() {
        assert_eq!(AREA.px_to_x(200), -100.0);
        assert_eq!(AREA.px_to_y(300), -100.0);
        for px in AREA.columns() {
            assert_eq!(AREA.x_to_px(AREA.px_to_x(px)), px);
        }
    }

    #[test]
    fn test_ticks_every_five_db() {
        let ticks: heapless::Vec<f32, 16> = PlotBounds::HANDOVER.x_ticks().collect();
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[0], -110.0);
        assert_eq!(ticks[7], -75.0);
    }

    #[test]
    fn test_bounds_contains() {
        let b = PlotBounds::HANDOVER;
        assert!(b.contains_x(-75.0));
        assert!(!b.contains_x(-60.0));
        assert!(b.contains_y(-110.0));
        assert!(!b.contains_y(-110.5));
    }
}

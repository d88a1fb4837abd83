//! Scroll offsets

/// Scroll position of a surface, in the surface's length unit
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub top: f32,
    pub left: f32,
}

impl ScrollOffset {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Clamp into `[0, max_top] x [0, max_left]`
    pub fn clamped(self, max_top: f32, max_left: f32) -> Self {
        Self {
            top: clamp_axis(self.top, max_top),
            left: clamp_axis(self.left, max_left),
        }
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.min(max.max(0.0)).max(0.0)
}

/// Scroll along one axis so `[pos, pos + extent)` lies inside a viewport of
/// `available` length starting at `current`
pub fn reveal(current: f32, pos: f32, extent: f32, available: f32) -> f32 {
    if pos < current {
        pos
    } else if pos + extent > current + available {
        (pos + extent - available).max(0.0)
    } else {
        current
    }
}

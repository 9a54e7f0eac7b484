//! Polar geometry of the palette disc.
//!
//! Bidirectional mapping between palette-local points and (hue, saturation)
//! pairs. Points use the palette's top-left origin with y growing downward;
//! the disc is inscribed in the square `[0, 2R] x [0, 2R]` with its center at
//! `(R, R)`. The radius is passed explicitly into every function so the
//! transforms stay pure and independently testable.

use core::f32::consts::TAU;

/// A point in palette-local coordinates (top-left origin, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PalettePoint {
    pub x: f32,
    pub y: f32,
}

impl PalettePoint {
    /// Creates a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Reads hue and saturation off the palette disc at a point.
///
/// Hue is the point's angle around the center, counter-clockwise from the
/// positive x axis, as a fraction of a full turn in `[0, 1)`. Saturation is
/// the distance from the center divided by `radius` and clamped to `[0, 1]`;
/// points beyond the disc edge read as fully saturated rather than being
/// rejected.
pub fn hue_saturation_at(point: PalettePoint, radius: f32) -> (f32, f32) {
    let dx = point.x - radius;
    let dy = point.y - radius;

    // Screen y grows downward; negate it so hue sweeps counter-clockwise.
    let angle = libm::atan2f(-dy, dx);
    let hue = ((angle + TAU) % TAU) / TAU;

    let distance = libm::sqrtf(dx * dx + dy * dy);
    let saturation = distance.min(radius) / radius;

    (hue, saturation)
}

/// Places the cursor for a hue and saturation.
///
/// Inverse of [`hue_saturation_at`] for saturation in `[0, 1]`: the cursor
/// sits at angle `hue * 2pi` and distance `saturation * radius` from the
/// center, translated back into top-left-origin coordinates.
pub fn cursor_position(hue: f32, saturation: f32, radius: f32) -> PalettePoint {
    let angle = hue * TAU;
    let arm = saturation * radius;

    PalettePoint::new(
        libm::cosf(angle) * arm + radius,
        -libm::sinf(angle) * arm + radius,
    )
}

/// Whether a point lies on the palette disc. The edge counts as inside.
///
/// Unlike the forgiving saturation clamp, this is a strict boundary test:
/// the control only claims touches that land on the disc itself.
pub fn disc_contains(point: PalettePoint, radius: f32) -> bool {
    let dx = point.x - radius;
    let dy = point.y - radius;
    libm::sqrtf(dx * dx + dy * dy) <= radius
}

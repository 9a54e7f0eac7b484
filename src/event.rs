//! Input events for driving a color circle.

use crate::geometry::PalettePoint;

/// A touch or gesture event in the control's local coordinate space.
///
/// Produced by an adapter for the host toolkit and fed to
/// [`ColorCircle::handle_event`](crate::ColorCircle::handle_event). The
/// control tracks a single touch at a time, so move/end events carry no
/// touch identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// A touch landed at `point`. `active_touches` counts every touch
    /// currently down on the control, including this one.
    Down {
        point: PalettePoint,
        active_touches: usize,
    },

    /// The tracked touch moved.
    Moved { point: PalettePoint },

    /// The tracked touch lifted.
    Ended,

    /// The tracked touch was taken away by the system.
    Cancelled,

    /// One tick of a pinch gesture. Only the sign of `velocity` matters:
    /// pinch-out brightens, pinch-in dims.
    Pinch { velocity: f32 },
}

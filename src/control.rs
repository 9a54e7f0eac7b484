//! The color circle control: touch tracking, pinch brightness and cursor
//! synchronization on top of [`ColorModel`].
//!
//! Provides [`ColorCircle`] which owns the color state and the interaction
//! state machine, and drives a [`PaletteView`] implementation whenever the
//! selection changes.

use crate::event::TouchEvent;
use crate::geometry::{self, PalettePoint};
use crate::model::ColorModel;
use palette::Srgb;

/// Trait for the rendering and notification side of the control.
///
/// Implement this for your view layer (a widget toolkit, a framebuffer
/// renderer, a test recorder). The control calls it synchronously from its
/// event handlers, always after its own state is fully updated;
/// implementations only render and forward, they must not call back into
/// the control.
pub trait PaletteView {
    /// Moves the cursor to `position` and recolors it to match the
    /// selection. When `animate` is true the view may run a short visual
    /// transition instead of jumping.
    fn move_cursor(&mut self, position: PalettePoint, color: Srgb, animate: bool);

    /// Reflects a brightness change, e.g. by fading a darkening overlay
    /// whose alpha is `1.0 - brightness`. Called once at setup and then
    /// only when the brightness component actually changes.
    fn set_brightness(&mut self, brightness: f32);

    /// The value-changed notification: the selected color changed through
    /// touch tracking, a pinch tick, or a notifying programmatic set.
    fn value_changed(&mut self, color: Srgb);
}

/// The interaction state of a color circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackingState {
    /// No touch is being tracked.
    Idle,
    /// A touch is down and dragging the selection across the palette.
    Tracking,
}

/// What an input event did to the control.
///
/// Describes the effect on the color state; whether a [`PaletteView`]
/// notification fired additionally depends on the notify rules of the
/// operation (see [`ColorCircle::set_color`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventResponse {
    /// The event was consumed and the selected color changed.
    Changed,
    /// The event was consumed without changing the color.
    Unchanged,
    /// The event was not claimed: the touch landed outside the disc, more
    /// than one touch was down, or no touch was being tracked.
    Ignored,
}

/// Errors that can occur when configuring a control.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// The palette radius must be finite and strictly positive.
    InvalidRadius(f32),
}

impl core::fmt::Display for ControlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControlError::InvalidRadius(radius) => {
                write!(f, "palette radius must be finite and positive, got {}", radius)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ControlError {}

/// A circular color picker.
///
/// Owns the authoritative [`ColorModel`], the palette radius and the
/// tracking state, and keeps an attached [`PaletteView`] in sync. Each
/// control instance is independent; all methods run synchronously on the
/// caller's event-processing thread.
///
/// Touches select hue (angle around the palette center) and saturation
/// (distance from it); pinch ticks nudge brightness. A new control starts
/// at neutral white.
///
/// # Type Parameters
/// * `V` - View implementation driven by this control
pub struct ColorCircle<V: PaletteView> {
    view: V,
    model: ColorModel,
    radius: f32,
    state: TrackingState,
}

impl<V: PaletteView> ColorCircle<V> {
    /// Creates an idle control over a palette disc of the given radius,
    /// selecting neutral white, and pushes the initial cursor position and
    /// brightness to the view.
    ///
    /// The radius is half the palette's square bounding dimension.
    ///
    /// # Errors
    /// * `InvalidRadius` - `radius` is not a finite positive number
    pub fn new(radius: f32, mut view: V) -> Result<Self, ControlError> {
        let radius = validate_radius(radius)?;
        let model = ColorModel::default();

        let cursor = geometry::cursor_position(model.hue(), model.saturation(), radius);
        view.move_cursor(cursor, model.color(), false);
        view.set_brightness(model.brightness());

        Ok(Self {
            view,
            model,
            radius,
            state: TrackingState::Idle,
        })
    }

    /// Handles an input event by dispatching to the appropriate method.
    ///
    /// This is the single entry point an adapter needs; the individual
    /// methods below are also public for adapters that map toolkit
    /// callbacks one-to-one.
    pub fn handle_event(&mut self, event: TouchEvent) -> EventResponse {
        match event {
            TouchEvent::Down {
                point,
                active_touches,
            } => self.begin_tracking(point, active_touches),
            TouchEvent::Moved { point } => self.continue_tracking(point),
            TouchEvent::Ended | TouchEvent::Cancelled => self.end_tracking(),
            TouchEvent::Pinch { velocity } => self.adjust_brightness(velocity),
        }
    }

    /// Starts tracking a touch.
    ///
    /// The touch is claimed only if it is the single active touch and lands
    /// on the palette disc (edge included). A claimed touch immediately
    /// selects the hue and saturation under the finger and notifies.
    pub fn begin_tracking(&mut self, point: PalettePoint, active_touches: usize) -> EventResponse {
        if active_touches != 1 {
            return EventResponse::Ignored;
        }

        if !geometry::disc_contains(point, self.radius) {
            return EventResponse::Ignored;
        }

        self.state = TrackingState::Tracking;
        self.track_to(point)
    }

    /// Continues tracking at a new touch position.
    ///
    /// Once tracking, the drag may leave the disc: there is no boundary
    /// gate here, only the radial saturation clamp. Ignored when no touch
    /// is being tracked.
    pub fn continue_tracking(&mut self, point: PalettePoint) -> EventResponse {
        if self.state != TrackingState::Tracking {
            return EventResponse::Ignored;
        }

        self.track_to(point)
    }

    /// Ends tracking (touch lifted or cancelled).
    pub fn end_tracking(&mut self) -> EventResponse {
        if self.state != TrackingState::Tracking {
            return EventResponse::Ignored;
        }

        self.state = TrackingState::Idle;
        EventResponse::Unchanged
    }

    /// Applies one pinch tick to the brightness.
    ///
    /// Brightness moves by a fixed step of `1 / radius` per tick; only the
    /// sign of `velocity` is used (pinch-out brightens, pinch-in dims, and
    /// `-0.0` counts as pinch-in). The result clamps to `[0, 1]`; a tick
    /// that cannot move past a clamp boundary changes nothing and emits
    /// nothing. Works in both Idle and Tracking states.
    pub fn adjust_brightness(&mut self, velocity: f32) -> EventResponse {
        let step = if velocity.is_sign_negative() { -1.0 } else { 1.0 };
        let old_brightness = self.model.brightness();
        let new_brightness = (old_brightness + step / self.radius).clamp(0.0, 1.0);

        if new_brightness == old_brightness {
            return EventResponse::Unchanged;
        }

        self.model.set_brightness(new_brightness);

        // The cursor keeps its position, but its fill tracks the dimmed color.
        let color = self.model.color();
        self.view.set_brightness(new_brightness);
        self.view.move_cursor(self.cursor_position(), color, false);
        self.view.value_changed(color);

        EventResponse::Changed
    }

    /// Sets the selected color programmatically.
    ///
    /// Decomposes `color` into hue, saturation and brightness (grayscale
    /// handling per [`ColorModel`]) and re-syncs the view. `animate` is
    /// forwarded as the cursor transition hint; `value_changed` fires only
    /// when `notify` is set, so a caller reacting to its own notifications
    /// can update the control without feeding back into itself.
    pub fn set_color(&mut self, color: Srgb, animate: bool, notify: bool) {
        let old_brightness = self.model.brightness();
        self.model.set_color(color);

        let color = self.model.color();
        self.view.move_cursor(self.cursor_position(), color, animate);

        if self.model.brightness() != old_brightness {
            self.view.set_brightness(self.model.brightness());
        }

        if notify {
            self.view.value_changed(color);
        }
    }

    /// Changes the palette radius, re-placing the cursor for the new
    /// geometry without animating or notifying. Layout changes in the
    /// hosting view land here.
    ///
    /// # Errors
    /// * `InvalidRadius` - `radius` is not a finite positive number
    pub fn set_radius(&mut self, radius: f32) -> Result<(), ControlError> {
        self.radius = validate_radius(radius)?;

        let color = self.model.color();
        self.view.move_cursor(self.cursor_position(), color, false);
        Ok(())
    }

    /// Whether the control claims a touch at `point` (disc edge included).
    pub fn hit_test(&self, point: PalettePoint) -> bool {
        geometry::disc_contains(point, self.radius)
    }

    /// The selected color as RGB.
    pub fn color(&self) -> Srgb {
        self.model.color()
    }

    /// The hue fraction in `[0, 1)`.
    pub fn hue(&self) -> f32 {
        self.model.hue()
    }

    /// The saturation fraction in `[0, 1]`.
    pub fn saturation(&self) -> f32 {
        self.model.saturation()
    }

    /// The brightness fraction in `[0, 1]`.
    pub fn brightness(&self) -> f32 {
        self.model.brightness()
    }

    /// Where the cursor sits for the current selection.
    pub fn cursor_position(&self) -> PalettePoint {
        geometry::cursor_position(self.model.hue(), self.model.saturation(), self.radius)
    }

    /// The palette radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The current interaction state.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Returns true while a touch is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    /// Returns a reference to the attached view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns a mutable reference to the attached view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Selects the hue and saturation under `point` and syncs the view.
    /// The model is fully updated before any view call.
    fn track_to(&mut self, point: PalettePoint) -> EventResponse {
        let (hue, saturation) = geometry::hue_saturation_at(point, self.radius);
        self.model.set_hue(hue);
        self.model.set_saturation(saturation);

        let color = self.model.color();
        self.view.move_cursor(self.cursor_position(), color, false);
        self.view.value_changed(color);

        EventResponse::Changed
    }
}

fn validate_radius(radius: f32) -> Result<f32, ControlError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ControlError::InvalidRadius(radius))
    }
}

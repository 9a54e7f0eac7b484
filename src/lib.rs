#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorCircle`**: The control itself; tracks touches, applies pinch brightness and keeps a view in sync
//! - **`ColorModel`**: Authoritative hue/saturation/brightness state with RGB conversion
//! - **`PaletteView`**: Trait to implement for your rendering/notification layer
//! - **`TouchEvent`**: Touch and gesture input in control-local coordinates
//! - **`EventResponse`**: What an input event did to the selection
//! - **`geometry`**: Pure point <-> hue/saturation transforms over the palette disc
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all color values. Hue,
//! saturation and brightness are normalized fractions; hue is the fraction of
//! a full counter-clockwise turn around the palette center.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod control;
pub mod event;
pub mod geometry;
pub mod model;

pub use control::{ColorCircle, ControlError, EventResponse, PaletteView, TrackingState};
pub use event::TouchEvent;
pub use geometry::PalettePoint;
pub use model::ColorModel;

/// The neutral color a fresh control selects: white, i.e. zero saturation at
/// full brightness.
pub const COLOR_NEUTRAL: Srgb = Srgb::new(1.0, 1.0, 1.0);

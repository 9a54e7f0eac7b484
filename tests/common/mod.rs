//! Shared test infrastructure for color-circle integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_circle::{PalettePoint, PaletteView};
use palette::Srgb;

// ============================================================================
// Mock View
// ============================================================================

/// Mock view that records every call the control makes for testing
pub struct MockView {
    cursor_history: heapless::Vec<CursorMove, 256>,
    brightness_history: heapless::Vec<f32, 256>,
    change_history: heapless::Vec<Srgb, 256>,
}

/// One recorded `move_cursor` call
#[derive(Debug, Clone, Copy)]
pub struct CursorMove {
    pub position: PalettePoint,
    pub color: Srgb,
    pub animate: bool,
}

impl MockView {
    pub fn new() -> Self {
        Self {
            cursor_history: heapless::Vec::new(),
            brightness_history: heapless::Vec::new(),
            change_history: heapless::Vec::new(),
        }
    }

    pub fn cursor_history(&self) -> &[CursorMove] {
        &self.cursor_history
    }

    pub fn last_cursor(&self) -> CursorMove {
        *self.cursor_history.last().expect("no cursor moves recorded")
    }

    pub fn brightness_history(&self) -> &[f32] {
        &self.brightness_history
    }

    pub fn change_history(&self) -> &[Srgb] {
        &self.change_history
    }

    /// Number of value-changed notifications received so far
    pub fn notification_count(&self) -> usize {
        self.change_history.len()
    }

    pub fn last_change(&self) -> Srgb {
        *self.change_history.last().expect("no notifications recorded")
    }
}

impl PaletteView for MockView {
    fn move_cursor(&mut self, position: PalettePoint, color: Srgb, animate: bool) {
        let _ = self.cursor_history.push(CursorMove {
            position,
            color,
            animate,
        });
    }

    fn set_brightness(&mut self, brightness: f32) {
        let _ = self.brightness_history.push(brightness);
    }

    fn value_changed(&mut self, color: Srgb) {
        let _ = self.change_history.push(color);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const EPSILON: f32 = 1e-3;

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Compare two palette points with floating-point tolerance
pub fn points_equal(a: PalettePoint, b: PalettePoint) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

/// Distance between two hue fractions on the hue circle
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

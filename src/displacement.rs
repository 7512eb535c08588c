/*
 * Displacement Module
 *
 * Pure functions for the scroll-resistance model. Given the latest scroll
 * delta, the active touch location and an item's anchor, these compute where
 * the item should be pushed to before its spring pulls it back home.
 *
 * Items close to the finger follow the scroll almost immediately, items far
 * away lag behind. The vertical offset never exceeds the raw scroll delta.
 */

use nannou::prelude::{vec2, Vec2};

// The pan recognizer reports the origin when no finger is down
#[inline]
pub fn has_active_touch(touch: Vec2) -> bool {
    touch != Vec2::ZERO
}

// Manhattan distance between the touch point and an anchor
#[inline]
pub fn manhattan_distance(touch: Vec2, anchor: Vec2) -> f32 {
    (touch.y - anchor.y).abs() + (touch.x - anchor.x).abs()
}

/// Unitless resistance factor for an item `distance` units away from the touch.
///
/// A zero divisor yields a factor of zero, which clamps the displacement to
/// nothing instead of dividing by zero.
#[inline]
pub fn scroll_resistance(distance: f32, resistance_divisor: f32) -> f32 {
    if resistance_divisor == 0.0 {
        return 0.0;
    }
    distance / resistance_divisor
}

/// Vertical offset for a scroll `delta` scaled by `resistance`.
///
/// Both operands share the sign of `delta`, so picking the one closer to
/// zero means resistance can only shrink the motion, never amplify it.
#[inline]
pub fn vertical_displacement(delta: f32, resistance: f32) -> f32 {
    if delta < 0.0 {
        delta.max(delta * resistance)
    } else {
        delta.min(delta * resistance)
    }
}

/// Displaced center for an item anchored at `anchor`.
///
/// The horizontal coordinate is always the anchor's. Without an active touch
/// the anchor is returned unchanged.
pub fn displaced_center(anchor: Vec2, delta: f32, touch: Vec2, resistance_divisor: f32) -> Vec2 {
    if !has_active_touch(touch) {
        return anchor;
    }

    let distance = manhattan_distance(touch, anchor);
    let resistance = scroll_resistance(distance, resistance_divisor);

    vec2(anchor.x, anchor.y + vertical_displacement(delta, resistance))
}

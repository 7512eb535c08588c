/*
 * Visibility Module
 *
 * This module works out which items take part in the spring simulation.
 * The visible rectangle is grown by a margin on every side so that items
 * already have an attachment by the time they scroll on screen, which
 * avoids popping at the edges during fast flings.
 */

use std::collections::HashMap;

use nannou::prelude::{Rect, Vec2};

use crate::grid::{Item, ItemId};

// Rectangle from a top-left origin and a size, in content space
pub fn viewport_rect(origin: Vec2, size: Vec2) -> Rect {
    Rect::from_x_y_w_h(
        origin.x + size.x / 2.0,
        origin.y + size.y / 2.0,
        size.x,
        size.y,
    )
}

// Grow the rectangle outward by `margin` on each side
pub fn expanded_rect(viewport: Rect, margin: f32) -> Rect {
    Rect::from_x_y_w_h(
        viewport.x(),
        viewport.y(),
        viewport.w() + 2.0 * margin,
        viewport.h() + 2.0 * margin,
    )
}

// Inclusive point-in-rectangle test, edges count as inside
#[inline]
pub fn contains(rect: Rect, point: Vec2) -> bool {
    point.x >= rect.left() && point.x <= rect.right() && point.y >= rect.bottom() && point.y <= rect.top()
}

/// Items from `items` whose natural center lies in `area`, keyed by id.
///
/// A repeated id keeps its last center.
pub fn visible_set<I>(items: I, area: Rect) -> HashMap<ItemId, Vec2>
where
    I: IntoIterator<Item = Item>,
{
    items
        .into_iter()
        .filter(|item| contains(area, item.center))
        .map(|item| (item.id, item.center))
        .collect()
}

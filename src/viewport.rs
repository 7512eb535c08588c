/*
 * Viewport Module
 *
 * This module defines the Viewport struct, the scrolling window onto the
 * grid. It tracks the vertical content offset and the active touch, and
 * converts between nannou window coordinates (centered, y up) and content
 * coordinates (top-left origin, y down).
 */

use nannou::prelude::*;

use crate::visibility;

pub struct Viewport {
    pub offset_y: f32,
    pub size: Vec2,
    pub content_height: f32,
    pub is_dragging: bool,
    // Wheel scrolling this frame counts as a touch under the cursor
    pub is_wheeling: bool,
    // Screen-space position of the finger while dragging
    pub last_cursor_pos: Vec2,
    // Scroll requested by input since the last frame
    pending_scroll: f32,
}

impl Viewport {
    pub fn new(size: Vec2) -> Self {
        Self {
            offset_y: 0.0,
            size,
            content_height: 0.0,
            is_dragging: false,
            is_wheeling: false,
            last_cursor_pos: Vec2::ZERO,
            pending_scroll: 0.0,
        }
    }

    // Visible part of the content, in content space
    pub fn rect(&self) -> Rect {
        visibility::viewport_rect(vec2(0.0, self.offset_y), self.size)
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.size.y).max(0.0)
    }

    // Convert a point from nannou window space to screen space
    pub fn window_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        vec2(point.x - window_rect.left(), window_rect.top() - point.y)
    }

    // Convert a point from content space to nannou window space
    pub fn content_to_window(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let screen = vec2(point.x, point.y - self.offset_y);
        vec2(window_rect.left() + screen.x, window_rect.top() - screen.y)
    }

    /// Touch location in content space, or zero when no finger is down.
    pub fn touch_location(&self) -> Vec2 {
        if self.is_dragging || self.is_wheeling {
            vec2(self.last_cursor_pos.x, self.last_cursor_pos.y + self.offset_y)
        } else {
            Vec2::ZERO
        }
    }

    // Queue a scroll to be applied on the next update
    pub fn request_scroll(&mut self, dy: f32) {
        self.pending_scroll += dy;
    }

    /// Apply queued scrolling, clamped to the content.
    ///
    /// Returns the old and new offsets when the offset actually moved.
    pub fn apply_pending_scroll(&mut self) -> Option<(f32, f32)> {
        let dy = std::mem::take(&mut self.pending_scroll);
        if dy == 0.0 {
            return None;
        }

        let old = self.offset_y;
        let new = (old + dy).clamp(0.0, self.max_offset());
        if new == old {
            return None;
        }

        self.offset_y = new;
        Some((old, new))
    }

    // Start dragging at a screen-space position
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Update scrolling while dragging; dragging down pulls the content down
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;

            if delta.length_squared() > 0.0 {
                self.request_scroll(-delta.y);
                self.last_cursor_pos = position;
            }
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    // Scroll with the mouse wheel, the cursor standing in for the finger
    pub fn wheel(&mut self, dy: f32, position: Vec2) {
        if !self.is_dragging {
            self.last_cursor_pos = position;
        }
        self.is_wheeling = true;
        self.request_scroll(dy);
    }

    // Wheel touches only last for the frame they arrived in
    pub fn end_frame(&mut self) {
        self.is_wheeling = false;
    }
}

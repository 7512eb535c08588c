/*
 * Input Module
 *
 * This module handles user input events for the springy grid.
 * Mouse drags stand in for a finger panning the grid and the mouse wheel
 * scrolls with the cursor as the touch point. Events over the settings
 * panel go to egui only.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::Model;

// Points scrolled per wheel line
const LINE_HEIGHT: f32 = 40.0;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;

    if model.viewport.is_dragging {
        let screen = model.viewport.window_to_screen(pos, app.window_rect());
        model.viewport.drag(screen);
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let screen = model.viewport.window_to_screen(model.mouse_position, app.window_rect());
    model.viewport.start_drag(screen);
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.viewport.end_drag();
    }
}

// Mouse wheel event handler for scrolling
pub fn mouse_wheel(app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    // Wheel up reports positive y and should move the content back up
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    };

    let screen = model.viewport.window_to_screen(model.mouse_position, app.window_rect());
    model.viewport.wheel(dy, screen);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

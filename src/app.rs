/*
 * Application Module
 *
 * This module defines the main application model for the springy grid and
 * wires the layout engine into nannou. Each frame it:
 * 1. Applies any change made in the settings panel
 * 2. Turns queued scrolling into a bounds change on the engine
 * 3. Resyncs the attachments with the expanded viewport
 * 4. Mirrors the attachments into the animator and steps the springs
 */

use std::time::Duration;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{info, warn};

use crate::animator::Animator;
use crate::debug::DebugInfo;
use crate::engine::SpringLayoutEngine;
use crate::grid::GridLayout;
use crate::input::{mouse_moved, mouse_pressed, mouse_released, mouse_wheel, raw_window_event};
use crate::params::{ParamsHandle, SpringParams};
use crate::renderer::view;
use crate::settings::{SettingsChange, SettingsPanel};
use crate::viewport::Viewport;
use crate::PRESET_ENV_VAR;

// Main model for the application
pub struct Model {
    pub engine: SpringLayoutEngine,
    pub animator: Animator,
    pub grid: GridLayout,
    pub viewport: Viewport,
    pub settings: SettingsPanel,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
}

// Starting parameters, from the preset named in the environment if any
fn initial_params() -> SpringParams {
    let name = std::env::var(PRESET_ENV_VAR).ok();

    match SpringParams::from_preset_name(name.as_deref()) {
        Ok(params) => params,
        Err(err) => {
            warn!(%err, "ignoring {}, using the Original preset", PRESET_ENV_VAR);
            SpringParams::default()
        }
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Springy Collection")
        .size(400, 700)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_wheel(mouse_wheel)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window closed during setup");
    let egui = Egui::from_window(&window);

    let engine = SpringLayoutEngine::new(ParamsHandle::new(initial_params()));
    let settings = SettingsPanel::new(engine.params_handle());

    let grid = GridLayout::default();
    let window_size = app.window_rect().wh();
    let mut viewport = Viewport::new(window_size);
    viewport.content_height = grid.content_height(window_size.x);

    let initial = engine.parameters();
    info!(
        items = grid.item_count(),
        columns = grid.columns(window_size.x),
        damping = initial.damping,
        frequency = initial.frequency,
        resistance_divisor = initial.resistance_divisor,
        "springy grid ready"
    );

    Model {
        engine,
        animator: Animator::new(),
        grid,
        viewport,
        settings,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Settings panel writes go through the engine
    match model.settings.update(&mut model.egui, &model.debug_info) {
        Some(SettingsChange::Sliders(params)) => {
            model.engine.set_parameters(params.damping, params.frequency, params.resistance_divisor);
        }
        Some(SettingsChange::Preset(preset)) => {
            model.engine.apply_preset(preset);
        }
        None => {}
    }

    // The grid reflows when the window width changes, so anchors are stale
    let window_size = app.window_rect().wh();
    if window_size != model.viewport.size {
        model.viewport.size = window_size;
        model.viewport.content_height = model.grid.content_height(window_size.x);
        model.viewport.offset_y = model.viewport.offset_y.min(model.viewport.max_offset());
        model.engine.clear();
        model.animator.clear();
    }

    // Scrolling: displace what is attached, then resync so newcomers are
    // seeded with the same delta
    let scrolled = match model.viewport.apply_pending_scroll() {
        Some((old, new)) => {
            let touch = model.viewport.touch_location();
            model.debug_info.last_delta = model.engine.on_bounds_change(old, new, touch);
            true
        }
        None => false,
    };

    model.debug_info.last_resync = model.engine.resync_grid(model.viewport.rect(), &model.grid);

    model.animator.sync(&model.engine);
    if scrolled {
        model.animator.kick(&model.engine);
    }
    model.animator.step(step_seconds(update.since_last));
    model.viewport.end_frame();

    model.debug_info.attached_items = model.engine.len();
    model.debug_info.animated_items = model.animator.len();
    model.debug_info.content_offset = model.viewport.offset_y;
}

// Frame time fed to the springs, capped so a stalled frame doesn't teleport items
fn step_seconds(since_last: Duration) -> f32 {
    since_last.as_secs_f32().min(1.0 / 15.0)
}

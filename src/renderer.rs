/*
 * Renderer Module
 *
 * This module draws the springy grid. Only attached items are drawn, at the
 * position their spring currently holds them; the expanded visibility
 * rectangle is outlined when debug info is on.
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let window_rect = app.window_rect();
    let item_size = model.grid.item_size();

    for (id, center) in model.engine.frame() {
        let position = model.animator.position(id).unwrap_or(center);
        let xy = model.viewport.content_to_window(position, window_rect);

        draw.rect()
            .xy(xy)
            .w_h(item_size, item_size)
            .color(ORANGE);
    }

    if model.settings.show_debug {
        let area = model.engine.expanded_rect(model.viewport.rect());
        let top_left = model.viewport.content_to_window(vec2(area.left(), area.bottom()), window_rect);
        let bottom_right = model.viewport.content_to_window(vec2(area.right(), area.top()), window_rect);

        draw.rect()
            .xy(pt2((top_left.x + bottom_right.x) / 2.0, (top_left.y + bottom_right.y) / 2.0))
            .wh(vec2(bottom_right.x - top_left.x, top_left.y - bottom_right.y))
            .no_fill()
            .stroke_weight(2.0)
            .stroke(rgba(0.2, 0.4, 1.0, 0.7));

        // Touch point
        let touch = model.viewport.touch_location();
        if touch != Vec2::ZERO {
            draw.ellipse()
                .xy(model.viewport.content_to_window(touch, window_rect))
                .radius(6.0)
                .color(rgba(1.0, 0.0, 0.0, 0.6));
        }
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to draw frame");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(?err, "failed to draw settings panel");
    }
}

/*
 * Springy Grid
 *
 * A scrolling grid of items tethered to their resting positions by springs.
 * While the grid scrolls, items near the touch point follow it closely and
 * items further away lag behind and bounce back into place.
 *
 * Drag with the mouse to pan, or use the wheel. The settings panel adjusts
 * damping, frequency and scroll resistance, and offers a few presets.
 * Set SPRINGY_PRESET (original, imessage, bouncy, stiff) to pick the
 * starting preset and RUST_LOG to control logging.
 */

use tracing_subscriber::EnvFilter;

use springy_grid::app;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("springy_grid=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    nannou::app(app::model).update(app::update).run();
}

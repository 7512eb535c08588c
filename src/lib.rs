/*
 * Springy Grid - Module Definitions
 *
 * This file defines the module structure for the springy grid. The layout
 * core (displacement, attachment, visibility, engine) has no windowing
 * dependencies beyond nannou's geometry types; the remaining modules wire
 * it into a nannou window with an egui settings panel.
 */

// Re-export key components for easier access
pub use animator::Animator;
pub use attachment::Attachment;
pub use debug::DebugInfo;
pub use engine::{ResyncReport, ScrollState, SpringLayoutEngine};
pub use error::LayoutError;
pub use grid::{GridLayout, Item, ItemId};
pub use params::{ParamsHandle, Preset, SpringParams};
pub use viewport::Viewport;
pub use app::Model;

// Define modules
pub mod displacement;
pub mod attachment;
pub mod visibility;
pub mod engine;
pub mod animator;
pub mod grid;
pub mod params;
pub mod error;
pub mod viewport;
pub mod debug;
pub mod settings;
pub mod app;
pub mod renderer;
pub mod input;

// Constants
pub const ITEM_SIZE: f32 = 44.0;
pub const ITEM_SPACING: f32 = 10.0;
pub const SECTION_INSET: f32 = 10.0;
pub const ITEM_COUNT: usize = 10_000;
// Outward padding of the visible rectangle when picking attached items
pub const VISIBLE_MARGIN: f32 = 100.0;
// Environment variable naming the preset to start with
pub const PRESET_ENV_VAR: &str = "SPRINGY_PRESET";

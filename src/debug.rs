/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with the counters shown in the
 * settings panel:
 * - FPS (frames per second) and frame time
 * - Attached items and live springs
 * - Last scroll delta and content offset
 * - Churn of the last resync
 */

use std::time::Duration;

use crate::engine::ResyncReport;

#[derive(Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub attached_items: usize,
    pub animated_items: usize,
    pub last_delta: f32,
    pub content_offset: f32,
    pub last_resync: ResyncReport,
}

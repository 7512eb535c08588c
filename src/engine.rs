/*
 * Spring Layout Engine Module
 *
 * This module defines the SpringLayoutEngine, the state machine behind the
 * springy grid. The hosting app drives it through a few entry points:
 *
 * - resync: reconcile the attachment registry with the items whose natural
 *   center is inside the expanded visible rectangle
 * - on_scroll_delta / on_bounds_change: record the latest scroll and push
 *   every attached item away from its anchor
 * - set_parameters / apply_preset: retune the springs
 * - query_displaced_center / frame: read back where items should be drawn
 *
 * Everything happens on the UI thread, one event at a time, so the registry
 * is a plain HashMap without locking.
 */

use std::collections::HashMap;

use nannou::prelude::{Rect, Vec2};
use tracing::{debug, trace};

use crate::attachment::Attachment;
use crate::grid::{GridLayout, Item, ItemId};
use crate::params::{ParamsHandle, Preset, SpringParams};
use crate::visibility;
use crate::VISIBLE_MARGIN;

/// Most recent scroll event as seen by the layout
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub last_delta: f32,
    // Zero when no finger is down
    pub touch_location: Vec2,
}

/// How many attachments a resync created and removed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResyncReport {
    pub added: usize,
    pub removed: usize,
}

impl ResyncReport {
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

pub struct SpringLayoutEngine {
    attachments: HashMap<ItemId, Attachment>,
    params: ParamsHandle,
    scroll: ScrollState,
    margin: f32,
}

impl SpringLayoutEngine {
    pub fn new(params: ParamsHandle) -> Self {
        Self {
            attachments: HashMap::new(),
            params,
            scroll: ScrollState::default(),
            margin: VISIBLE_MARGIN,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    // Another handle on the same parameters, for the settings panel
    pub fn params_handle(&self) -> ParamsHandle {
        self.params.clone()
    }

    pub fn parameters(&self) -> SpringParams {
        self.params.get()
    }

    /// Store new tuning values. Nothing is range-checked.
    ///
    /// Only attachments created after this call pick up the new damping and
    /// frequency; the resistance divisor applies from the next update on.
    pub fn set_parameters(&mut self, damping: f32, frequency: f32, resistance_divisor: f32) {
        let params = SpringParams::new(damping, frequency, resistance_divisor);
        debug!(damping, frequency, resistance_divisor, "spring parameters changed");
        self.params.set(params);
    }

    // Apply a preset and echo back what was stored
    pub fn apply_preset(&mut self, preset: Preset) -> SpringParams {
        let params = preset.params();
        debug!(%preset, "applying preset");
        self.set_parameters(params.damping, params.frequency, params.resistance_divisor);
        self.parameters()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn expanded_rect(&self, viewport: Rect) -> Rect {
        visibility::expanded_rect(viewport, self.margin)
    }

    /// Make the registry match the items whose natural center lies in the
    /// expanded viewport.
    ///
    /// `items` may be a superset; anything outside the expanded rectangle is
    /// ignored. New attachments are displaced straight away using the last
    /// scroll delta and touch, so they line up with their neighbours.
    pub fn resync<I>(&mut self, viewport: Rect, items: I) -> ResyncReport
    where
        I: IntoIterator<Item = Item>,
    {
        let area = self.expanded_rect(viewport);
        let visible = visibility::visible_set(items, area);

        // Step 1: detach items that left the expanded rectangle
        let before = self.attachments.len();
        self.attachments.retain(|id, _| visible.contains_key(id));
        let removed = before - self.attachments.len();

        // Step 2: attach newly visible items
        let params = self.params.get();
        let mut added = 0;
        for (id, center) in visible {
            if self.attachments.contains_key(&id) {
                continue;
            }

            let mut attachment = Attachment::new(Item { id, center }, &params);
            attachment.displace(
                self.scroll.last_delta,
                self.scroll.touch_location,
                params.resistance_divisor,
            );
            self.attachments.insert(id, attachment);
            added += 1;
        }

        let report = ResyncReport { added, removed };
        if !report.is_noop() {
            debug!(added, removed, attached = self.attachments.len(), "resynced attachments");
        }
        report
    }

    /// Resync against a grid, laid out at the viewport's width.
    pub fn resync_grid(&mut self, viewport: Rect, grid: &GridLayout) -> ResyncReport {
        let area = self.expanded_rect(viewport);
        let items = grid.items_in_rect(area, viewport.w());
        self.resync(viewport, items)
    }

    /// Record a scroll and displace every attached item.
    ///
    /// Positive deltas mean the content offset grew. The displacement is
    /// always measured from the anchor, never compounded onto the previous
    /// center.
    pub fn on_scroll_delta(&mut self, delta: f32, touch: Vec2) {
        self.scroll = ScrollState {
            last_delta: delta,
            touch_location: touch,
        };

        let divisor = self.params.get().resistance_divisor;
        for attachment in self.attachments.values_mut() {
            attachment.displace(delta, touch, divisor);
        }

        trace!(delta, touch_x = touch.x, touch_y = touch.y, attached = self.attachments.len(), "scroll delta applied");
    }

    // Bounds moved from one vertical origin to another; returns the delta
    pub fn on_bounds_change(&mut self, old_origin_y: f32, new_origin_y: f32, touch: Vec2) -> f32 {
        let delta = new_origin_y - old_origin_y;
        self.on_scroll_delta(delta, touch);
        delta
    }

    // Detach everything, e.g. after the grid reflowed
    pub fn clear(&mut self) {
        if !self.attachments.is_empty() {
            debug!(removed = self.attachments.len(), "cleared attachments");
        }
        self.attachments.clear();
    }

    pub fn query_displaced_center(&self, id: ItemId) -> Option<Vec2> {
        self.attachments.get(&id).map(|attachment| attachment.center)
    }

    pub fn attachment(&self, id: ItemId) -> Option<&Attachment> {
        self.attachments.get(&id)
    }

    pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.values()
    }

    pub fn is_attached(&self, id: ItemId) -> bool {
        self.attachments.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    /// Attached items whose displaced center lies in `rect`, sorted by id.
    pub fn items_in_rect(&self, rect: Rect) -> Vec<(ItemId, Vec2)> {
        let mut items: Vec<_> = self
            .attachments
            .values()
            .filter(|attachment| visibility::contains(rect, attachment.center))
            .map(|attachment| (attachment.item, attachment.center))
            .collect();
        items.sort_by_key(|(id, _)| *id);
        items
    }

    /// Every attached item with its displaced center, sorted by id.
    pub fn frame(&self) -> Vec<(ItemId, Vec2)> {
        let mut items: Vec<_> = self
            .attachments
            .values()
            .map(|attachment| (attachment.item, attachment.center))
            .collect();
        items.sort_by_key(|(id, _)| *id);
        items
    }
}

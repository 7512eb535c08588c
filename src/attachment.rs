/*
 * Attachment Module
 *
 * An Attachment ties one visible item to the point it rests at. The anchor
 * is fixed when the attachment is created; the center is rewritten on every
 * scroll update.
 *
 * Damping and frequency are copied from the parameters at creation time.
 * Changing the parameters later does not retune attachments that already
 * exist; only the resistance divisor is read live on each update.
 */

use nannou::prelude::Vec2;

use crate::displacement;
use crate::grid::{Item, ItemId};
use crate::params::SpringParams;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attachment {
    pub item: ItemId,
    pub anchor: Vec2,
    pub center: Vec2,
    pub damping: f32,
    pub frequency: f32,
}

impl Attachment {
    pub fn new(item: Item, params: &SpringParams) -> Self {
        Self {
            item: item.id,
            anchor: item.center,
            center: item.center,
            damping: params.damping,
            frequency: params.frequency,
        }
    }

    // Push the center away from the anchor for the given scroll delta
    pub fn displace(&mut self, delta: f32, touch: Vec2, resistance_divisor: f32) {
        self.center = displacement::displaced_center(self.anchor, delta, touch, resistance_divisor);
    }

    // Current offset from the resting position
    pub fn offset(&self) -> Vec2 {
        self.center - self.anchor
    }
}

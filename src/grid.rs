/*
 * Grid Layout Module
 *
 * This module defines the GridLayout struct, the physics-free flow layout
 * that places items row by row with a fixed size, spacing and inset. It
 * answers two questions: where is item N's natural center, and which items
 * have their center inside a rectangle.
 *
 * Coordinates are content space: origin at the top-left, y grows downward.
 *
 * Optimized for performance by:
 * - Computing the overlapping row/column range directly instead of scanning
 *   every item
 * - Pre-allocating the result for the overlapped cells
 */

use nannou::prelude::{vec2, Rect, Vec2};

use crate::error::LayoutError;
use crate::visibility;
use crate::{ITEM_COUNT, ITEM_SIZE, ITEM_SPACING, SECTION_INSET};

/// Stable identifier of an item, its index in the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// An item paired with its natural center
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub center: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    item_size: f32,
    spacing: f32,
    inset: f32,
    item_count: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            item_size: ITEM_SIZE,
            spacing: ITEM_SPACING,
            inset: SECTION_INSET,
            item_count: ITEM_COUNT,
        }
    }
}

impl GridLayout {
    pub fn new(item_size: f32, spacing: f32, inset: f32, item_count: usize) -> Result<Self, LayoutError> {
        if item_size <= 0.0 || !item_size.is_finite() {
            return Err(LayoutError::InvalidGrid { reason: "item size must be positive" });
        }
        if spacing < 0.0 || !spacing.is_finite() {
            return Err(LayoutError::InvalidGrid { reason: "spacing must not be negative" });
        }
        if inset < 0.0 || !inset.is_finite() {
            return Err(LayoutError::InvalidGrid { reason: "inset must not be negative" });
        }

        Ok(Self {
            item_size,
            spacing,
            inset,
            item_count,
        })
    }

    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    // Distance between the centers of neighbouring items
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.item_size + self.spacing
    }

    // Center of the first item along either axis
    #[inline]
    fn first_center(&self) -> f32 {
        self.inset + self.item_size / 2.0
    }

    // Number of items per row for a given layout width, never less than one
    pub fn columns(&self, width: f32) -> usize {
        let usable = width - 2.0 * self.inset + self.spacing;
        let columns = (usable / self.pitch()).floor();
        if columns >= 1.0 {
            columns as usize
        } else {
            1
        }
    }

    pub fn rows(&self, width: f32) -> usize {
        let columns = self.columns(width);
        (self.item_count + columns - 1) / columns
    }

    // Total scrollable height of the content
    pub fn content_height(&self, width: f32) -> f32 {
        let rows = self.rows(width);
        if rows == 0 {
            return 0.0;
        }
        2.0 * self.inset + rows as f32 * self.pitch() - self.spacing
    }

    /// Natural center of `id`, or `None` if the grid has no such item.
    pub fn natural_center(&self, id: ItemId, width: f32) -> Option<Vec2> {
        if id.0 >= self.item_count {
            return None;
        }

        let columns = self.columns(width);
        let row = id.0 / columns;
        let column = id.0 % columns;

        Some(vec2(
            self.first_center() + column as f32 * self.pitch(),
            self.first_center() + row as f32 * self.pitch(),
        ))
    }

    /// All items whose natural center lies inside `rect`.
    pub fn items_in_rect(&self, rect: Rect, width: f32) -> Vec<Item> {
        if self.item_count == 0 {
            return Vec::new();
        }

        let columns = self.columns(width);
        let rows = self.rows(width);
        let first = self.first_center();
        let pitch = self.pitch();

        // Row/column ranges that can overlap the rectangle, widened by one
        // cell so float rounding never drops an edge item. With y growing
        // downward, bottom() is the smaller y and so the visual top edge.
        let min_row = ((rect.bottom() - first) / pitch).floor() as isize - 1;
        let max_row = ((rect.top() - first) / pitch).ceil() as isize + 1;
        let min_col = ((rect.left() - first) / pitch).floor() as isize - 1;
        let max_col = ((rect.right() - first) / pitch).ceil() as isize + 1;

        if max_row < 0 || max_col < 0 {
            return Vec::new();
        }

        // Clamp to grid boundaries
        let min_row = min_row.clamp(0, rows as isize - 1) as usize;
        let max_row = max_row.clamp(0, rows as isize - 1) as usize;
        let min_col = min_col.clamp(0, columns as isize - 1) as usize;
        let max_col = max_col.clamp(0, columns as isize - 1) as usize;

        let mut items = Vec::with_capacity((max_row - min_row + 1) * (max_col - min_col + 1));

        for row in min_row..=max_row {
            let y = first + row as f32 * pitch;

            for column in min_col..=max_col {
                let index = row * columns + column;
                if index >= self.item_count {
                    break;
                }

                let center = vec2(first + column as f32 * pitch, y);
                if visibility::contains(rect, center) {
                    items.push(Item { id: ItemId(index), center });
                }
            }
        }

        items
    }
}

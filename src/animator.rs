/*
 * Animator Module
 *
 * The engine only says where an item is pushed to. The Animator turns that
 * into motion: each attached item gets a damped spring pulling its drawn
 * position from the displaced center back to the anchor.
 *
 * Springs are solved in closed form, so a large frame time does not blow
 * up the simulation. The regime follows the magnitude of the damping ratio:
 * - |damping| < 1: underdamped, overshoots and oscillates
 * - |damping| = 1: critically damped, settles without overshoot
 * - |damping| > 1: overdamped, creeps back without overshoot
 *
 * A negative ratio keeps its sign and feeds energy in, so the item swings
 * further out instead of settling.
 */

use std::collections::HashMap;
use std::f32::consts::TAU;

use nannou::prelude::Vec2;

use crate::engine::SpringLayoutEngine;
use crate::grid::ItemId;

// Damping ratios this close to +/-1 use the critically damped solution
const CRITICAL_EPSILON: f32 = 1e-4;

/// Damped spring for a single item, relaxing towards its anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemSpring {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    angular_freq: f32,
    damping: f32,
}

impl ItemSpring {
    pub fn new(position: Vec2, target: Vec2, frequency_hz: f32, damping: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target,
            angular_freq: TAU * frequency_hz,
            damping,
        }
    }

    pub fn update(&mut self, dt: f32) {
        let w = self.angular_freq;

        // No stiffness, nothing pulls the item back
        if w <= 0.0 {
            self.position += self.velocity * dt;
            return;
        }

        let x0 = self.position - self.target;
        let v0 = self.velocity;

        let zeta = self.damping;
        let decay = zeta * w;
        let discriminant = 1.0 - zeta * zeta;

        let (offset, velocity) = if discriminant > CRITICAL_EPSILON {
            let wd = w * discriminant.sqrt();
            let exp_term = (-decay * dt).exp();
            let cos_term = (wd * dt).cos();
            let sin_term = (wd * dt).sin();

            let a = x0;
            let b = (v0 + x0 * decay) / wd;

            let new_x = (a * cos_term + b * sin_term) * exp_term;
            let v_cos = b * wd - a * decay;
            let v_sin = a * wd + b * decay;
            let new_v = (v_cos * cos_term - v_sin * sin_term) * exp_term;
            (new_x, new_v)
        } else if discriminant < -CRITICAL_EPSILON {
            // Two real roots, both carrying the sign of the damping ratio
            let spread = w * (-discriminant).sqrt();
            let r1 = -decay + spread;
            let r2 = -decay - spread;

            let c2 = (v0 - x0 * r1) / (r2 - r1);
            let c1 = x0 - c2;
            let e1 = (r1 * dt).exp();
            let e2 = (r2 * dt).exp();

            let new_x = c1 * e1 + c2 * e2;
            let new_v = c1 * (r1 * e1) + c2 * (r2 * e2);
            (new_x, new_v)
        } else {
            let exp_term = (-decay * dt).exp();
            let c2 = v0 + x0 * decay;
            let new_x = (x0 + c2 * dt) * exp_term;
            let new_v = (c2 - (x0 + c2 * dt) * decay) * exp_term;
            (new_x, new_v)
        };

        self.position = self.target + offset;
        self.velocity = velocity;
    }

    // Jump to a new position, keeping the current velocity
    pub fn kick(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_settled(&self, eps_pos: f32, eps_vel: f32) -> bool {
        (self.position - self.target).length_squared() < eps_pos * eps_pos
            && self.velocity.length_squared() < eps_vel * eps_vel
    }
}

/// Springs for every item the engine currently has attached.
#[derive(Default)]
pub struct Animator {
    springs: HashMap<ItemId, ItemSpring>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror the engine's registry: drop springs for detached items and
    /// create springs for new attachments, starting at their displaced
    /// center with the damping and frequency they were attached with.
    pub fn sync(&mut self, engine: &SpringLayoutEngine) {
        self.springs.retain(|id, _| engine.is_attached(*id));

        for attachment in engine.attachments() {
            self.springs.entry(attachment.item).or_insert_with(|| {
                ItemSpring::new(
                    attachment.center,
                    attachment.anchor,
                    attachment.frequency,
                    attachment.damping,
                )
            });
        }
    }

    // Move every spring to the engine's latest displaced center
    pub fn kick(&mut self, engine: &SpringLayoutEngine) {
        for attachment in engine.attachments() {
            if let Some(spring) = self.springs.get_mut(&attachment.item) {
                spring.kick(attachment.center);
            }
        }
    }

    pub fn clear(&mut self) {
        self.springs.clear();
    }

    pub fn step(&mut self, dt: f32) {
        for spring in self.springs.values_mut() {
            spring.update(dt);
        }
    }

    pub fn position(&self, id: ItemId) -> Option<Vec2> {
        self.springs.get(&id).map(ItemSpring::position)
    }

    pub fn spring(&self, id: ItemId) -> Option<&ItemSpring> {
        self.springs.get(&id)
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn is_settled(&self, eps_pos: f32, eps_vel: f32) -> bool {
        self.springs.values().all(|spring| spring.is_settled(eps_pos, eps_vel))
    }
}

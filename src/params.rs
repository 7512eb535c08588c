/*
 * Spring Parameters Module
 *
 * This module defines the SpringParams struct holding the three tunable
 * values of the springy layout, the slider ranges used by the settings
 * panel, and the named presets.
 *
 * The values live behind a ParamsHandle so the settings panel and the
 * layout engine share one copy instead of mirroring each other.
 */

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::LayoutError;

// Parameters for the springs that can be adjusted via UI
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringParams {
    pub damping: f32,
    pub frequency: f32,
    // Larger divisor = less resistance far from the touch
    pub resistance_divisor: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Preset::Original.params()
    }
}

impl SpringParams {
    pub fn new(damping: f32, frequency: f32, resistance_divisor: f32) -> Self {
        Self {
            damping,
            frequency,
            resistance_divisor,
        }
    }

    /// Starting parameters for an optional preset name; no name means the
    /// Original preset.
    pub fn from_preset_name(name: Option<&str>) -> Result<Self, LayoutError> {
        match name {
            Some(name) => Ok(name.parse::<Preset>()?.params()),
            None => Ok(Self::default()),
        }
    }

    // Get parameter ranges for UI sliders. Values outside these are still
    // accepted by the engine; the ranges only bound the sliders.
    pub fn get_damping_range() -> std::ops::RangeInclusive<f32> {
        0.1..=1.0
    }

    pub fn get_frequency_range() -> std::ops::RangeInclusive<f32> {
        0.5..=3.0
    }

    pub fn get_resistance_range() -> std::ops::RangeInclusive<f32> {
        500.0..=3000.0
    }
}

/// Named parameter sets offered by the settings panel
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Original,
    IMessage,
    Bouncy,
    Stiff,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Original, Preset::IMessage, Preset::Bouncy, Preset::Stiff];

    pub fn label(self) -> &'static str {
        match self {
            Preset::Original => "Original",
            Preset::IMessage => "iMessage",
            Preset::Bouncy => "Bouncy",
            Preset::Stiff => "Stiff",
        }
    }

    pub fn params(self) -> SpringParams {
        match self {
            Preset::Original => SpringParams::new(0.8, 1.0, 1500.0),
            Preset::IMessage => SpringParams::new(0.6, 1.8, 1200.0),
            Preset::Bouncy => SpringParams::new(0.4, 2.2, 1000.0),
            Preset::Stiff => SpringParams::new(0.9, 0.8, 2000.0),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| LayoutError::UnknownPreset(name.to_string()))
    }
}

/// Shared handle to the one live copy of the spring parameters.
///
/// Cloning the handle shares the value. Everything runs on the UI thread,
/// so a `Cell` is enough.
#[derive(Clone, Debug, Default)]
pub struct ParamsHandle(Rc<Cell<SpringParams>>);

impl ParamsHandle {
    pub fn new(params: SpringParams) -> Self {
        Self(Rc::new(Cell::new(params)))
    }

    pub fn get(&self) -> SpringParams {
        self.0.get()
    }

    pub fn set(&self, params: SpringParams) {
        self.0.set(params);
    }

    // True if both handles point at the same parameters
    pub fn shares_with(&self, other: &ParamsHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

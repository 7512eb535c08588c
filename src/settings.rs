/*
 * Settings Module
 *
 * The egui panel used to tune the springs: three labelled sliders, four
 * preset buttons and a few debug counters. The panel reads the current
 * values through the shared ParamsHandle and reports what the user asked
 * for; the app applies it through the engine.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamsHandle, Preset, SpringParams};

/// A change requested from the panel this frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SettingsChange {
    Sliders(SpringParams),
    Preset(Preset),
}

pub struct SettingsPanel {
    params: ParamsHandle,
    pub show_debug: bool,
    // Values at the start of the frame, for change detection
    previous_values: Option<SpringParams>,
}

impl SettingsPanel {
    pub fn new(params: ParamsHandle) -> Self {
        Self {
            params,
            show_debug: false,
            previous_values: None,
        }
    }

    // Take a snapshot of current parameter values for change detection
    fn take_snapshot(&mut self) -> SpringParams {
        let values = self.params.get();
        self.previous_values = Some(values);
        values
    }

    // Check if the slider values moved since the last snapshot
    fn detect_changes(&self, values: &SpringParams) -> bool {
        match &self.previous_values {
            Some(prev) => prev != values,
            None => false,
        }
    }

    /// Draw the panel and return the change the user made, if any.
    pub fn update(&mut self, egui: &mut Egui, debug_info: &DebugInfo) -> Option<SettingsChange> {
        let mut values = self.take_snapshot();
        let mut preset_clicked = None;
        let mut show_debug = self.show_debug;

        let ctx = egui.begin_frame();

        egui::Window::new("Spring Settings")
            .default_pos([10.0, 10.0])
            .show(&ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Damping");
                    ui.label(format!("{:.2}", values.damping));
                });
                ui.add(egui::Slider::new(&mut values.damping, SpringParams::get_damping_range()));

                ui.horizontal(|ui| {
                    ui.label("Frequency");
                    ui.label(format!("{:.2}", values.frequency));
                });
                ui.add(egui::Slider::new(&mut values.frequency, SpringParams::get_frequency_range()));

                ui.horizontal(|ui| {
                    ui.label("Scroll Resistance");
                    ui.label(format!("{:.0}", values.resistance_divisor));
                });
                ui.add(egui::Slider::new(&mut values.resistance_divisor, SpringParams::get_resistance_range()));

                ui.separator();
                ui.label("Presets");
                ui.horizontal(|ui| {
                    for preset in Preset::ALL {
                        if ui.button(preset.label()).clicked() {
                            preset_clicked = Some(preset);
                        }
                    }
                });

                ui.separator();
                ui.checkbox(&mut show_debug, "Show Debug Info");

                if show_debug {
                    ui.label(format!("FPS: {:.1}", debug_info.fps));
                    ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                    ui.label(format!("Attached items: {}", debug_info.attached_items));
                    ui.label(format!("Animated items: {}", debug_info.animated_items));
                    ui.label(format!("Last delta: {:.1}", debug_info.last_delta));
                    ui.label(format!("Content offset: {:.0}", debug_info.content_offset));
                    ui.label(format!(
                        "Last resync: +{} / -{}",
                        debug_info.last_resync.added, debug_info.last_resync.removed
                    ));
                }
            });

        self.show_debug = show_debug;

        // A preset wins over a slider drag in the same frame
        if let Some(preset) = preset_clicked {
            return Some(SettingsChange::Preset(preset));
        }
        if self.detect_changes(&values) {
            return Some(SettingsChange::Sliders(values));
        }
        None
    }
}

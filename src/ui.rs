//! egui control panel. The panel never touches the scene itself, it only
//! reports what the user asked for as [`UiEvent`]s.

use crate::animation::DoorState;
use crate::configurator::{MaterialPreset, Selection, TextureChoice};
use crate::math::{parse_color, to_hex};

/// A user request coming out of the control panel
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    BaseColor(String),
    MaterialPreset(String),
    Texture(String),
    ToggleDoor,
    Light(bool),
}

pub struct ControlPanel {
    color: [u8; 3],
    preset: MaterialPreset,
    texture: TextureChoice,
    light_on: bool,
    door: DoorState,
}

impl ControlPanel {
    pub fn from_selection(selection: &Selection, light_on: bool) -> Self {
        let rgb = parse_color(&selection.color).unwrap_or([0.5, 0.5, 0.5]);
        Self {
            color: rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8),
            preset: selection.preset,
            texture: selection.texture,
            light_on,
            door: DoorState::Closed,
        }
    }

    /// Keeps the door button label in step with the animation state
    pub fn set_door(&mut self, door: DoorState) {
        self.door = door;
    }

    pub fn show(&mut self, ctx: &egui::Context, fps: f32) -> Vec<UiEvent> {
        let mut events = Vec::new();

        egui::SidePanel::right("configurator")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Configurator");
                ui.add_space(5.0);
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Base color");
                    if ui.color_edit_button_srgb(&mut self.color).changed() {
                        let rgb = self.color.map(|c| c as f32 / 255.0);
                        events.push(UiEvent::BaseColor(to_hex(rgb)));
                    }
                });

                let preset = self.preset;
                egui::ComboBox::from_label("Material")
                    .selected_text(preset.name())
                    .show_ui(ui, |ui| {
                        for option in MaterialPreset::ALL {
                            ui.selectable_value(&mut self.preset, option, option.name());
                        }
                    });
                if self.preset != preset {
                    events.push(UiEvent::MaterialPreset(self.preset.name().to_string()));
                }

                let texture = self.texture;
                egui::ComboBox::from_label("Texture")
                    .selected_text(texture.name())
                    .show_ui(ui, |ui| {
                        for option in TextureChoice::ALL {
                            ui.selectable_value(&mut self.texture, option, option.name());
                        }
                    });
                if self.texture != texture {
                    events.push(UiEvent::Texture(self.texture.name().to_string()));
                }

                ui.add_space(5.0);
                let label = match self.door {
                    DoorState::Closed => "Open door",
                    DoorState::Open => "Close door",
                };
                if ui.button(label).clicked() {
                    self.door = self.door.toggled();
                    events.push(UiEvent::ToggleDoor);
                }

                if ui.checkbox(&mut self.light_on, "Indicator light").changed() {
                    events.push(UiEvent::Light(self.light_on));
                }

                ui.add_space(10.0);
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{:.0} FPS", fps))
                        .monospace()
                        .color(egui::Color32::GRAY),
                );
            });

        events
    }
}

use crate::prelude::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub struct ConfigEguiPlugin;

impl Plugin for ConfigEguiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_visuals_system)
            .add_systems(Update, ui_system);
    }
}

fn configure_visuals_system(mut contexts: EguiContexts) {
    contexts.ctx_mut().set_visuals(egui::Visuals {
        window_corner_radius: 0.0.into(),
        ..Default::default()
    });
}

/// A widget has committed once the interaction ends, not while the value is
/// still being dragged.
fn finished(response: &egui::Response) -> bool {
    response.drag_stopped() || response.lost_focus()
}

fn ui_system(
    mut contexts: EguiContexts,
    mut draft: ResMut<GalaxyConfigDraft>,
    particle_count: Res<ParticleCount>,
    mut commits: EventWriter<ConfigCommitted>,
) {
    let ctx = contexts.ctx_mut();

    let minval = GalaxyParams::MIN;
    let maxval = GalaxyParams::MAX;
    let mut committed = false;

    egui::SidePanel::left("side_panel")
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Configuration");

            egui::CollapsingHeader::new("Galaxy Parameters")
                .default_open(true)
                .show(ui, |ui| {
                    committed |= finished(&ui.add(
                        egui::Slider::new(&mut draft.params.count, minval.count..=maxval.count)
                            .step_by(100.0)
                            .text("Count"),
                    ));
                    committed |= finished(&ui.add(
                        egui::Slider::new(&mut draft.params.size, minval.size..=maxval.size)
                            .text("Size"),
                    ));
                    committed |= finished(&ui.add(
                        egui::Slider::new(&mut draft.params.radius, minval.radius..=maxval.radius)
                            .text("Radius"),
                    ));
                    committed |= finished(&ui.add(
                        egui::Slider::new(
                            &mut draft.params.branches,
                            minval.branches..=maxval.branches,
                        )
                        .text("Branches"),
                    ));
                    committed |= finished(&ui.add(
                        egui::Slider::new(&mut draft.params.spin, minval.spin..=maxval.spin)
                            .step_by(0.05)
                            .text("Spin"),
                    ));
                });

            egui::CollapsingHeader::new("Diagnostics").show(ui, |ui| {
                committed |= ui
                    .checkbox(&mut draft.diagnostic_mode, "Log branch assignment")
                    .changed();
            });

            ui.separator();
            ui.label(format!("{} particles", particle_count.count));
        });

    if committed {
        commits.write(ConfigCommitted);
    }
}

//! Galaxy parameter panel.
//!
//! Binds every field of the parameter record to an egui control with the
//! declared bounds and step. Generator-relevant fields report a regeneration
//! only on commit (drag end or focus loss), never on intermediate drag
//! values. Point size and the gravity fields are read live each frame and
//! need no regeneration.

use crate::params::{bounds, GalaxyParams};

/// What the panel asked for this frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanelOutput {
    /// A generator-relevant parameter was committed; rebuild the point cloud.
    pub regenerate: bool,
}

/// Drag-style controls commit when the drag ends or keyboard editing leaves
/// the field.
fn committed(resp: &egui::Response) -> bool {
    resp.drag_stopped() || resp.lost_focus()
}

/// Draw the panel and report whether the galaxy must be regenerated.
pub fn draw(ctx: &egui::Context, params: &mut GalaxyParams, fps: f32) -> PanelOutput {
    let mut out = PanelOutput::default();

    egui::Window::new("Galaxy")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Shape");
            ui.separator();

            let (min, max, step) = bounds::COUNT;
            let resp = ui.add(
                egui::Slider::new(&mut params.count, min..=max)
                    .step_by(step)
                    .text("count"),
            );
            out.regenerate |= committed(&resp);

            let (min, max, step) = bounds::RADIUS;
            let resp = ui.add(
                egui::Slider::new(&mut params.radius, min..=max)
                    .step_by(step)
                    .text("radius"),
            );
            out.regenerate |= committed(&resp);

            let (min, max, step) = bounds::BRANCHES;
            let resp = ui.add(
                egui::Slider::new(&mut params.branches, min..=max)
                    .step_by(step)
                    .text("branches"),
            );
            out.regenerate |= committed(&resp);

            let (min, max, step) = bounds::SPIN;
            let resp = ui.add(
                egui::Slider::new(&mut params.spin, min..=max)
                    .step_by(step)
                    .text("spin"),
            );
            out.regenerate |= committed(&resp);

            let (min, max, step) = bounds::RANDOMNESS;
            let resp = ui.add(
                egui::Slider::new(&mut params.randomness, min..=max)
                    .step_by(step)
                    .text("randomness"),
            );
            out.regenerate |= committed(&resp);

            let (min, max, step) = bounds::RANDOMNESS_POWER;
            let resp = ui.add(
                egui::Slider::new(&mut params.randomness_power, min..=max)
                    .step_by(step)
                    .text("randomness power"),
            );
            out.regenerate |= committed(&resp);

            ui.separator();
            ui.heading("Color");
            ui.separator();

            let mut inside = params.inside_color.to_array();
            if ui.color_edit_button_rgb(&mut inside).changed() {
                params.inside_color = inside.into();
                out.regenerate = true;
            }
            ui.label("inside color");

            let mut outside = params.outside_color.to_array();
            if ui.color_edit_button_rgb(&mut outside).changed() {
                params.outside_color = outside.into();
                out.regenerate = true;
            }
            ui.label("outside color");

            ui.separator();
            ui.heading("Live");
            ui.separator();

            let (min, max, step) = bounds::SIZE;
            ui.add(
                egui::Slider::new(&mut params.size, min..=max)
                    .step_by(step)
                    .text("point size"),
            );

            let (min, max, step) = bounds::GRAVITY;
            ui.add(
                egui::Slider::new(&mut params.gravity, min..=max)
                    .step_by(step)
                    .text("gravity"),
            );

            let (min, max, step) = bounds::GRAVITY_POWER;
            ui.add(
                egui::Slider::new(&mut params.gravity_power, min..=max)
                    .step_by(step)
                    .text("gravity falloff"),
            );

            ui.separator();
            ui.label(format!("{} particles / {fps:.0} fps", params.count));
            ui.label("Drag to orbit, scroll to zoom");
            ui.label("Move the cursor to pull stars toward it");
        });

    out
}

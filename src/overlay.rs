use crate::controller::AnimationController;
use crate::shape::ShapeKind;

/// Snapshot of what the overlay panel shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayInfo {
    pub fps: f32,
    pub shape: Option<ShapeKind>,
    /// Animated parameters with their value and current step
    pub parameters: Vec<(String, f32, f32)>,
    pub camera: [f32; 3],
}

impl OverlayInfo {
    pub fn capture(controller: &AnimationController, fps: f32) -> Self {
        let shape = controller.shape();
        let parameters = shape
            .map(|shape| {
                controller
                    .deltas()
                    .tracks(shape.kind())
                    .iter()
                    .filter_map(|track| {
                        let value = shape.parameters.get(track.parameter)?;
                        Some((track.parameter.to_string(), value, track.delta))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            fps,
            shape: shape.map(|s| s.kind()),
            parameters,
            camera: controller.camera().position.to_array(),
        }
    }

    pub fn show(&self, ctx: &egui::Context) {
        egui::Window::new("Shape")
            .title_bar(false)
            .resizable(false)
            .fixed_pos(egui::pos2(10.0, 10.0))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} FPS", self.fps))
                        .size(20.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                let title = self.shape.map_or("none", ShapeKind::name);
                ui.heading(title);

                egui::Grid::new("parameters").striped(true).show(ui, |ui| {
                    for (name, value, delta) in &self.parameters {
                        ui.label(name);
                        ui.monospace(format!("{value:8.3}"));
                        ui.monospace(format!("{delta:+.3}"));
                        ui.end_row();
                    }
                });

                let [x, y, z] = self.camera;
                ui.label(
                    egui::RichText::new(format!("camera {x:.1} {y:.1} {z:.1}"))
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                );
                ui.label(
                    egui::RichText::new("1-5 shape, 0 clear, wheel zoom, Esc quit")
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lists_animated_parameters() {
        let controller = AnimationController::new(800, 600).with_shape(ShapeKind::Sphere);
        let info = OverlayInfo::capture(&controller, 60.0);
        assert_eq!(info.shape, Some(ShapeKind::Sphere));
        let names: Vec<_> = info.parameters.iter().map(|(name, _, _)| name.as_str()).collect();
        assert_eq!(names, ["theta_length", "phi_length"]);
    }

    #[test]
    fn test_capture_without_shape() {
        let controller = AnimationController::new(800, 600);
        let info = OverlayInfo::capture(&controller, 0.0);
        assert_eq!(info.shape, None);
        assert!(info.parameters.is_empty());
    }
}

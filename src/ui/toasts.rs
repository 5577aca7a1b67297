use crate::notify::{ToastKind, Toasts};
use crate::theme::Palette;
use egui::{RichText, Stroke};

const TOAST_WIDTH: f32 = 300.0;

pub fn draw_toasts(ctx: &egui::Context, toasts: &Toasts, palette: &Palette) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            ui.set_max_width(TOAST_WIDTH);
            for toast in toasts.active() {
                let (icon, color) = match toast.kind {
                    ToastKind::Success => ("✔", palette.success),
                    ToastKind::Error => ("✖", palette.error),
                };

                egui::Frame::default()
                    .fill(palette.card)
                    .stroke(Stroke::new(1.0, color))
                    .inner_margin(10.0)
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(color, icon);
                            ui.label(RichText::new(&toast.message).color(palette.text));
                        });
                    });
                ui.add_space(6.0);
            }
        });
}

pub mod categories;
pub mod filters;
pub mod toasts;

use crate::form::FilterForm;
use crate::notify::Notifier;
use crate::theme::Palette;
use egui::{RichText, Stroke, Ui};

const FORM_MAX_WIDTH: f32 = 640.0;

/// Bordered, rounded container used for every section of the form.
pub(crate) fn card(fill: egui::Color32, palette: &Palette) -> egui::Frame {
    egui::Frame::default()
        .fill(fill)
        .stroke(Stroke::new(1.0, palette.border))
        .inner_margin(16.0)
        .corner_radius(8.0)
}

pub fn draw_form<N: Notifier>(ui: &mut Ui, form: &mut FilterForm<N>, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(FORM_MAX_WIDTH);
        ui.add_space(24.0);

        card(palette.card, palette)
            .inner_margin(28.0)
            .corner_radius(12.0)
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🔍").size(22.0).color(palette.accent_icon));
                        ui.heading(
                            RichText::new("Gmail Subscription Filter")
                                .size(24.0)
                                .strong()
                                .color(palette.text),
                        );
                    });
                    ui.add_space(24.0);

                    categories::draw_categories(ui, form, palette);
                    ui.add_space(20.0);

                    filters::draw_filter_fields(ui, form, palette);
                    ui.add_space(20.0);

                    filters::draw_actions(ui, form, palette);
                });
            });

        ui.add_space(24.0);
    });
}

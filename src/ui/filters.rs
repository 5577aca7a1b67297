use crate::form::FilterForm;
use crate::notify::Notifier;
use crate::theme::Palette;
use crate::ui::card;
use egui::{Color32, RichText, Stroke, Ui};
use egui_extras::{Size, StripBuilder};

const ACTION_HEIGHT: f32 = 44.0;

// Sender and keyword are only edited here; no handler reads them yet.
pub fn draw_filter_fields<N: Notifier>(ui: &mut Ui, form: &mut FilterForm<N>, palette: &Palette) {
    let state = form.state_mut();
    draw_text_field(ui, palette, "Sender", "Enter sender email", &mut state.sender);
    ui.add_space(16.0);
    draw_text_field(ui, palette, "Contains", "Enter keywords", &mut state.keyword);
}

fn draw_text_field(ui: &mut Ui, palette: &Palette, label: &str, hint: &str, text: &mut String) {
    card(palette.inset, palette).show(ui, |ui| {
        ui.label(RichText::new(label).color(palette.label));
        ui.add_space(6.0);
        ui.add(
            egui::TextEdit::singleline(text)
                .hint_text(hint)
                .text_color(palette.text)
                .desired_width(f32::INFINITY),
        );
    });
}

pub fn draw_actions<N: Notifier>(ui: &mut Ui, form: &mut FilterForm<N>, palette: &Palette) {
    let mut apply = false;
    let mut reset = false;

    ui.allocate_ui(egui::vec2(ui.available_width(), ACTION_HEIGHT), |ui| {
        StripBuilder::new(ui)
            .sizes(Size::remainder(), 2)
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    let button = egui::Button::new(
                        RichText::new("Apply Filters")
                            .size(17.0)
                            .color(Color32::WHITE),
                    )
                    .fill(palette.accent);
                    apply = ui.add_sized(ui.available_size(), button).clicked();
                });
                strip.cell(|ui| {
                    let button =
                        egui::Button::new(RichText::new("Reset").size(17.0).color(palette.label))
                            .fill(Color32::TRANSPARENT)
                            .stroke(Stroke::new(1.0, palette.border));
                    reset = ui.add_sized(ui.available_size(), button).clicked();
                });
            });
    });

    if apply {
        form.apply_filters();
    }
    if reset {
        form.reset_filters();
    }
}

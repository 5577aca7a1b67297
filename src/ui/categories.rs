use crate::form::FilterForm;
use crate::notify::Notifier;
use crate::theme::Palette;
use crate::ui::card;
use egui::{Color32, RichText, Ui};

const CHIP_HEIGHT: f32 = 40.0;
const ADD_BUTTON_WIDTH: f32 = 44.0;

pub fn draw_categories<N: Notifier>(ui: &mut Ui, form: &mut FilterForm<N>, palette: &Palette) {
    card(palette.inset, palette).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("✉").size(18.0).color(palette.accent_icon));
            ui.label(
                RichText::new("Categories")
                    .size(18.0)
                    .strong()
                    .color(palette.text),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("⏷").size(18.0).color(palette.muted_icon));
            });
        });
        ui.add_space(12.0);

        draw_category_grid(ui, form, palette);
        ui.add_space(12.0);

        draw_add_row(ui, form, palette);
    });
}

fn draw_category_grid<N: Notifier>(ui: &mut Ui, form: &mut FilterForm<N>, palette: &Palette) {
    let mut clicked = None;

    ui.columns(2, |columns| {
        for (i, category) in form.state().categories().iter().enumerate() {
            let (fill, text) = if form.state().is_selected(category) {
                (palette.accent, Color32::WHITE)
            } else {
                (palette.chip, palette.chip_text)
            };

            let column = &mut columns[i % 2];
            let button = egui::Button::new(RichText::new(category).color(text)).fill(fill);
            if column
                .add_sized([column.available_width(), CHIP_HEIGHT], button)
                .clicked()
            {
                clicked = Some(category.clone());
            }
            column.add_space(4.0);
        }
    });

    if let Some(category) = clicked {
        form.toggle_category(&category);
    }
}

fn draw_add_row<N: Notifier>(ui: &mut Ui, form: &mut FilterForm<N>, palette: &Palette) {
    ui.horizontal(|ui| {
        let input_width = ui.available_width() - ADD_BUTTON_WIDTH - ui.spacing().item_spacing.x;
        let response = ui.add(
            egui::TextEdit::singleline(&mut form.state_mut().new_category)
                .hint_text("Add custom category")
                .text_color(palette.text)
                .desired_width(input_width),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let add = egui::Button::new(RichText::new("+").size(18.0).color(Color32::WHITE))
            .fill(palette.accent);
        let clicked = ui
            .add_sized([ADD_BUTTON_WIDTH, response.rect.height()], add)
            .clicked();

        if submitted || clicked {
            form.add_category();
        }
    });
}

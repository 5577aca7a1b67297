//! Dark and light looks for the form. Both share the same layout; only the
//! colors change.

use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub inset: Color32,
    pub border: Color32,
    pub text: Color32,
    pub label: Color32,
    pub muted_icon: Color32,
    pub accent: Color32,
    pub accent_icon: Color32,
    pub chip: Color32,
    pub chip_text: Color32,
    pub input: Color32,
    pub success: Color32,
    pub error: Color32,
}

const DARK: Palette = Palette {
    background: Color32::from_rgb(17, 24, 39),
    card: Color32::from_rgb(31, 41, 55),
    inset: Color32::from_rgb(24, 32, 47),
    border: Color32::from_rgb(55, 65, 81),
    text: Color32::WHITE,
    label: Color32::from_rgb(209, 213, 219),
    muted_icon: Color32::from_rgb(156, 163, 175),
    accent: Color32::from_rgb(59, 130, 246),
    accent_icon: Color32::from_rgb(96, 165, 250),
    chip: Color32::from_rgb(55, 65, 81),
    chip_text: Color32::from_rgb(209, 213, 219),
    input: Color32::from_rgb(55, 65, 81),
    success: Color32::from_rgb(34, 197, 94),
    error: Color32::from_rgb(239, 68, 68),
};

const LIGHT: Palette = Palette {
    background: Color32::from_rgb(249, 250, 251),
    card: Color32::WHITE,
    inset: Color32::from_rgb(243, 244, 246),
    border: Color32::from_rgb(229, 231, 235),
    text: Color32::from_rgb(17, 24, 39),
    label: Color32::from_rgb(55, 65, 81),
    muted_icon: Color32::from_rgb(107, 114, 128),
    accent: Color32::from_rgb(59, 130, 246),
    accent_icon: Color32::from_rgb(59, 130, 246),
    chip: Color32::from_rgb(229, 231, 235),
    chip_text: Color32::from_rgb(55, 65, 81),
    input: Color32::WHITE,
    success: Color32::from_rgb(22, 163, 74),
    error: Color32::from_rgb(220, 38, 38),
};

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        let palette = self.palette();
        let mut visuals = match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = palette.background;
        visuals.window_fill = palette.card;
        visuals.extreme_bg_color = palette.input;
        visuals.override_text_color = Some(palette.text);
        visuals
    }

    pub fn apply(self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }
}

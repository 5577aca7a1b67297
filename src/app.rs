use crate::form::FilterForm;
use crate::notify::{toast_channel, ToastSender, Toasts};
use crate::theme::{Palette, Theme};
use crate::ui::{draw_form, toasts};
use std::time::{Duration, Instant};

// How often to repaint while a toast is on screen, so it disappears on time.
const TOAST_TICK: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct SubscriptionFilterApp {
    form: FilterForm<ToastSender>,
    toasts: Toasts,
    palette: Palette,
}

impl SubscriptionFilterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, theme: Theme) -> Self {
        theme.apply(&cc.egui_ctx);
        let (notifier, toasts) = toast_channel();
        tracing::info!(?theme, "Starting subscription filter");
        Self {
            form: FilterForm::new(notifier),
            toasts,
            palette: theme.palette(),
        }
    }
}

impl eframe::App for SubscriptionFilterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_form(ui, &mut self.form, &self.palette);
            });
        });

        // Handlers above may have queued toasts this frame
        if self.toasts.update(Instant::now()) {
            ctx.request_repaint();
        }
        toasts::draw_toasts(ctx, &self.toasts, &self.palette);

        if !self.toasts.is_empty() {
            ctx.request_repaint_after(TOAST_TICK);
        }
    }
}

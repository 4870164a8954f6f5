use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{
    components::{MemeCard, MemeCardAction, Toasts},
    state::{g_triggers_fetch, AppState},
};

#[derive(Default)]
pub struct MemeBrowserApp {
    state: AppState,
    toasts: Toasts,
}

impl eframe::App for MemeBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up results from background tasks (non-blocking)
        for notice in self.state.poll(ctx) {
            self.toasts.error(notice);
        }

        let g_pressed = ctx.input(|i| i.key_pressed(egui::Key::G) && i.modifiers.is_none());
        if g_triggers_fetch(g_pressed, ctx.wants_keyboard_input(), self.state.can_trigger()) {
            self.state.request_meme(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Random Meme Browser");
                ui.label(
                    egui::RichText::new("Fetch a random meme from Reddit. Press G or click below.")
                        .weak(),
                );
                ui.add_space(8.0);

                let label = if self.state.loading {
                    "Loading..."
                } else {
                    "Fetch Meme"
                };
                let button = ui.add_enabled(self.state.can_trigger(), egui::Button::new(label));
                if button.clicked() {
                    self.state.request_meme(ctx);
                }
                if self.state.loading {
                    ui.add_space(4.0);
                    ui.spinner();
                }
                ui.add_space(12.0);

                let mut share_link = None;
                if let Some(error) = &self.state.error {
                    ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {error}"));
                } else if let Some(meme) = &self.state.meme {
                    let card = MemeCard::new(meme, self.state.texture.as_ref(), self.state.image_error);
                    match card.show(ui) {
                        Some(MemeCardAction::Share) => {
                            share_link = Some(meme.post_link.clone());
                        }
                        Some(MemeCardAction::OpenOriginal) => {
                            ui.ctx()
                                .open_url(egui::OpenUrl::new_tab(meme.post_link.clone()));
                        }
                        None => {}
                    }
                } else if !self.state.loading {
                    ui.label(
                        egui::RichText::new("No meme yet. Press G or the button to get started!")
                            .weak(),
                    );
                }

                if let Some(link) = share_link {
                    ui.ctx().copy_text(link);
                    self.toasts.info("Link copied to clipboard");
                }
            });
        });

        self.toasts.show(ctx);
    }
}

pub fn launch_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([520.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Random Meme Browser",
        options,
        Box::new(|_cc| Ok(Box::new(MemeBrowserApp::default()))),
    )
}

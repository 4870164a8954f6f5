use crate::api::meme::MemeRecord;
use eframe::egui;

/// Action the user took on the card this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemeCardAction {
    /// Copy the post link (desktop stand-in for the platform share sheet)
    Share,
    /// Open the original post in the browser
    OpenOriginal,
}

/// Renders one meme: image with its own loaded/error sub-state, title,
/// subreddit badge, attribution and the share/original actions.
pub struct MemeCard<'a> {
    meme: &'a MemeRecord,
    texture: Option<&'a egui::TextureHandle>,
    image_error: bool,
}

impl<'a> MemeCard<'a> {
    const IMAGE_AREA_WIDTH: f32 = 440.0;
    const IMAGE_AREA_HEIGHT: f32 = 360.0;

    pub fn new(
        meme: &'a MemeRecord,
        texture: Option<&'a egui::TextureHandle>,
        image_error: bool,
    ) -> Self {
        Self {
            meme,
            texture,
            image_error,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> Option<MemeCardAction> {
        let mut action = None;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(Self::IMAGE_AREA_WIDTH);

            ui.label(egui::RichText::new(&self.meme.title).size(18.0).strong());
            if self.meme.needs_content_warning() {
                ui.label(
                    egui::RichText::new(if self.meme.nsfw { "NSFW" } else { "Spoiler" })
                        .color(egui::Color32::LIGHT_RED)
                        .strong(),
                );
            }
            ui.add_space(6.0);

            self.show_image(ui);
            ui.add_space(6.0);

            // Footer: attribution on the left, actions on the right
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(self.meme.subreddit_badge())
                            .strong()
                            .monospace(),
                    );
                    ui.label(egui::RichText::new(self.meme.author_line()).weak());
                    if let Some(ups) = self.meme.ups {
                        ui.label(egui::RichText::new(format!("⬆ {ups}")).weak());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Original").clicked() {
                        action = Some(MemeCardAction::OpenOriginal);
                    }
                    if ui.button("Share").clicked() {
                        action = Some(MemeCardAction::Share);
                    }
                });
            });
        });

        action
    }

    fn show_image(&self, ui: &mut egui::Ui) {
        if self.image_error {
            ui.add_sized(
                [Self::IMAGE_AREA_WIDTH, Self::IMAGE_AREA_HEIGHT],
                egui::Label::new(
                    egui::RichText::new(
                        "Failed to load image. The meme might be unavailable.\nTry fetching a new one!",
                    )
                    .weak(),
                ),
            );
            return;
        }

        match self.texture {
            Some(texture) => {
                // Scale to fit the image area, preserving aspect ratio
                let aspect = texture.size()[0] as f32 / texture.size()[1] as f32;
                let mut size = egui::vec2(Self::IMAGE_AREA_HEIGHT * aspect, Self::IMAGE_AREA_HEIGHT);
                if size.x > Self::IMAGE_AREA_WIDTH {
                    size = egui::vec2(Self::IMAGE_AREA_WIDTH, Self::IMAGE_AREA_WIDTH / aspect);
                }
                ui.image((texture.id(), size));
            }
            None => {
                // Still downloading
                ui.add_sized(
                    [Self::IMAGE_AREA_WIDTH, Self::IMAGE_AREA_HEIGHT],
                    egui::Spinner::new(),
                );
            }
        }
    }
}

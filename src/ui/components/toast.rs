use eframe::egui;
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

struct Toast {
    kind: ToastKind,
    text: String,
    created: Instant,
}

/// Queue of transient notifications drawn in the top-right corner.
/// Each toast expires after a fixed TTL.
#[derive(Default)]
pub struct Toasts {
    toasts: Vec<Toast>,
}

impl Toasts {
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into(), Instant::now());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into(), Instant::now());
    }

    fn push(&mut self, kind: ToastKind, text: String, created: Instant) {
        self.toasts.push(Toast {
            kind,
            text,
            created,
        });
    }

    /// Drop toasts whose TTL has passed
    fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.duration_since(t.created) < TOAST_TTL);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                        let text = match toast.kind {
                            ToastKind::Info => egui::RichText::new(&toast.text),
                            ToastKind::Error => {
                                egui::RichText::new(&toast.text).color(egui::Color32::LIGHT_RED)
                            }
                        };
                        ui.label(text);
                    });
                    ui.add_space(4.0);
                }
            });

        // Keep repainting so expiry is not stuck waiting for input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
#[path = "toast_tests.rs"]
mod tests;

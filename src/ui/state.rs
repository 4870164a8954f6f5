use crate::api::meme::{fetch_image_async, fetch_meme_from_async, MemeRecord, MEME_API_BASE};
use eframe::egui;
use log::{debug, error, info, warn};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Result of one fetch request, sent from the background task
pub enum FetchOutcome {
    Fetched(MemeRecord),
    Failed(String),
}

/// Message sent from the background image download task
pub struct LoadedImage {
    /// Image URL the bytes belong to, used to drop stale deliveries
    pub url: String,
    pub result: Result<Vec<u8>, String>,
}

/// UI state owned by the app: the current meme, the fetch lifecycle flags
/// and the channels feeding results back from background tasks.
pub struct AppState {
    pub meme: Option<MemeRecord>,
    pub loading: bool,
    pub error: Option<String>,
    /// Image sub-state, independent of the fetch result
    pub image_loaded: bool,
    pub image_error: bool,
    pub texture: Option<egui::TextureHandle>,
    /// API base URL, swapped out in tests
    pub api_base: String,
    /// Tokio runtime for async operations
    runtime: Runtime,
    outcome_sender: UnboundedSender<FetchOutcome>,
    outcome_receiver: UnboundedReceiver<FetchOutcome>,
    image_sender: UnboundedSender<LoadedImage>,
    image_receiver: UnboundedReceiver<LoadedImage>,
}

impl Default for AppState {
    fn default() -> Self {
        let (outcome_sender, outcome_receiver) = unbounded_channel();
        let (image_sender, image_receiver) = unbounded_channel();
        let runtime = Runtime::new().expect("Failed to create Tokio runtime");
        Self {
            meme: None,
            loading: false,
            error: None,
            image_loaded: false,
            image_error: false,
            texture: None,
            api_base: MEME_API_BASE.to_string(),
            runtime,
            outcome_sender,
            outcome_receiver,
            image_sender,
            image_receiver,
        }
    }
}

impl AppState {
    /// A new fetch may only start while no request is in flight
    pub fn can_trigger(&self) -> bool {
        !self.loading
    }

    /// Start a fetch: flips to loading and spawns the request task.
    /// A no-op while a request is already in flight.
    pub fn request_meme(&mut self, ctx: &egui::Context) {
        if !self.can_trigger() {
            debug!("Fetch already in flight, ignoring trigger");
            return;
        }

        self.begin_fetch();

        let sender = self.outcome_sender.clone();
        let base_url = self.api_base.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let outcome = match fetch_meme_from_async(&base_url).await {
                Ok(meme) => FetchOutcome::Fetched(meme),
                Err(e) => FetchOutcome::Failed(format!("Failed to fetch meme: {e}")),
            };
            if sender.send(outcome).is_err() {
                warn!("UI closed before fetch outcome could be delivered");
            }
            ctx.request_repaint();
        });
    }

    /// State transition at trigger time
    fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// State transition when the fetch outcome arrives. On success the old
    /// record is replaced wholesale and the image sub-state resets; on
    /// failure the previous meme is cleared so the error replaces the
    /// display instead of merging with stale data.
    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        self.loading = false;
        match outcome {
            FetchOutcome::Fetched(meme) => {
                info!("Fetched meme: {}", meme.title);
                self.error = None;
                self.meme = Some(meme);
                self.image_loaded = false;
                self.image_error = false;
                self.texture = None;
            }
            FetchOutcome::Failed(message) => {
                warn!("{message}");
                self.error = Some(message);
                self.meme = None;
                self.image_loaded = false;
                self.image_error = false;
                self.texture = None;
            }
        }
    }

    /// Drain both channels (non-blocking). Returns messages for toasts
    /// raised by this poll, so the caller can surface them.
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<String> {
        let mut notices = Vec::new();

        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            if let FetchOutcome::Failed(message) = &outcome {
                notices.push(message.clone());
            }
            self.apply_outcome(outcome);

            if let Some(url) = self.meme.as_ref().map(|m| m.url.clone()) {
                self.spawn_image_fetch(ctx, url);
            }
        }

        while let Ok(loaded) = self.image_receiver.try_recv() {
            self.apply_loaded_image(ctx, loaded);
        }

        notices
    }

    /// Spawn a tokio task to download the meme image
    fn spawn_image_fetch(&mut self, ctx: &egui::Context, url: String) {
        debug!("Starting async image load for {url}");

        let sender = self.image_sender.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let result = fetch_image_async(&url).await.map_err(|e| e.to_string());
            if sender.send(LoadedImage { url, result }).is_err() {
                warn!("UI closed before image could be delivered");
            }
            ctx.request_repaint();
        });
    }

    /// Decode downloaded bytes and upload the texture. Failures only set
    /// `image_error`; the fetch state stays successful.
    fn apply_loaded_image(&mut self, ctx: &egui::Context, loaded: LoadedImage) {
        // Stale delivery for a meme that was replaced meanwhile
        let current_url = self.meme.as_ref().map(|m| m.url.as_str());
        if current_url != Some(loaded.url.as_str()) {
            debug!("Dropping stale image for {}", loaded.url);
            return;
        }

        let bytes = match loaded.result {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Image download failed for {}: {e}", loaded.url);
                self.image_error = true;
                return;
            }
        };

        match image::load_from_memory(&bytes) {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let pixels = rgba.into_raw();
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);

                self.texture =
                    Some(ctx.load_texture("meme_image", color_image, egui::TextureOptions::LINEAR));
                self.image_loaded = true;
                debug!("Created texture for {}", loaded.url);
            }
            Err(e) => {
                error!("Failed to decode image {}: {e}", loaded.url);
                self.image_error = true;
            }
        }
    }
}

/// Keyboard trigger rule: `G` without modifiers, not while a widget wants
/// keyboard input (e.g. a focused text field), and only while idle.
pub fn g_triggers_fetch(g_pressed: bool, wants_keyboard_input: bool, can_trigger: bool) -> bool {
    g_pressed && !wants_keyboard_input && can_trigger
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

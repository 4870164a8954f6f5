mod meme_card;
mod toast;

pub use meme_card::{MemeCard, MemeCardAction};
pub use toast::Toasts;

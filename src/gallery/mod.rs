use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transient state of the image gallery overlay.
/// The default value is the closed state: no images, no title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryState {
    pub is_open: bool,
    /// Ordered image URLs, empty while closed
    pub images: Vec<String>,
    /// Listing title shown above the photos, empty while closed
    pub title: String,
}

/// Where a click landed while the overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Dimmed backdrop around the content; clicking it dismisses the gallery
    Backdrop,
    /// The photo surface itself. Clicks here are consumed locally so they
    /// never reach the thumbnail that opened the gallery underneath.
    Surface,
    CloseButton,
}

/// Owns the gallery overlay state for one UI session
#[derive(Debug, Default)]
pub struct GalleryController {
    state: GalleryState,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay for one listing's photos, replacing whatever
    /// gallery was open before. Galleries never stack.
    pub fn open(&mut self, images: &[String], title: &str) {
        debug!("Opening gallery '{}' with {} images", title, images.len());
        self.state = GalleryState {
            is_open: true,
            images: images.to_vec(),
            title: title.to_string(),
        };
    }

    /// Close the overlay and drop all transient state. Idempotent, so a
    /// close button and a backdrop dismiss can both fire without fuss.
    pub fn close(&mut self) {
        self.state = GalleryState::default();
    }

    /// Route a click that happened while the overlay is showing
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close(),
            ClickTarget::Surface => {}
        }
    }

    pub fn current_state(&self) -> &GalleryState {
        &self.state
    }
}

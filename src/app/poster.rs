use image::DynamicImage;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tracing::{debug, error};

use crate::app::request::Generation;
use crate::error::PosterError;

pub enum PosterState {
    /// The movie has no poster; nothing is requested.
    Missing,
    Loading,
    Ready(StatefulProtocol),
    Failed,
}

/// A poster that is fetched in the background and rendered in place.
pub struct PosterSlot {
    generation: Generation,
    url: Option<String>,
    state: PosterState,
}

impl Default for PosterSlot {
    fn default() -> Self {
        Self {
            generation: Generation::default(),
            url: None,
            state: PosterState::Missing,
        }
    }
}

impl PosterSlot {
    #[cfg(test)]
    pub fn state(&self) -> &PosterState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PosterState {
        &mut self.state
    }

    #[cfg(test)]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Points the slot at a new poster. Returns the generation and URL to
    /// download, or `None` if there is nothing new to fetch.
    pub fn request(&mut self, url: Option<String>) -> Option<(u64, String)> {
        if url.is_some() && url == self.url && !matches!(self.state, PosterState::Failed) {
            return None;
        }

        let generation = self.generation.next();
        self.url = url.clone();
        match url {
            Some(url) => {
                self.state = PosterState::Loading;
                Some((generation, url))
            }
            None => {
                self.state = PosterState::Missing;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.request(None);
    }

    /// Applies a finished download. Stale downloads are dropped.
    pub fn finish(
        &mut self,
        generation: u64,
        result: Result<DynamicImage, PosterError>,
        picker: &Picker,
    ) -> bool {
        if !self.generation.is_current(generation) {
            debug!(generation, "dropping stale poster");
            return false;
        }

        self.state = match result {
            Ok(image) => PosterState::Ready(picker.new_resize_protocol(image)),
            Err(e) => {
                error!(url = self.url.as_deref().unwrap_or_default(), "Error fetching poster: {e}");
                PosterState::Failed
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use image::RgbImage;

    fn picker() -> Picker {
        Picker::halfblocks()
    }

    #[test]
    fn missing_url_requests_nothing() {
        let mut slot = PosterSlot::default();
        assert_eq!(slot.request(None), None);
        assert!(matches!(slot.state(), PosterState::Missing));
    }

    #[test]
    fn same_url_is_not_requested_twice() {
        let mut slot = PosterSlot::default();
        let url = Some("https://img/w500/a.jpg".to_string());
        assert!(slot.request(url.clone()).is_some());
        assert_eq!(slot.request(url), None);
    }

    #[test]
    fn failed_poster_can_be_requested_again() {
        let mut slot = PosterSlot::default();
        let url = Some("https://img/w500/a.jpg".to_string());
        let (generation, _) = slot.request(url.clone()).unwrap();
        slot.finish(generation, Err(NetworkError::Status { status: 404 }.into()), &picker());
        assert!(matches!(slot.state(), PosterState::Failed));
        assert!(slot.request(url).is_some());
    }

    #[test]
    fn stale_download_is_dropped() {
        let mut slot = PosterSlot::default();
        let (old, _) = slot.request(Some("https://img/a.jpg".into())).unwrap();
        let (new, _) = slot.request(Some("https://img/b.jpg".into())).unwrap();

        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert!(!slot.finish(old, Ok(image.clone()), &picker()));
        assert!(matches!(slot.state(), PosterState::Loading));

        assert!(slot.finish(new, Ok(image), &picker()));
        assert!(matches!(slot.state(), PosterState::Ready(_)));
        assert_eq!(slot.url(), Some("https://img/b.jpg"));
    }
}

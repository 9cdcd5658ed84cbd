use tracing::debug;

use crate::app::models::MovieDetail;
use crate::app::poster::PosterSlot;
use crate::app::request::{Generation, RequestState};
use crate::error::Result;

pub const DETAIL_FAILED_MESSAGE: &str = "Couldn't Load Movie Details, Try Again Later.";

/// The single-title screen for `/movie/{id}`.
#[derive(Default)]
pub struct MovieDetailView {
    pub poster: PosterSlot,
    id: Option<String>,
    state: RequestState<MovieDetail>,
    generation: Generation,
}

impl MovieDetailView {
    #[cfg(test)]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &RequestState<MovieDetail> {
        &self.state
    }

    pub fn movie(&self) -> Option<&MovieDetail> {
        self.state.loaded()
    }

    pub fn begin(&mut self, id: &str) -> u64 {
        self.id = Some(id.to_string());
        self.state = RequestState::Loading;
        self.poster.clear();
        self.generation.next()
    }

    pub fn finish(&mut self, generation: u64, result: Result<MovieDetail>) -> bool {
        if !self.generation.is_current(generation) {
            debug!(
                generation,
                id = self.id.as_deref().unwrap_or_default(),
                "dropping stale detail response"
            );
            return false;
        }

        self.state = match result {
            Ok(movie) => RequestState::Loaded(movie),
            Err(_) => RequestState::Failed(DETAIL_FAILED_MESSAGE.to_string()),
        };
        true
    }

    /// Unmounts the view. Anything still in flight becomes stale.
    pub fn leave(&mut self) {
        self.generation.next();
        self.id = None;
        self.state = RequestState::Idle;
        self.poster.clear();
    }
}

use tracing::debug;

use crate::app::models::{CatalogPage, MovieSummary};
use crate::app::poster::PosterSlot;
use crate::app::request::{Generation, RequestState};
use crate::app::router::Route;
use crate::app::search::SearchBox;
use crate::error::Result;

pub const LOAD_FAILED_MESSAGE: &str = "Couldn't Load Movies, Try Again Later.";
pub const NO_MOVIES_MESSAGE: &str = "No movies found";

/// Everything a grid card shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub language: String,
    pub poster_url: Option<String>,
    pub route: Route,
}

impl MovieCard {
    pub fn new(movie: &MovieSummary, image_base: &str, poster_size: &str) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.release_year(),
            rating: movie.rating_label(),
            language: movie.language_label().to_string(),
            poster_url: movie.poster_url(image_base, poster_size),
            route: Route::Movie(movie.id.to_string()),
        }
    }
}

/// The catalog screen: search text, the current request and the grid
/// selection.
#[derive(Default)]
pub struct MovieListView {
    pub search: SearchBox,
    pub poster: PosterSlot,
    state: RequestState<CatalogPage>,
    generation: Generation,
    selected: usize,
    columns: usize,
}

impl MovieListView {
    pub fn query(&self) -> &str {
        self.search.value()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Enters `Loading` for the current query and returns the request's
    /// generation.
    pub fn begin(&mut self) -> u64 {
        self.state = RequestState::Loading;
        self.selected = 0;
        self.generation.next()
    }

    /// Applies a finished request unless a newer one was issued since.
    pub fn finish(&mut self, generation: u64, result: Result<CatalogPage>) -> bool {
        if !self.generation.is_current(generation) {
            debug!(generation, latest = self.generation.current(), "dropping stale catalog response");
            return false;
        }

        self.state = match result {
            Ok(page) => RequestState::Loaded(page),
            Err(_) => RequestState::Failed(LOAD_FAILED_MESSAGE.to_string()),
        };
        self.selected = 0;
        true
    }

    pub fn movies(&self) -> &[MovieSummary] {
        match &self.state {
            RequestState::Loaded(CatalogPage::Movies(movies)) => movies,
            _ => &[],
        }
    }

    /// Text shown in place of the grid, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            RequestState::Loaded(CatalogPage::NoMatches) => Some(NO_MOVIES_MESSAGE),
            _ => None,
        }
    }

    pub fn cards(&self, image_base: &str, poster_size: &str) -> Vec<MovieCard> {
        self.movies()
            .iter()
            .map(|movie| MovieCard::new(movie, image_base, poster_size))
            .collect()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.movies().get(self.selected)
    }

    pub fn selected_card(&self, image_base: &str, poster_size: &str) -> Option<MovieCard> {
        self.selected_movie()
            .map(|movie| MovieCard::new(movie, image_base, poster_size))
    }

    /// Called by the renderer so vertical moves jump a whole row.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_previous(&mut self) {
        self.step(-1);
    }

    pub fn select_down(&mut self) {
        self.step(self.columns.max(1) as isize);
    }

    pub fn select_up(&mut self) {
        self.step(-(self.columns.max(1) as isize));
    }

    fn step(&mut self, delta: isize) {
        let count = self.movies().len();
        if count == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, count as isize - 1) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::sample_movie;
    use crate::error::NetworkError;

    fn loaded(count: u64) -> MovieListView {
        let mut view = MovieListView::default();
        let generation = view.begin();
        let movies = (1..=count).map(|id| sample_movie(id, &format!("Movie {id}"))).collect();
        view.finish(generation, Ok(CatalogPage::Movies(movies)));
        view
    }

    #[test]
    fn success_replaces_list_in_order() {
        let view = loaded(3);
        let ids: Vec<u64> = view.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(view.message(), None);
    }

    #[test]
    fn no_matches_shows_message_and_empty_grid() {
        let mut view = loaded(2);
        let generation = view.begin();
        view.finish(generation, Ok(CatalogPage::NoMatches));
        assert!(view.movies().is_empty());
        assert_eq!(view.message(), Some(NO_MOVIES_MESSAGE));
    }

    #[test]
    fn failure_clears_list_and_shows_retry_message() {
        let mut view = loaded(2);
        let generation = view.begin();
        view.finish(generation, Err(NetworkError::Status { status: 500 }));
        assert!(view.movies().is_empty());
        assert_eq!(view.message(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut view = MovieListView::default();
        let old = view.begin();
        let new = view.begin();

        assert!(view.finish(new, Ok(CatalogPage::Movies(vec![sample_movie(2, "New")]))));
        assert!(!view.finish(old, Ok(CatalogPage::Movies(vec![sample_movie(1, "Old")]))));
        assert_eq!(view.movies()[0].title, "New");
    }

    #[test]
    fn loading_hides_previous_results() {
        let mut view = loaded(2);
        view.begin();
        assert!(view.is_loading());
        assert!(view.movies().is_empty());
        assert_eq!(view.message(), None);
    }

    #[test]
    fn card_without_poster_has_no_url() {
        let mut movie = sample_movie(7, "Blank");
        movie.release_date = None;
        movie.vote_average = None;
        let card = MovieCard::new(&movie, "https://image.tmdb.org/t/p", "w500");
        assert_eq!(card.poster_url, None);
        assert_eq!(card.year, "N/A");
        assert_eq!(card.rating, "N/A");
        assert_eq!(card.route, Route::Movie("7".into()));
    }

    #[test]
    fn selection_moves_within_grid() {
        let mut view = loaded(7);
        view.set_columns(3);
        view.select_down();
        assert_eq!(view.selected(), 3);
        view.select_down();
        assert_eq!(view.selected(), 6);
        view.select_down();
        assert_eq!(view.selected(), 6);
        view.select_previous();
        assert_eq!(view.selected(), 5);
        view.select_up();
        assert_eq!(view.selected(), 2);
        view.select_up();
        assert_eq!(view.selected(), 0);
        view.select_next();
        assert_eq!(view.selected_movie().map(|m| m.id), Some(2));
    }

    #[test]
    fn selected_card_links_to_its_movie() {
        let mut view = loaded(3);
        view.select_next();
        let card = view.selected_card("https://img", "w92").unwrap();
        assert_eq!(card.title, "Movie 2");
        assert_eq!(card.route, Route::Movie("2".into()));
        assert_eq!(card.route.path(), "/movie/2");
    }

    #[test]
    fn selection_is_noop_on_empty_list() {
        let mut view = MovieListView::default();
        view.select_next();
        assert_eq!(view.selected(), 0);
        assert!(view.selected_movie().is_none());
        assert!(view.selected_card("https://img", "w92").is_none());
    }
}

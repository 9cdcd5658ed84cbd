/// Lifecycle of the one request a view cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            RequestState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic request counter. Only a completion carrying the latest
/// generation may update the view.
#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    /// Starts a new request, invalidating every older one.
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_generation_invalidates_older() {
        let mut generation = Generation::default();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert_eq!(generation.current(), second);
    }

    #[test]
    fn state_accessors() {
        let state: RequestState<u8> = RequestState::Failed("boom".into());
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.loaded(), None);
        assert!(RequestState::<u8>::Loading.is_loading());
        assert_eq!(RequestState::Loaded(3).loaded(), Some(&3));
    }
}

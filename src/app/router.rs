use std::fmt;

/// Client-side routes. `/` is the catalog, `/movie/{id}` a single title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Movie(String),
}

impl Route {
    /// Parses a path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Catalog),
            ["movie", id] => Some(Route::Movie((*id).to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Movie(id) => format!("/movie/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

use std::{fmt::Display, str::FromStr};

use const_format::formatcp;

pub const HOME_ROUTE: &str = "/";
pub const BOOK_PREFIX: &str = "/book";
pub const WORKS_SEGMENT: &str = "/works/";
pub const WORK_ROUTE_PREFIX: &str = formatcp!("{}{}", BOOK_PREFIX, WORKS_SEGMENT);
/// Same route in the path syntax of the http router.
pub const WORK_ROUTE_PATTERN: &str = formatcp!("{}:id", WORK_ROUTE_PREFIX);

/// Where a path leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Work(String),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        if path.is_empty() || path == HOME_ROUTE {
            return Route::Home;
        }
        match path.strip_prefix(WORK_ROUTE_PREFIX) {
            Some(id) if is_bare_id(id) => Route::Work(id.to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Home => write!(f, "{HOME_ROUTE}"),
            Route::Work(id) => write!(f, "{WORK_ROUTE_PREFIX}{id}"),
            Route::NotFound(path) => write!(f, "{path}"),
        }
    }
}

fn is_bare_id(id: &str) -> bool {
    !id.is_empty() && !id.contains('/')
}

/// The bare id of a work given as `OL45804W` or `/works/OL45804W`.
pub fn work_id(raw: &str) -> Option<&str> {
    let id = raw.strip_prefix(WORKS_SEGMENT).unwrap_or(raw);
    is_bare_id(id).then_some(id)
}

/// Where clicking a card leads. Identifiers already carry their leading
/// `/works/` segment.
pub fn card_target(identifier: &str) -> String {
    format!("{BOOK_PREFIX}{identifier}")
}

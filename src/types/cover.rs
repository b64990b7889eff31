use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    Small,
    Medium,
    Large,
}

impl CoverSize {
    fn suffix(self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

/// Builds `{covers_base}/b/id/{id}-{size}.jpg`.
pub fn cover_url(covers_base: &str, id: impl Display, size: CoverSize) -> String {
    format!(
        "{}/b/id/{id}-{}.jpg",
        covers_base.trim_end_matches('/'),
        size.suffix()
    )
}

/// An image reference that knows what to fall back to once loading it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSource {
    src:      String,
    fallback: String,
}

impl ImageSource {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src:      src.into(),
            fallback: fallback.into(),
        }
    }

    pub fn placeholder(fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        Self {
            src: fallback.clone(),
            fallback,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_placeholder(&self) -> bool {
        self.src == self.fallback
    }

    /// Called when the image could not be loaded.
    pub fn on_error(&mut self) {
        self.src = self.fallback.clone();
    }
}

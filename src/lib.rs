//! Browse Open Library from the terminal: a searchable grid of works and a
//! detail page per work, both driven by the same fetch lifecycle.
pub mod config;
pub mod default_colors;
pub mod error;
pub mod navigation;
pub mod openlib_schema;
pub mod openlibrary;
pub mod render;
pub mod traits;
pub mod types;
pub mod view;

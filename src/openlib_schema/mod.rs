//! Raw response shapes of the Open Library endpoints we read.
//!
//! These mirror the JSON as served and are converted into the types in
//! [`crate::types`] right after parsing; nothing outside the client sees them.
pub mod search;
pub mod subject;
pub mod text;
pub mod work;

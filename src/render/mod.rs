//! Turning view state into something to look at.
//!
//! Each page is first mapped into a plain display model (serializable, so the
//! http server can hand it out as JSON) and then styled for the terminal via
//! [`crate::traits::DisplayTerminal`]. Every "field missing -> fallback text"
//! decision lives in [`fallback`].
pub mod card;
pub mod detail;
pub mod fallback;
pub mod list;

pub use card::Card;
pub use detail::WorkPage;
pub use list::ListPage;

pub const LOADING: &str = "Loading...";

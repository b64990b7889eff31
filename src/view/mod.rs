//! The two views and the fetch lifecycle they share.
pub mod detail;
pub mod list;
pub mod state;

pub use detail::DetailView;
pub use list::ListView;
pub use state::{Lifecycle, RacePolicy, Ticket, ViewState};

//! Client side of the search page: calorie math, the view state machine and
//! an HTTP client for the API endpoints.

mod backend;
pub mod calories;
mod controller;
pub mod view;

pub use backend::{Backend, BackendError, HttpBackend, SaveAck, SaveBody, SavedSummary, SearchBody};
pub use controller::{Controller, SEARCH_PAGE_SIZE};

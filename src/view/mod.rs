//! View state and the interactive browse session.

pub mod controller;
pub mod state;

pub use controller::{BrowseSession, FetchOutcome, SessionControl};
pub use state::{Completion, Phase, ViewState};

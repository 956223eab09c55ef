//! Web layer for the fuel-stop finder.
//!
//! Provides the search form, the rendered results page and a JSON
//! API mirroring it.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;

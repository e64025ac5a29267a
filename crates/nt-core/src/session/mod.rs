//! Session domain models
//!
//! The session is the one piece of the client with real state-machine
//! content: it decides which top-level flow (splash, auth, onboarding,
//! main) is visible at any instant. This module holds the state shape and
//! the pure route gate; the async controller that drives them lives in the
//! application layer (nt-app).

mod route;
mod state;

pub use route::{decide_route, AppRoute};
pub use state::SessionState;

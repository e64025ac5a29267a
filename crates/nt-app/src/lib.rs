//! # nt-app
//!
//! Application layer for NutriTrack: the session controller that owns the
//! gate state machine, plus the dashboard preloader. All async
//! coordination lives here — the splash floor timer, stale-response
//! rejection across logout races, and the concurrent preload join.

pub mod config;
pub mod error;
pub mod preloader;
pub mod session_controller;

pub use config::SessionConfig;
pub use error::SessionError;
pub use preloader::DashboardPreloader;
pub use session_controller::SessionController;

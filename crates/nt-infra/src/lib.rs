//! # nt-infra
//!
//! Infrastructure adapters for NutriTrack: the file-backed credential
//! store and the HTTP client implementing the remote session and
//! dashboard ports.

pub mod credentials;
pub mod http;

pub use credentials::FileCredentialStore;
pub use http::HttpApiClient;

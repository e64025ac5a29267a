//! Port interfaces for the application layer
//!
//! Ports define the contract between the session logic and infrastructure
//! implementations. This follows Hexagonal Architecture principles: the
//! remote API, durable credential storage, and the dashboard read
//! endpoints are external collaborators the core only knows through these
//! traits.

pub mod credential_store;
pub mod dashboard_api;
pub mod errors;
pub mod session_api;

pub use credential_store::{CredentialStorePort, StoredCredentials};
pub use dashboard_api::DashboardApiPort;
pub use errors::ApiError;
pub use session_api::{AuthSession, SessionApiPort};

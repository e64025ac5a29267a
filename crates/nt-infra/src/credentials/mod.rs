mod file_store;

pub use file_store::{default_store_dir, FileCredentialStore, DEFAULT_CREDENTIALS_FILE};

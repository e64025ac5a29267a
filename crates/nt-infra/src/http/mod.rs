mod client;
mod dto;

pub use client::HttpApiClient;

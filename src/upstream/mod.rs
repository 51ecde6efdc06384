pub mod client;
pub mod fallback;
pub mod provider;

pub use client::LeagueClient;
pub use provider::{CurrentSnapshot, SnapshotOrigin, SnapshotProvider};

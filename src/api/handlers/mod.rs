use crate::upstream::SnapshotProvider;

pub mod league;

pub struct AppState {
    pub provider: SnapshotProvider,
}

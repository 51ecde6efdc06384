mod aggregator;
mod league;
mod streak;

pub use aggregator::aggregate;

//! Infrastructure: host metrics probing and small shared helpers

pub mod metrics;
pub mod util;

//! Domain layer: assembles response payloads from host metrics and fixtures

pub mod data;
pub mod system;

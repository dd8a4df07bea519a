//! API route declarations (e.g., /api/*)

pub mod data_routes;
pub mod system_routes;

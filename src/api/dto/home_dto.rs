use serde::Serialize;

pub const GREETING: &str = "Hello from Sample Python Flask App!";
pub const APP_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub version: &'static str,
}

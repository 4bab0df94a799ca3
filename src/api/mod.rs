mod client;
mod error;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, JsonSource, DEFAULT_BASE_URL};
pub use error::ApiError;

pub const ASTROS_PATH: &str = "/astros.json";
pub const ISS_NOW_PATH: &str = "/iss-now.json";
pub const ISS_PASS_PATH: &str = "/iss-pass.json";

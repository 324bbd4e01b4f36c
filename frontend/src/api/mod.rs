mod attendance;
pub mod client;
mod employees;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use endpoints::{Endpoint, Tag};
pub use types::*;

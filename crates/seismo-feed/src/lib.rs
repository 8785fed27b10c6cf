//! GeoJSON earthquake feed client

mod client;
mod error;
mod http;
mod wire;

pub use client::FeedClient;
pub use error::FeedError;
pub use http::check_response;
pub use wire::parse_snapshot;

pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod service;
pub mod types;

pub use client::{Resource, UpstreamClient};
pub use error::ApiError;
pub use service::FortniteService;

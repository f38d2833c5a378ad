pub mod app_config;
pub mod segment_client;

pub use segment_client::HttpSegmentClient;

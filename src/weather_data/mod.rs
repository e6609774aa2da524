pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod http;
pub mod payload;

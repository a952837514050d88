//! Instrumented AWS Lambda handlers library

pub mod clients;
pub mod config;
pub mod handler;
pub mod observability;

pub use config::schema::HandlerConfig;
pub use handler::{HandlerError, HttpFetchHandler, QueueLoggingHandler, StorageListingHandler};
pub use observability::FlushLayer;

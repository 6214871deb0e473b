pub mod cors;
pub mod server;
pub mod tracing;

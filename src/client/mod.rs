// File: ./src/client/mod.rs
pub mod core;
pub mod error;
pub mod middleware;

pub use crate::client::core::{FeedClient, resolve_url};
pub use crate::client::error::LoadError;

//! Remote content client.
//!
//! `cache` holds the keyed, time-limited result table; `client` performs the
//! HTTP requests; `query` binds both to the reactive tree.

pub mod cache;
pub mod client;
pub mod error;
pub mod query;

pub use cache::{ContentCache, QueryState};
pub use error::FetchError;
pub use query::{provide_content_client, use_content, ContentClient};

//! Remote data service client and feed loader for QuickSell.
//!
//! Every data operation is a pass-through request to the hosted backend
//! (PostgREST-style table endpoints). This crate provides:
//!
//! - [`FetchError`]: the error taxonomy for remote reads and writes
//! - [`ProductStore`]: the seam the feed loader and the UI program against
//! - [`SupabaseStore`]: the HTTP implementation
//! - [`load_feed`]: the fetch + batched-enrichment flow producing listings

mod error;
mod feed;
mod query;
mod store;

pub use error::FetchError;
pub use feed::load_feed;
pub use store::{ProductStore, RemoteConfig, SupabaseStore};

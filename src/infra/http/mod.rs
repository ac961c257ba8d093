//! HTTP adapters for the remote posts collection.

mod client;

pub use client::HttpPostsRepo;

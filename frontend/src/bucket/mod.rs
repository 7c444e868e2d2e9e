//! Object storage client handle

mod client;

pub use client::BucketClient;

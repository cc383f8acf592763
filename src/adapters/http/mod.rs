//! HTTP adapter for the article API

pub mod client;

pub use client::HttpArticleApi;

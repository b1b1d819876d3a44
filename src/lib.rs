//! epicgen turns a free-text feature description into an epic with stories,
//! using a remote generation backend, and renders the result as HTML or
//! exports it as Markdown.

pub mod api;
pub mod client;
pub mod config;
pub mod export;
pub mod models;
pub mod render;
pub mod slot;

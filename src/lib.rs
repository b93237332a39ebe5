//! bookshelf - A minimal in-memory book catalog served over HTML forms
//!
//! - [`catalog`]: records, identifier sequence, concurrent store
//! - [`dispatch`]: create/delete/list request handling
//! - [`render`]: catalog markup and page template
//! - [`http_server`]: axum routes and server
//! - [`cli`]: command-line entry point and configuration loading

pub mod catalog;
pub mod cli;
pub mod dispatch;
pub mod http_server;
pub mod render;

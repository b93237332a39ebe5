//! # HTTP Server Module
//!
//! Serves the catalog as an HTML form interface.
//!
//! # Endpoints
//!
//! - `GET <base>` - Rendered catalog page
//! - `POST <base>` - Create a record, or delete one with `action=delete`
//! - `GET /health` - Health check
//! - `GET /` - Redirect to `<base>`

pub mod catalog_routes;
pub mod config;
pub mod observability_routes;
pub mod server;

pub use catalog_routes::CatalogState;
pub use config::HttpServerConfig;
pub use server::HttpServer;

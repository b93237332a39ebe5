//! # Rendering
//!
//! Turns catalog records into markup. [`render`] produces the list fragment;
//! [`page`] wraps a fragment and an optional error into a full document.

mod escape;
mod fragment;
mod page;

pub use escape::escape;
pub use fragment::render;
pub use page::page;

//! Products domain module.
//!
//! Orders only need to tell products apart, so this crate exposes the catalog
//! identity and nothing else.

pub mod product;

pub use product::ProductId;

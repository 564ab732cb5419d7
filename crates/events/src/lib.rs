//! Domain event contract shared by the order-handling crates.

pub mod event;

pub use event::Event;

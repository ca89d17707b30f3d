//! The `host` crate hosts the form dispatcher outside the browser by replaying page fixtures.

mod catalog;
mod replay;
mod tracing_init;

pub use catalog::write_catalog;
pub use replay::{replay, Replay};
pub use tracing_init::init_tracing;

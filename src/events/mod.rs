//! Publish/dispatch mediator.
//!
//! - `registry` - Named-channel callback registry with a default context

mod registry;

pub use registry::{Callback, EventRegistry, callback};

//! Output of route commands.
//!
//! - [`sink`] - stdout mirror and routes file

mod sink;

pub use sink::RouteSink;

//! Input stages.
//!
//! - [`fetch`] - published range document over HTTP
//! - [`extras`] - optional local list of extra ranges

mod extras;
mod fetch;

pub use extras::{extras_or_empty, load_extras};
pub use fetch::{decode_range_document, fetch_range_document};

//! Headless testing helpers: render trees and strips to plain text for
//! snapshot-style assertions.

pub mod snapshot;

pub use snapshot::{compositor_to_string, render_to_string, strips_to_string};

//! Widget tree: slotmap-backed arena of boxed widgets.

pub mod node;
pub mod tree;

pub use node::NodeId;
pub use tree::Dom;

//! Node identifiers.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a widget in the [`Dom`](super::Dom). Copy,
    /// lightweight (u64), and never reused for a different widget.
    pub struct NodeId;
}

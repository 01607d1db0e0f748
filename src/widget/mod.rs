//! Widget system: capability traits, the `Widget` trait, shared base state.

pub mod base;
pub mod traits;

pub(crate) use base::forward_base;
pub use base::WidgetBase;
pub use traits::{Boundable, ChildInfo, Focusable, RenderContext, Styleable, Widget};

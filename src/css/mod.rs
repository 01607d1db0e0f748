//! Styling engine: selectors, specificity, cascade, themes.

pub mod tokenizer;
pub mod selector;
pub mod specificity;
pub mod styles;
pub mod border;
pub mod model;
pub mod parser;
pub mod properties;
pub mod theme;
pub mod themes;

pub use border::{BorderStyle, Junction, Neighbors};
pub use selector::{Selector, SelectorError};
pub use styles::Style;
pub use theme::Theme;

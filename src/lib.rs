//! # weft-tui
//!
//! Theme cascade and box-model layout for terminal user interfaces.
//!
//! A [`Theme`](css::Theme) maps selectors such as `button.primary:focus` to
//! partial [`Style`](css::Style)s. Resolving a widget's selector merges every
//! matching entry from least to most specific. Layout turns the resolved
//! margin, padding, border and size hints into integer cell bounds for a
//! tree of widgets, and rendering paints those bounds into a cell buffer.
//!
//! ## Core Systems
//!
//! - **[`css`]**: selectors, styles, cascade order, border glyph sets, themes
//!   and the theme-sheet loader
//! - **[`dom`]**: slotmap-backed widget tree
//! - **[`layout`]**: box model, flex and grid containers, the tree layout pass
//! - **[`widget`]**: capability traits and the shared widget base
//! - **[`widgets`]**: `Static`, `Button`, `Flex`, `Grid`
//! - **[`render`]**: strips, compositor, frame painting, terminal colors
//! - **[`testing`]**: plain-text snapshot helpers
//! - **[`geometry`]**: `Size`, `Region`, `Insets`
//!
//! ```ignore
//! use weft_tui::css::themes;
//! use weft_tui::dom::Dom;
//! use weft_tui::widgets::{Button, Flex};
//! use weft_tui::{layout::LayoutEngine, render};
//!
//! let theme = themes::default_theme();
//! let mut dom = Dom::new();
//! let root = dom.insert(Flex::horizontal());
//! dom.insert_child(root, Button::new("Save").with_class("primary"));
//!
//! LayoutEngine::new().run(&mut dom, &theme, 80, 24);
//! let screen = render::render(&dom, &theme, 80, 24);
//! ```

// Foundation
pub mod geometry;

// Core systems
pub mod css;
pub mod dom;
pub mod layout;

// Widget system
pub mod widget;
pub mod widgets;

// Rendering
pub mod render;
pub mod testing;

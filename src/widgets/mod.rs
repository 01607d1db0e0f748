//! Built-in widgets: Static, Button, Flex, Grid.

pub mod button;
pub mod flex;
pub mod grid;
pub mod static_widget;

pub use button::Button;
pub use flex::Flex;
pub use grid::Grid;
pub use static_widget::Static;

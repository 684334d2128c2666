mod color;
mod enums;
mod style;

pub use color::Color;
pub use enums::{Justify, PointerEvents, Size, TextStyle};
pub use style::Style;

pub mod style;

pub use style::{select_style, ColoredStyle};

//! Terminal formatting helpers shared by entry rendering.

mod color;

pub use color::{Color, colorize};

//! Grid slot layout and portrait column scrolling.

mod grid;
mod scroll;

pub use grid::{GridLayout, LayoutKind};
pub use scroll::ScrollState;

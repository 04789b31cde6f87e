//! Error types

mod frame;
mod input;
mod render;

pub use frame::*;
pub use input::*;
pub use render::*;

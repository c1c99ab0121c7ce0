mod buffer;
mod interpreter;
pub mod render;
pub mod texts;

pub use buffer::*;
pub use interpreter::*;

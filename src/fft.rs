//! FFT module - re-exports from submodules

mod buffer;
mod core;

pub use buffer::ComplexBuffer;
pub use self::core::*;

//! Styling for CV Forge.

mod styles;

pub use styles::GLOBAL_STYLES;

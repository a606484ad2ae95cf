//! Page components for CV Forge.

mod form;
mod result;

pub use form::FormPage;
pub use result::ResultPage;
